//! Vendor categories a wedding contact can be filed under.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Fixed set of vendor categories.
///
/// The wire label (see [`VendorCategory::as_str`]) is what QR payloads and
/// stored vendor documents carry, so it is the only accepted spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum VendorCategory {
    Photographer,
    Videographer,
    Venue,
    Caterer,
    Florist,
    Baker,
    #[serde(rename = "DJ")]
    Dj,
    Band,
    Officiant,
    Planner,
    #[serde(rename = "Hair & Makeup")]
    HairMakeup,
    Rentals,
    Transportation,
    #[default]
    Other,
}

impl VendorCategory {
    pub const ALL: [VendorCategory; 14] = [
        Self::Photographer,
        Self::Videographer,
        Self::Venue,
        Self::Caterer,
        Self::Florist,
        Self::Baker,
        Self::Dj,
        Self::Band,
        Self::Officiant,
        Self::Planner,
        Self::HairMakeup,
        Self::Rentals,
        Self::Transportation,
        Self::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Photographer => "Photographer",
            Self::Videographer => "Videographer",
            Self::Venue => "Venue",
            Self::Caterer => "Caterer",
            Self::Florist => "Florist",
            Self::Baker => "Baker",
            Self::Dj => "DJ",
            Self::Band => "Band",
            Self::Officiant => "Officiant",
            Self::Planner => "Planner",
            Self::HairMakeup => "Hair & Makeup",
            Self::Rentals => "Rentals",
            Self::Transportation => "Transportation",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for VendorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VendorCategory {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| CoreError::UnknownCategory(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_labels_round_trip_through_from_str() {
        for category in VendorCategory::ALL {
            assert_eq!(category.as_str().parse::<VendorCategory>().unwrap(), category);
        }
    }

    #[test]
    fn from_str_rejects_unknown_and_case_variants() {
        assert!("Juggler".parse::<VendorCategory>().is_err());
        assert!("photographer".parse::<VendorCategory>().is_err());
        assert!("".parse::<VendorCategory>().is_err());
    }

    #[test]
    fn serde_uses_wire_labels() {
        let json = serde_json::to_string(&VendorCategory::HairMakeup).unwrap();
        assert_eq!(json, "\"Hair & Makeup\"");

        let dj: VendorCategory = serde_json::from_str("\"DJ\"").unwrap();
        assert_eq!(dj, VendorCategory::Dj);
    }

    #[test]
    fn default_is_other() {
        assert_eq!(VendorCategory::default(), VendorCategory::Other);
    }

    #[test]
    fn unknown_category_error_names_the_value() {
        let err = "Juggler".parse::<VendorCategory>().unwrap_err();
        assert_eq!(err.to_string(), "unknown vendor category: Juggler");
    }
}
