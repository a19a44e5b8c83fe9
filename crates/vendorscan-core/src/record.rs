//! Sparse contact record produced by a single QR scan.

use serde::{Deserialize, Serialize};

use crate::category::VendorCategory;

/// The string-valued fields a [`ContactRecord`] can carry.
///
/// Doubles as the allow-list for copying fields out of untyped payloads:
/// each variant knows its camelCase wire key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    BusinessName,
    Email,
    Phone,
    Website,
    Instagram,
    Facebook,
    Notes,
}

impl ContactField {
    pub const ALL: [ContactField; 8] = [
        Self::Name,
        Self::BusinessName,
        Self::Email,
        Self::Phone,
        Self::Website,
        Self::Instagram,
        Self::Facebook,
        Self::Notes,
    ];

    pub fn json_key(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::BusinessName => "businessName",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Website => "website",
            Self::Instagram => "instagram",
            Self::Facebook => "facebook",
            Self::Notes => "notes",
        }
    }
}

/// Best-effort contact data extracted from a scanned payload.
///
/// Every field is optional. A record is only useful when at least one field
/// is populated; see [`ContactRecord::is_empty`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<VendorCategory>,
}

impl ContactRecord {
    pub fn get(&self, field: ContactField) -> Option<&str> {
        let slot = match field {
            ContactField::Name => &self.name,
            ContactField::BusinessName => &self.business_name,
            ContactField::Email => &self.email,
            ContactField::Phone => &self.phone,
            ContactField::Website => &self.website,
            ContactField::Instagram => &self.instagram,
            ContactField::Facebook => &self.facebook,
            ContactField::Notes => &self.notes,
        };
        slot.as_deref()
    }

    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::BusinessName => &mut self.business_name,
            ContactField::Email => &mut self.email,
            ContactField::Phone => &mut self.phone,
            ContactField::Website => &mut self.website,
            ContactField::Instagram => &mut self.instagram,
            ContactField::Facebook => &mut self.facebook,
            ContactField::Notes => &mut self.notes,
        };
        *slot = Some(value.into());
    }

    /// Whether `field` holds a non-empty string. Whitespace counts as data.
    pub fn is_populated(&self, field: ContactField) -> bool {
        self.get(field).is_some_and(|v| !v.is_empty())
    }

    /// Populated string fields, in declaration order.
    pub fn populated_fields(&self) -> Vec<ContactField> {
        ContactField::ALL
            .into_iter()
            .filter(|&f| self.is_populated(f))
            .collect()
    }

    /// True when nothing usable was extracted.
    ///
    /// A category on its own counts as usable data.
    pub fn is_empty(&self) -> bool {
        self.category.is_none() && self.populated_fields().is_empty()
    }
}
