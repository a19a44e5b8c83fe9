//! Editable vendor contact that scan results are merged into.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::category::VendorCategory;
use crate::record::{ContactField, ContactRecord};

/// A vendor contact as held in the planner's contact form.
///
/// Unlike [`ContactRecord`], every field is always present; an empty string
/// means "not filled in yet".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VendorContact {
    pub name: String,
    pub business_name: String,
    pub email: String,
    pub phone: String,
    pub website: String,
    pub instagram: String,
    pub facebook: String,
    pub notes: String,
    pub category: VendorCategory,
}

impl VendorContact {
    fn slot_mut(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::BusinessName => &mut self.business_name,
            ContactField::Email => &mut self.email,
            ContactField::Phone => &mut self.phone,
            ContactField::Website => &mut self.website,
            ContactField::Instagram => &mut self.instagram,
            ContactField::Facebook => &mut self.facebook,
            ContactField::Notes => &mut self.notes,
        }
    }

    /// Merge a scan into this contact.
    ///
    /// Populated scan fields overwrite what is already there; unpopulated
    /// ones leave the contact untouched. Returns the string fields whose value
    /// actually changed.
    pub fn apply_scan(&mut self, scan: &ContactRecord) -> Vec<ContactField> {
        let mut updated = Vec::new();
        for field in scan.populated_fields() {
            let Some(value) = scan.get(field) else {
                continue;
            };
            let slot = self.slot_mut(field);
            if slot.as_str() != value {
                *slot = value.to_string();
                updated.push(field);
            }
        }
        if let Some(category) = scan.category {
            self.category = category;
        }
        debug!(
            updated = ?updated.iter().map(|f| f.json_key()).collect::<Vec<_>>(),
            category = %self.category,
            "applied scan to vendor contact"
        );
        updated
    }

    /// Name to show in lists: the person, else the business.
    pub fn display_name(&self) -> &str {
        if !self.name.is_empty() {
            &self.name
        } else {
            &self.business_name
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn existing() -> VendorContact {
        VendorContact {
            name: "Jane".into(),
            business_name: "Old Florals".into(),
            phone: "555-0100".into(),
            notes: "met at expo".into(),
            ..Default::default()
        }
    }

    #[test]
    fn populated_scan_fields_overwrite() {
        let mut contact = existing();
        let scan = ContactRecord {
            business_name: Some("Doe Florals".into()),
            email: Some("jane@doeflorals.com".into()),
            ..Default::default()
        };

        let updated = contact.apply_scan(&scan);
        assert_eq!(updated, vec![ContactField::BusinessName, ContactField::Email]);
        assert_eq!(contact.business_name, "Doe Florals");
        assert_eq!(contact.email, "jane@doeflorals.com");
    }

    #[test]
    fn unpopulated_scan_fields_keep_existing_values() {
        let mut contact = existing();
        let scan = ContactRecord {
            name: Some(String::new()),
            website: Some("https://doeflorals.com".into()),
            ..Default::default()
        };

        contact.apply_scan(&scan);
        assert_eq!(contact.name, "Jane");
        assert_eq!(contact.phone, "555-0100");
        assert_eq!(contact.notes, "met at expo");
        assert_eq!(contact.website, "https://doeflorals.com");
    }

    #[test]
    fn whitespace_only_scan_values_still_overwrite() {
        let mut contact = existing();
        let scan = ContactRecord {
            notes: Some(" ".into()),
            ..Default::default()
        };
        assert_eq!(contact.apply_scan(&scan), vec![ContactField::Notes]);
        assert_eq!(contact.notes, " ");
    }

    #[test]
    fn identical_values_are_not_reported_as_updates() {
        let mut contact = existing();
        let scan = ContactRecord {
            name: Some("Jane".into()),
            ..Default::default()
        };
        assert!(contact.apply_scan(&scan).is_empty());
    }

    #[test]
    fn category_only_changes_when_scan_has_one() {
        let mut contact = VendorContact {
            category: VendorCategory::Florist,
            ..Default::default()
        };
        contact.apply_scan(&ContactRecord::default());
        assert_eq!(contact.category, VendorCategory::Florist);

        contact.apply_scan(&ContactRecord {
            category: Some(VendorCategory::Baker),
            ..Default::default()
        });
        assert_eq!(contact.category, VendorCategory::Baker);
    }

    #[test]
    fn display_name_falls_back_to_business() {
        let mut contact = VendorContact {
            business_name: "Doe Florals".into(),
            ..Default::default()
        };
        assert_eq!(contact.display_name(), "Doe Florals");
        contact.name = "Jane Doe".into();
        assert_eq!(contact.display_name(), "Jane Doe");
    }

    #[test]
    fn deserializes_partial_documents() {
        let contact: VendorContact =
            serde_json::from_str(r#"{"businessName":"Doe Florals","category":"Florist"}"#)
                .unwrap();
        assert_eq!(contact.business_name, "Doe Florals");
        assert_eq!(contact.category, VendorCategory::Florist);
        assert!(contact.email.is_empty());
    }
}
