//! Vertical card display for scanned contacts.
//!
//! Renders a [`ContactRecord`] as grouped `label  value` lines, skipping
//! sections with nothing in them.

use vendorscan_core::{ContactField, ContactRecord};
use vendorscan_scan::ScanKind;

// ── Card section groupings ──

const CONTACT: &[ContactField] = &[
    ContactField::Name,
    ContactField::BusinessName,
    ContactField::Email,
    ContactField::Phone,
];

const ONLINE: &[ContactField] = &[
    ContactField::Website,
    ContactField::Instagram,
    ContactField::Facebook,
];

const NOTES: &[ContactField] = &[ContactField::Notes];

fn label(field: ContactField) -> &'static str {
    match field {
        ContactField::Name => "Name",
        ContactField::BusinessName => "Business",
        ContactField::Email => "Email",
        ContactField::Phone => "Phone",
        ContactField::Website => "Website",
        ContactField::Instagram => "Instagram",
        ContactField::Facebook => "Facebook",
        ContactField::Notes => "Notes",
    }
}

// ── Public API ──

/// Render a scanned record as a card headed by the interpreter that matched.
pub fn render_card(kind: ScanKind, record: &ContactRecord) -> String {
    let mut out = String::new();
    out.push_str(&format!("=== {kind} ===\n"));
    if let Some(category) = record.category {
        out.push_str(&format!("{category}\n"));
    }
    out.push('\n');

    render_section(&mut out, record, "Contact", CONTACT);
    render_section(&mut out, record, "Online", ONLINE);
    render_section(&mut out, record, "Notes", NOTES);
    out
}

// ── Section rendering ──

fn render_section(out: &mut String, record: &ContactRecord, header: &str, fields: &[ContactField]) {
    if !fields.iter().any(|&f| record.is_populated(f)) {
        return;
    }

    out.push_str(&format!("{header}\n"));
    for &field in fields {
        if !record.is_populated(field) {
            continue;
        }
        if let Some(value) = record.get(field) {
            out.push_str(&format!("  {:<12} {}\n", label(field), value));
        }
    }
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use vendorscan_core::VendorCategory;

    #[test]
    fn card_skips_empty_sections() {
        let record = ContactRecord {
            name: Some("Jane Doe".into()),
            email: Some("jane@doeflorals.com".into()),
            ..Default::default()
        };
        let card = render_card(ScanKind::VCard, &record);

        assert!(card.starts_with("=== vcard ===\n"));
        assert!(card.contains("Contact\n"));
        assert!(card.contains("  Name         Jane Doe\n"));
        assert!(card.contains("  Email        jane@doeflorals.com\n"));
        assert!(!card.contains("Online"));
        assert!(!card.contains("Notes"));
    }

    #[test]
    fn card_exact_layout() {
        let record = ContactRecord {
            name: Some("Doe Florals".into()),
            business_name: Some("Doe Florals".into()),
            notes: Some("peonies".into()),
            ..Default::default()
        };
        let expected = "=== plain_text ===\n\n\
                        Contact\n  Name         Doe Florals\n  Business     Doe Florals\n\n\
                        Notes\n  Notes        peonies\n\n";
        assert_eq!(render_card(ScanKind::PlainText, &record), expected);
    }

    #[test]
    fn card_shows_category_under_header() {
        let record = ContactRecord {
            business_name: Some("Doe Florals".into()),
            category: Some(VendorCategory::Florist),
            ..Default::default()
        };
        let card = render_card(ScanKind::Json, &record);
        assert!(card.starts_with("=== json ===\nFlorist\n"));
    }

    #[test]
    fn card_groups_online_fields() {
        let record = ContactRecord {
            website: Some("https://www.instagram.com/janedoe".into()),
            instagram: Some("@janedoe".into()),
            business_name: Some("janedoe".into()),
            ..Default::default()
        };
        let card = render_card(ScanKind::Url, &record);
        let online = card.find("Online").unwrap();
        let insta = card.find("@janedoe").unwrap();
        assert!(insta > online);
    }
}
