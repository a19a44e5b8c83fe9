//! Format-specific interpreters for scanned payloads.
//!
//! Each interpreter returns `None` when its precondition does not hold
//! (the payload is "declined") and `Some(record)` once it has consumed the
//! payload, even if the record ends up empty. Nothing in here fails: bad
//! JSON, unparseable URLs, and regex misses all mean "decline" or
//! "leave the field unset".

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use url::Url;
use vendorscan_core::{ContactField, ContactRecord, VendorCategory};

static URL_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^https?://").expect("url prefix regex"));

static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex"));

// Optional '+', leading 1-9, 4 to 15 digits in total.
static PHONE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[1-9][0-9]{3,14}$").expect("phone regex"));

// ── JSON ──

/// A JSON object carrying any of the recognised camelCase keys.
///
/// Only string values are copied. `category` is copied only when it names a
/// known [`VendorCategory`].
pub fn json(input: &str) -> Option<ContactRecord> {
    let Ok(Value::Object(map)) = serde_json::from_str::<Value>(input) else {
        return None;
    };

    let mut record = ContactRecord::default();
    for field in ContactField::ALL {
        if let Some(value) = map.get(field.json_key()).and_then(Value::as_str) {
            record.set(field, value);
        }
    }
    record.category = map
        .get("category")
        .and_then(Value::as_str)
        .and_then(|s| s.parse::<VendorCategory>().ok());

    Some(record)
}

// ── URL ──

/// An `http(s)://` link. Instagram and Facebook profile links get their
/// handle pulled out; any other link names the business after its host.
pub fn url(input: &str) -> Option<ContactRecord> {
    if !URL_PREFIX.is_match(input) {
        return None;
    }

    let mut record = ContactRecord {
        website: Some(input.to_string()),
        ..Default::default()
    };

    let Ok(parsed) = Url::parse(input) else {
        return Some(record);
    };
    let Some(host) = parsed.host_str() else {
        return Some(record);
    };
    let first_segment = parsed
        .path_segments()
        .and_then(|mut segments| segments.next())
        .filter(|s| !s.is_empty());

    if host.contains("instagram.com") {
        if let Some(handle) = first_segment {
            record.instagram = Some(format!("@{handle}"));
            record.business_name = Some(handle.to_string());
        }
    } else if host.contains("facebook.com") {
        record.facebook = Some(input.to_string());
        if let Some(page) = first_segment {
            record.business_name = Some(page.to_string());
        }
    } else {
        let bare = host.strip_prefix("www.").unwrap_or(host);
        if let Some(label) = bare.split('.').next().filter(|l| !l.is_empty()) {
            record.business_name = Some(label.to_string());
        }
    }

    Some(record)
}

// ── Email ──

pub fn email(input: &str) -> Option<ContactRecord> {
    if !EMAIL.is_match(input) {
        return None;
    }
    let local = input.split_once('@').map(|(local, _)| local)?;
    Some(ContactRecord {
        email: Some(input.to_string()),
        business_name: Some(local.to_string()),
        ..Default::default()
    })
}

// ── Phone ──

/// A phone number, allowing spaces, hyphens and parentheses as separators.
pub fn phone(input: &str, name_prefix: &str) -> Option<ContactRecord> {
    let digits: String = input
        .chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, '-' | '(' | ')'))
        .collect();
    if !PHONE.is_match(&digits) {
        return None;
    }
    Some(ContactRecord {
        phone: Some(input.to_string()),
        name: Some(format!("{name_prefix} {input}")),
        ..Default::default()
    })
}

// ── vCard ──

fn looks_like_vcard(input: &str) -> bool {
    input.contains("BEGIN:VCARD")
        || input.lines().map(str::trim).any(|line| {
            line.starts_with("FN:") || line.starts_with("ORG:")
        })
}

/// Value after the first colon of a property line that may carry
/// parameters, e.g. `TEL;TYPE=cell:+1 415 555 1234`.
fn after_first_colon(line: &str) -> Option<&str> {
    line.split_once(':').map(|(_, value)| value.trim())
}

/// `N:Last;First;Middle;Prefix;Suffix` rendered as `"First Last"`.
fn structured_name(value: &str) -> String {
    let mut parts = value.split(';');
    let last = parts.next().unwrap_or_default().trim();
    let first = parts.next().unwrap_or_default().trim();
    format!("{first} {last}").trim().to_string()
}

/// A vCard, or any text with `FN:`/`ORG:` lines.
///
/// Lines are applied in document order. `FN:` always overwrites the name;
/// `N:` only fills it while no name is set. So an `N:` line followed by an
/// `FN:` line ends with the `FN:` value, and with several `FN:` lines the
/// last one wins.
pub fn vcard(input: &str) -> Option<ContactRecord> {
    if !looks_like_vcard(input) {
        return None;
    }

    let mut record = ContactRecord::default();
    for line in input.lines().map(str::trim) {
        let (field, value) = if let Some(v) = line.strip_prefix("FN:") {
            (ContactField::Name, v.trim().to_string())
        } else if let Some(v) = line.strip_prefix("N:") {
            if record.name.is_some() {
                continue;
            }
            (ContactField::Name, structured_name(v))
        } else if let Some(v) = line.strip_prefix("ORG:") {
            (ContactField::BusinessName, v.trim().to_string())
        } else if line.starts_with("EMAIL:") || line.starts_with("EMAIL;") {
            let Some(v) = after_first_colon(line) else {
                continue;
            };
            (ContactField::Email, v.to_string())
        } else if line.starts_with("TEL:") || line.starts_with("TEL;") {
            let Some(v) = after_first_colon(line) else {
                continue;
            };
            (ContactField::Phone, v.to_string())
        } else if let Some(v) = line.strip_prefix("URL:") {
            (ContactField::Website, v.trim().to_string())
        } else if let Some(v) = line.strip_prefix("NOTE:") {
            (ContactField::Notes, v.trim().to_string())
        } else {
            continue;
        };

        if !value.is_empty() {
            record.set(field, value);
        }
    }

    Some(record)
}

// ── Plain text ──

/// Terminal fallback: the whole payload is both the name and the business.
pub fn plain_text(input: &str) -> ContactRecord {
    let text = input.trim().to_string();
    ContactRecord {
        name: Some(text.clone()),
        business_name: Some(text),
        ..Default::default()
    }
}
