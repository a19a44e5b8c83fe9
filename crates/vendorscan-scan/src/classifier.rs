//! Ordered interpreter chain turning a scanned QR payload into a contact.
//!
//! Interpreters run in a fixed order (JSON, URL, email, phone, vCard) and
//! the first one whose precondition matches consumes the payload. Plain text
//! is the terminal fallback, so every payload is consumed by exactly one
//! interpreter. The scan fails only when that interpreter produced nothing
//! usable.

use std::fmt;

use tracing::{debug, trace, warn};
use vendorscan_core::ContactRecord;

use crate::config::ClassifierConfig;
use crate::error::{ScanError, excerpt};
use crate::interpret;

/// Which interpreter consumed a payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScanKind {
    Json,
    Url,
    Email,
    Phone,
    VCard,
    PlainText,
}

impl ScanKind {
    /// Interpreters in the order they are tried. Plain text is last and
    /// always matches.
    pub const CHAIN: [ScanKind; 6] = [
        Self::Json,
        Self::Url,
        Self::Email,
        Self::Phone,
        Self::VCard,
        Self::PlainText,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Url => "url",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::VCard => "vcard",
            Self::PlainText => "plain_text",
        }
    }

    /// Interpreters whose extraction can legitimately come up empty.
    fn may_yield_empty(&self) -> bool {
        matches!(self, Self::Json | Self::Url)
    }
}

impl fmt::Display for ScanKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a successful scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scan {
    pub kind: ScanKind,
    pub record: ContactRecord,
}

/// Stateless classifier; share one across threads freely.
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    config: ClassifierConfig,
}

impl Classifier {
    pub fn new(config: ClassifierConfig) -> Self {
        Self { config }
    }

    /// Classify a payload into a contact record.
    pub fn classify(&self, raw: &str) -> Result<ContactRecord, ScanError> {
        self.classify_detailed(raw).map(|scan| scan.record)
    }

    /// Classify a payload, also reporting which interpreter matched.
    ///
    /// Leading and trailing whitespace is ignored when matching and is not
    /// carried into the record. The failure excerpt is taken from `raw` as
    /// given.
    pub fn classify_detailed(&self, raw: &str) -> Result<Scan, ScanError> {
        let input = raw.trim();
        let (kind, record) = self.run_chain(input);

        if record.is_empty() {
            warn!(kind = %kind, len = raw.len(), "scanned payload yielded no contact data");
            return Err(ScanError::NoUsableData {
                excerpt: excerpt(raw, self.config.excerpt_len),
            });
        }

        debug!(
            kind = %kind,
            fields = ?record
                .populated_fields()
                .iter()
                .map(|f| f.json_key())
                .collect::<Vec<_>>(),
            category = ?record.category,
            "classified scanned payload"
        );
        Ok(Scan { kind, record })
    }

    fn run_chain(&self, input: &str) -> (ScanKind, ContactRecord) {
        for kind in ScanKind::CHAIN {
            let Some(record) = self.interpret(kind, input) else {
                trace!(kind = %kind, "interpreter declined");
                continue;
            };
            if record.is_empty() && kind.may_yield_empty() && self.config.fall_through_on_empty {
                trace!(kind = %kind, "interpreter matched but found nothing, falling through");
                continue;
            }
            return (kind, record);
        }
        unreachable!("plain-text interpreter always matches")
    }

    /// Run one interpreter; `None` means it declined.
    fn interpret(&self, kind: ScanKind, input: &str) -> Option<ContactRecord> {
        match kind {
            ScanKind::Json => interpret::json(input),
            ScanKind::Url => interpret::url(input),
            ScanKind::Email => interpret::email(input),
            ScanKind::Phone => interpret::phone(input, &self.config.phone_name_prefix),
            ScanKind::VCard => interpret::vcard(input),
            ScanKind::PlainText => Some(interpret::plain_text(input)),
        }
    }
}

/// Classify with the default configuration.
pub fn classify(raw: &str) -> Result<ContactRecord, ScanError> {
    Classifier::default().classify(raw)
}
