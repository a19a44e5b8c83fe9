//! Tunables for the classifier.

/// Prefix for the placeholder name given to phone-only scans.
pub const DEFAULT_PHONE_NAME_PREFIX: &str = "Contact";

/// Maximum characters of raw input echoed back in a failure.
pub const DEFAULT_EXCERPT_LEN: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifierConfig {
    /// Phone-only scans get `name = "{phone_name_prefix} {raw}"`.
    pub phone_name_prefix: String,
    /// Length cap, in characters, of the excerpt carried by
    /// [`ScanError::NoUsableData`](crate::ScanError::NoUsableData).
    pub excerpt_len: usize,
    /// When set, a JSON or URL payload that yields nothing usable is handed
    /// on to the rest of the chain instead of failing the scan.
    pub fall_through_on_empty: bool,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            phone_name_prefix: DEFAULT_PHONE_NAME_PREFIX.to_string(),
            excerpt_len: DEFAULT_EXCERPT_LEN,
            fall_through_on_empty: false,
        }
    }
}
