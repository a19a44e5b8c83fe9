use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScanError {
    /// The matched interpreter found nothing worth keeping.
    #[error("no usable contact data in scanned payload: {excerpt:?}")]
    NoUsableData { excerpt: String },
}

/// First `max_chars` characters of `raw`, cut on a char boundary.
pub(crate) fn excerpt(raw: &str, max_chars: usize) -> String {
    raw.chars().take(max_chars).collect()
}
