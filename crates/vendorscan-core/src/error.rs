use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown vendor category: {0}")]
    UnknownCategory(String),
}
