//! QR payload classification: free text in, vendor contact record out.

mod classifier;
pub mod config;
mod error;
pub mod interpret;

pub use classifier::{Classifier, Scan, ScanKind, classify};
pub use config::ClassifierConfig;
pub use error::ScanError;
