pub mod category;
pub mod error;
pub mod record;
pub mod vendor;

pub use category::VendorCategory;
pub use error::CoreError;
pub use record::{ContactField, ContactRecord};
pub use vendor::VendorContact;
