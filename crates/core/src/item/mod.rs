mod error;
mod types;

pub use error::ValidationError;
pub use types::{ItemRecord, SubmitItem};
