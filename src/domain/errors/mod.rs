//! Domain error types.

mod catalog_error;
mod submission_error;

pub use catalog_error::CatalogError;
pub use submission_error::SubmissionError;
