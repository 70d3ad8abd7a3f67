//! Data transfer objects for the application layer.

mod submission_dto;

pub use submission_dto::{SubmissionReceipt, SubmissionStatus};
