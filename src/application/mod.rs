//! Application layer with services, use cases and DTOs.

/// Data transfer objects.
pub mod dto;
/// Shared services.
pub mod services;
/// Use case implementations.
pub mod use_cases;

pub use dto::{SubmissionReceipt, SubmissionStatus};
pub use services::{ActivityInbox, CatalogStore, SearchSession};
pub use use_cases::{LoadCatalogUseCase, LoadedCatalog, SubmitDesignUseCase};
