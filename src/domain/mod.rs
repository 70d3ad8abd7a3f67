//! Domain layer with core catalog entities, search and port definitions.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Port definitions.
pub mod ports;
/// Catalog filtering.
pub mod search;

pub use entities::{DesignId, DesignRecord, Tag, TagSet};
pub use errors::{CatalogError, SubmissionError};
pub use ports::{CatalogPort, CatalogSnapshot, NotificationPort};
pub use search::{DesignQuery, TagSuggestion, TagSuggestionProvider, filter};
