//! Catalog source adapters.

mod file_source;
mod seed;

use std::path::Path;
use std::sync::Arc;

use crate::domain::ports::CatalogPort;

pub use file_source::{CatalogFormat, FileCatalogSource};
pub use seed::SeedCatalogSource;

/// Picks the file source when a path is configured, the built-in catalog otherwise.
#[must_use]
pub fn catalog_source(path: Option<&Path>) -> Arc<dyn CatalogPort> {
    match path {
        Some(path) => Arc::new(FileCatalogSource::new(path)),
        None => Arc::new(SeedCatalogSource::new()),
    }
}
