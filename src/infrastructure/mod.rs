//! Infrastructure layer with adapters for configuration, catalog sources and delivery.

/// Catalog sources.
pub mod catalog;
/// Application configuration.
pub mod config;
/// In-process notifications.
pub mod notifications;
pub mod search;

pub use catalog::{CatalogFormat, FileCatalogSource, SeedCatalogSource, catalog_source};
pub use config::{AppConfig, CliArgs, ConfigFile, LogLevel};
pub use notifications::{LogNotificationService, PendingNotice};
pub use search::{FuzzySearcher, FuzzyTagSuggester};
