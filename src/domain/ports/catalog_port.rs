//! Catalog source port definition.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::entities::{ActivityNotification, CreatorProfile, DesignRecord};
use crate::domain::errors::CatalogError;

/// Everything a catalog source provides in one load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    /// Designs in display order.
    #[serde(default)]
    pub designs: Vec<DesignRecord>,
    /// Inbox entries, newest first.
    #[serde(default)]
    pub activity: Vec<ActivityNotification>,
    /// The signed-in creator, if the source knows one.
    #[serde(default)]
    pub profile: Option<CreatorProfile>,
}

/// Port for loading the design catalog.
#[async_trait]
pub trait CatalogPort: Send + Sync {
    /// Loads the catalog.
    async fn load(&self) -> Result<CatalogSnapshot, CatalogError>;

    /// Short human-readable description of where the catalog comes from.
    fn describe(&self) -> String;
}

#[cfg(test)]
pub mod mock {
    use super::*;

    /// Mock catalog source returning a fixed snapshot or error.
    pub struct MockCatalogPort {
        result: Result<CatalogSnapshot, CatalogError>,
    }

    impl MockCatalogPort {
        /// Creates a source that returns the snapshot.
        pub fn new(snapshot: CatalogSnapshot) -> Self {
            Self {
                result: Ok(snapshot),
            }
        }

        /// Creates a source that fails.
        pub fn failing(error: CatalogError) -> Self {
            Self { result: Err(error) }
        }
    }

    #[async_trait]
    impl CatalogPort for MockCatalogPort {
        async fn load(&self) -> Result<CatalogSnapshot, CatalogError> {
            self.result.clone()
        }

        fn describe(&self) -> String {
            "mock catalog".to_string()
        }
    }
}
