//! Catalog loading use case implementation.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::application::services::{ActivityInbox, CatalogStore};
use crate::domain::entities::CreatorProfile;
use crate::domain::errors::CatalogError;
use crate::domain::ports::CatalogPort;

/// Everything the views need after the catalog is loaded.
#[derive(Debug)]
pub struct LoadedCatalog {
    /// Shared design catalog.
    pub store: CatalogStore,
    /// Notifications inbox.
    pub inbox: ActivityInbox,
    /// Signed-in creator, if the source provided one.
    pub profile: Option<CreatorProfile>,
}

/// Loads the catalog from a source and builds the shared store.
#[derive(Clone)]
pub struct LoadCatalogUseCase {
    source: Arc<dyn CatalogPort>,
}

impl LoadCatalogUseCase {
    /// Creates new load use case.
    #[must_use]
    pub fn new(source: Arc<dyn CatalogPort>) -> Self {
        Self { source }
    }

    /// Loads the catalog.
    ///
    /// # Errors
    /// Returns error if the source fails or the catalog has duplicate ids.
    pub async fn execute(&self) -> Result<LoadedCatalog, CatalogError> {
        debug!(source = %self.source.describe(), "Loading catalog");

        let snapshot = self.source.load().await.map_err(|e| {
            warn!(error = %e, "Catalog source failed");
            e
        })?;

        let design_count = snapshot.designs.len();
        let activity_count = snapshot.activity.len();
        let store = CatalogStore::new(snapshot.designs)?;

        if let Some(profile) = &snapshot.profile {
            let missing = profile
                .design_ids
                .iter()
                .filter(|id| store.get(id).is_none())
                .count();
            if missing > 0 {
                warn!(missing, creator = %profile.name, "Profile lists designs missing from catalog");
            }
        }

        info!(
            designs = design_count,
            notifications = activity_count,
            source = %self.source.describe(),
            "Catalog loaded"
        );

        Ok(LoadedCatalog {
            store,
            inbox: ActivityInbox::new(snapshot.activity),
            profile: snapshot.profile,
        })
    }
}
