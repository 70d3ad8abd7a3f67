//! Shared in-memory design catalog.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, warn};

use crate::domain::entities::{DesignId, DesignRecord};
use crate::domain::errors::CatalogError;
use crate::domain::search::DesignQuery;

#[derive(Debug, Default)]
struct CatalogState {
    designs: Vec<DesignRecord>,
    index: HashMap<DesignId, usize>,
}

/// Handle to the one catalog every view reads from.
///
/// Clones share the same underlying state, so a like toggled through one
/// handle is visible through all of them.
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    inner: Arc<RwLock<CatalogState>>,
}

impl CatalogStore {
    /// Builds a store from designs in display order.
    ///
    /// # Errors
    /// Returns `DuplicateDesign` if two designs share an id.
    pub fn new(designs: Vec<DesignRecord>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(designs.len());
        for (position, design) in designs.iter().enumerate() {
            if index.insert(design.id().clone(), position).is_some() {
                warn!(id = %design.id(), "Duplicate design id in catalog");
                return Err(CatalogError::duplicate(design.id().as_str()));
            }
        }

        debug!(count = designs.len(), "Catalog store created");

        Ok(Self {
            inner: Arc::new(RwLock::new(CatalogState { designs, index })),
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.read().designs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.read().designs.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: &DesignId) -> Option<DesignRecord> {
        let state = self.inner.read();
        state.index.get(id).map(|&i| state.designs[i].clone())
    }

    /// Looks up several designs in the given order, skipping unknown ids.
    #[must_use]
    pub fn get_many(&self, ids: &[DesignId]) -> Vec<DesignRecord> {
        let state = self.inner.read();
        ids.iter()
            .filter_map(|id| state.index.get(id).map(|&i| state.designs[i].clone()))
            .collect()
    }

    /// Copy of the whole catalog in display order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<DesignRecord> {
        self.inner.read().designs.clone()
    }

    #[must_use]
    pub fn search(&self, query: &DesignQuery) -> Vec<DesignRecord> {
        let state = self.inner.read();
        query.apply(&state.designs)
    }

    /// Designs the viewer has liked, in display order.
    #[must_use]
    pub fn liked(&self) -> Vec<DesignRecord> {
        self.inner
            .read()
            .designs
            .iter()
            .filter(|d| d.is_liked())
            .cloned()
            .collect()
    }

    /// Flips the viewer's like on a design and stores the result.
    ///
    /// # Errors
    /// Returns `DesignNotFound` for an unknown id.
    pub fn toggle_like(&self, id: &DesignId) -> Result<DesignRecord, CatalogError> {
        let mut state = self.inner.write();
        let position = *state
            .index
            .get(id)
            .ok_or_else(|| CatalogError::not_found(id.as_str()))?;

        let updated = state.designs[position].toggle_like();
        state.designs[position] = updated.clone();

        debug!(
            id = %id,
            liked = updated.is_liked(),
            likes = updated.like_count(),
            "Toggled like"
        );

        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::TagSet;

    fn store() -> CatalogStore {
        CatalogStore::new(vec![
            DesignRecord::new("1", "Neon Dreams", "Sarah Johnson")
                .with_tags(["neon", "retro"].into_iter().collect::<TagSet>())
                .with_likes(342, false),
            DesignRecord::new("2", "Cosmic Waves", "Michael Chen")
                .with_tags(["space", "galaxy"].into_iter().collect::<TagSet>())
                .with_likes(256, true),
        ])
        .unwrap()
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let result = CatalogStore::new(vec![
            DesignRecord::new("1", "A", "x"),
            DesignRecord::new("1", "B", "y"),
        ]);
        assert_eq!(result.unwrap_err(), CatalogError::duplicate("1"));
    }

    #[test]
    fn test_like_visible_through_clones() {
        let store = store();
        let other_view = store.clone();

        let updated = store.toggle_like(&DesignId::from("1")).unwrap();
        assert_eq!(updated.like_count(), 343);

        let seen = other_view.get(&DesignId::from("1")).unwrap();
        assert!(seen.is_liked());
        assert_eq!(seen.like_count(), 343);
    }

    #[test]
    fn test_toggle_unknown_id() {
        let result = store().toggle_like(&DesignId::from("99"));
        assert_eq!(result.unwrap_err(), CatalogError::not_found("99"));
    }

    #[test]
    fn test_liked_tracks_toggles() {
        let store = store();
        let ids = |v: Vec<DesignRecord>| v.into_iter().map(|d| d.id().to_string()).collect::<Vec<_>>();

        assert_eq!(ids(store.liked()), vec!["2"]);
        store.toggle_like(&DesignId::from("1")).unwrap();
        store.toggle_like(&DesignId::from("2")).unwrap();
        assert_eq!(ids(store.liked()), vec!["1"]);
    }

    #[test]
    fn test_get_many_keeps_requested_order() {
        let store = store();
        let found = store.get_many(&[DesignId::from("2"), DesignId::from("7"), DesignId::from("1")]);
        let ids: Vec<&str> = found.iter().map(|d| d.id().as_str()).collect();
        assert_eq!(ids, vec!["2", "1"]);
    }

    #[test]
    fn test_search_uses_current_state() {
        let store = store();
        assert_eq!(store.search(&DesignQuery::default()).len(), 2);
        assert_eq!(store.search(&DesignQuery::text("COSMIC")).len(), 1);
        assert_eq!(store.len(), 2);
        assert!(!store.is_empty());
        assert!(CatalogStore::default().is_empty());
    }
}
