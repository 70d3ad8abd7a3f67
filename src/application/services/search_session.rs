use tracing::debug;

use super::catalog_store::CatalogStore;
use crate::domain::entities::{DesignRecord, Tag, TagSet};
use crate::domain::search::DesignQuery;

/// Query text and tag chips of the discover view.
///
/// Changing the query or the selection does not recompute anything; callers
/// ask for [`SearchSession::results`] after each change.
#[derive(Debug, Clone, Default)]
pub struct SearchSession {
    query: DesignQuery,
}

impl SearchSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query.text = text.into();
    }

    /// Selects or deselects a tag chip. Returns whether it is now selected.
    pub fn toggle_tag(&mut self, tag: Tag) -> bool {
        self.query.tags.toggle(tag)
    }

    pub fn clear(&mut self) {
        self.query = DesignQuery::default();
    }

    #[must_use]
    pub fn has_filters(&self) -> bool {
        !self.query.is_empty()
    }

    #[must_use]
    pub fn query_text(&self) -> &str {
        &self.query.text
    }

    #[must_use]
    pub const fn selected_tags(&self) -> &TagSet {
        &self.query.tags
    }

    /// Filters the shared catalog with the current query and selection.
    #[must_use]
    pub fn results(&self, store: &CatalogStore) -> Vec<DesignRecord> {
        let results = store.search(&self.query);
        debug!(
            query = %self.query.text,
            tags = self.query.tags.len(),
            matches = results.len(),
            "Search refreshed"
        );
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::DesignId;

    fn store() -> CatalogStore {
        CatalogStore::new(vec![
            DesignRecord::new("1", "Neon Dreams", "Sarah Johnson")
                .with_tags(["neon", "retro"].into_iter().collect()),
            DesignRecord::new("3", "Desert Bloom", "Jessica Smith")
                .with_tags(["nature", "minimal"].into_iter().collect()),
            DesignRecord::new("5", "Retro Wave", "Emma Davis")
                .with_tags(["retro", "wave"].into_iter().collect()),
        ])
        .unwrap()
    }

    fn ids(results: &[DesignRecord]) -> Vec<&str> {
        results.iter().map(|d| d.id().as_str()).collect()
    }

    #[test]
    fn test_query_then_tag() {
        let store = store();
        let mut session = SearchSession::new();
        assert_eq!(session.results(&store).len(), 3);

        session.set_query("e");
        assert_eq!(ids(&session.results(&store)), vec!["1", "3", "5"]);

        assert!(session.toggle_tag(Tag::parse("retro").unwrap()));
        assert_eq!(ids(&session.results(&store)), vec!["1", "5"]);

        assert!(!session.toggle_tag(Tag::parse("Retro").unwrap()));
        assert!(session.selected_tags().is_empty());
        assert!(session.has_filters());
    }

    #[test]
    fn test_clear_restores_full_catalog() {
        let store = store();
        let mut session = SearchSession::new();
        session.set_query("nothing matches this");
        session.toggle_tag(Tag::parse("nature").unwrap());
        assert!(session.results(&store).is_empty());

        session.clear();
        assert!(!session.has_filters());
        assert_eq!(session.results(&store), store.snapshot());
    }

    #[test]
    fn test_results_reflect_likes_from_other_views() {
        let store = store();
        let mut session = SearchSession::new();
        session.set_query("bloom");

        store.toggle_like(&DesignId::from("3")).unwrap();

        let results = session.results(&store);
        assert_eq!(results.len(), 1);
        assert!(results[0].is_liked());
    }
}
