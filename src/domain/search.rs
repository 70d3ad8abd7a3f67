//! Design search: text query plus tag selection.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{DesignRecord, Tag, TagSet};

/// The text and tag constraints a catalog is filtered by.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesignQuery {
    pub text: String,
    pub tags: TagSet,
}

impl DesignQuery {
    #[must_use]
    pub fn new(text: impl Into<String>, tags: TagSet) -> Self {
        Self {
            text: text.into(),
            tags,
        }
    }

    /// Query matching on text only.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::new(text, TagSet::new())
    }

    /// Query matching on tags only.
    #[must_use]
    pub fn tags(tags: TagSet) -> Self {
        Self::new(String::new(), tags)
    }

    /// Returns whether neither constraint is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty() && self.tags.is_empty()
    }

    /// Filters the catalog, keeping catalog order.
    #[must_use]
    pub fn apply(&self, catalog: &[DesignRecord]) -> Vec<DesignRecord> {
        filter(catalog, &self.text, &self.tags)
    }
}

/// Case-insensitive substring match on title or creator. An empty query
/// matches everything.
#[must_use]
pub fn matches_text(design: &DesignRecord, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    design.title().to_lowercase().contains(&needle)
        || design.creator().to_lowercase().contains(&needle)
}

/// True when no tags are selected or the design carries at least one of them.
#[must_use]
pub fn matches_tags(design: &DesignRecord, selected: &TagSet) -> bool {
    selected.is_empty() || design.tags().intersects(selected)
}

/// Returns the designs matching both the text query and the tag selection,
/// in catalog order.
#[must_use]
pub fn filter(catalog: &[DesignRecord], query: &str, selected: &TagSet) -> Vec<DesignRecord> {
    if query.is_empty() && selected.is_empty() {
        return catalog.to_vec();
    }
    catalog
        .iter()
        .filter(|design| matches_text(design, query) && matches_tags(design, selected))
        .cloned()
        .collect()
}

/// A ranked suggestion for a partially typed tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagSuggestion {
    pub tag: Tag,
    pub score: i64,
}

/// Suggests tags for partial input.
pub trait TagSuggestionProvider: Send + Sync {
    /// Returns suggestions, best first.
    fn suggest(&self, input: &str) -> Vec<TagSuggestion>;
}
