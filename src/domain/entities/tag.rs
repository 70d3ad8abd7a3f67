//! Design tag entity.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::domain::errors::CatalogError;

/// A lowercase descriptive label attached to a design.
///
/// Tags are normalized on entry (trimmed and lowercased), so equality and
/// membership are case-insensitive with respect to the raw input.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Tag(String);

impl Tag {
    /// Normalizes raw input into a tag. Returns `None` for blank input.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let normalized = raw.trim().to_lowercase();
        if normalized.is_empty() {
            None
        } else {
            Some(Self(normalized))
        }
    }

    /// Returns the normalized tag text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Tag {
    type Error = CatalogError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value).ok_or_else(|| CatalogError::invalid_tag(value))
    }
}

impl From<Tag> for String {
    fn from(tag: Tag) -> Self {
        tag.0
    }
}

/// A set of tags with deterministic iteration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagSet(BTreeSet<Tag>);

impl TagSet {
    /// Creates an empty tag set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether the set holds no tags.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of tags.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns whether the tag is a member.
    #[must_use]
    pub fn contains(&self, tag: &Tag) -> bool {
        self.0.contains(tag)
    }

    /// Returns whether the two sets share at least one tag.
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        let (small, large) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        small.0.iter().any(|tag| large.0.contains(tag))
    }

    /// Inserts a tag. Returns `false` if it was already present.
    pub fn insert(&mut self, tag: Tag) -> bool {
        self.0.insert(tag)
    }

    /// Removes a tag. Returns `true` if it was present.
    pub fn remove(&mut self, tag: &Tag) -> bool {
        self.0.remove(tag)
    }

    /// Adds the tag when absent, removes it when present.
    /// Returns whether the tag is selected afterwards.
    pub fn toggle(&mut self, tag: Tag) -> bool {
        if self.0.remove(&tag) {
            false
        } else {
            self.0.insert(tag);
            true
        }
    }

    /// Removes every tag.
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Iterates the tags in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &Tag> {
        self.0.iter()
    }
}

impl FromIterator<Tag> for TagSet {
    fn from_iter<I: IntoIterator<Item = Tag>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> FromIterator<&'a str> for TagSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self(iter.into_iter().filter_map(Tag::parse).collect())
    }
}

impl<'a> IntoIterator for &'a TagSet {
    type Item = &'a Tag;
    type IntoIter = std::collections::btree_set::Iter<'a, Tag>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_is_normalized() {
        let tag = Tag::parse("  Retro ").unwrap();
        assert_eq!(tag.as_str(), "retro");
        assert_eq!(tag, Tag::parse("RETRO").unwrap());
    }

    #[test]
    fn test_blank_tag_rejected() {
        assert!(Tag::parse("").is_none());
        assert!(Tag::parse("   ").is_none());
    }

    #[test]
    fn test_intersection_semantics() {
        let design: TagSet = ["retro", "wave"].into_iter().collect();
        let matching: TagSet = ["wave", "space"].into_iter().collect();
        let disjoint: TagSet = ["space", "galaxy"].into_iter().collect();

        assert!(design.intersects(&matching));
        assert!(!design.intersects(&disjoint));
        assert!(!design.intersects(&TagSet::new()));
    }

    #[test]
    fn test_toggle() {
        let mut tags = TagSet::new();
        let retro = Tag::parse("retro").unwrap();

        assert!(tags.toggle(retro.clone()));
        assert!(tags.contains(&retro));
        assert!(!tags.toggle(retro.clone()));
        assert!(tags.is_empty());
    }

    #[test]
    fn test_deserialize_normalizes() {
        let tags: TagSet = serde_json::from_str(r#"["Neon", "neon", " Abstract"]"#).unwrap();
        let names: Vec<&str> = tags.iter().map(Tag::as_str).collect();
        assert_eq!(names, vec!["abstract", "neon"]);
    }

    #[test]
    fn test_deserialize_rejects_blank() {
        let result: Result<TagSet, _> = serde_json::from_str(r#"["ok", "  "]"#);
        assert!(result.is_err());
    }
}
