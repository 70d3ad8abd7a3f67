//! Design record entity.

use serde::{Deserialize, Serialize};

use super::tag::TagSet;

/// Unique identifier for a design within a catalog.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DesignId(String);

impl DesignId {
    /// Creates a design id.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DesignId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for DesignId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for DesignId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// A submitted design as seen by one viewer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesignRecord {
    id: DesignId,
    title: String,
    creator: String,
    #[serde(default)]
    tags: TagSet,
    #[serde(default, alias = "likes")]
    like_count: u32,
    #[serde(default)]
    is_liked: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    mockup: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    created: Option<String>,
}

impl DesignRecord {
    /// Creates a design with no tags and no likes.
    #[must_use]
    pub fn new(
        id: impl Into<DesignId>,
        title: impl Into<String>,
        creator: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            creator: creator.into(),
            tags: TagSet::new(),
            like_count: 0,
            is_liked: false,
            description: None,
            image: None,
            mockup: None,
            created: None,
        }
    }

    /// Sets the design tags.
    #[must_use]
    pub fn with_tags(mut self, tags: TagSet) -> Self {
        self.tags = tags;
        self
    }

    /// Sets the like count and whether the viewer liked it.
    #[must_use]
    pub const fn with_likes(mut self, like_count: u32, is_liked: bool) -> Self {
        self.like_count = like_count;
        self.is_liked = is_liked;
        self
    }

    /// Sets the long description shown on the detail view.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the artwork and product mockup image URLs.
    #[must_use]
    pub fn with_images(mut self, image: impl Into<String>, mockup: Option<String>) -> Self {
        self.image = Some(image.into());
        self.mockup = mockup;
        self
    }

    /// Sets the display label for when the design was created.
    #[must_use]
    pub fn with_created(mut self, created: impl Into<String>) -> Self {
        self.created = Some(created.into());
        self
    }

    /// Returns the design id.
    #[must_use]
    pub const fn id(&self) -> &DesignId {
        &self.id
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the creator display name.
    #[must_use]
    pub fn creator(&self) -> &str {
        &self.creator
    }

    /// Returns the tags.
    #[must_use]
    pub const fn tags(&self) -> &TagSet {
        &self.tags
    }

    /// Returns the like count.
    #[must_use]
    pub const fn like_count(&self) -> u32 {
        self.like_count
    }

    /// Returns whether the viewer liked the design.
    #[must_use]
    pub const fn is_liked(&self) -> bool {
        self.is_liked
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the artwork image URL.
    #[must_use]
    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    /// Returns the mockup image URL.
    #[must_use]
    pub fn mockup(&self) -> Option<&str> {
        self.mockup.as_deref()
    }

    /// Returns the created label.
    #[must_use]
    pub fn created(&self) -> Option<&str> {
        self.created.as_deref()
    }

    /// Returns a copy with the like flipped.
    ///
    /// Liking adds one to the count and unliking removes one. The count is
    /// floored at zero, so an unlike on a zero count leaves it at zero.
    #[must_use]
    pub fn toggle_like(&self) -> Self {
        let mut updated = self.clone();
        if self.is_liked {
            updated.is_liked = false;
            updated.like_count = self.like_count.saturating_sub(1);
        } else {
            updated.is_liked = true;
            updated.like_count = self.like_count.saturating_add(1);
        }
        updated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn neon() -> DesignRecord {
        DesignRecord::new("1", "Neon Dreams", "Sarah Johnson")
            .with_tags(["neon", "retro"].into_iter().collect())
            .with_likes(342, false)
    }

    #[test]
    fn test_like_increments() {
        let liked = neon().toggle_like();
        assert!(liked.is_liked());
        assert_eq!(liked.like_count(), 343);
    }

    #[test]
    fn test_unlike_decrements() {
        let design = neon().with_likes(256, true);
        let unliked = design.toggle_like();
        assert!(!unliked.is_liked());
        assert_eq!(unliked.like_count(), 255);
    }

    #[test]
    fn test_toggle_twice_restores() {
        for design in [neon(), neon().with_likes(10, true), neon().with_likes(0, false)] {
            let restored = design.toggle_like().toggle_like();
            assert_eq!(restored.like_count(), design.like_count());
            assert_eq!(restored.is_liked(), design.is_liked());
        }
    }

    #[test]
    fn test_unlike_at_zero_is_clamped() {
        let design = neon().with_likes(0, true);
        let unliked = design.toggle_like();
        assert!(!unliked.is_liked());
        assert_eq!(unliked.like_count(), 0);
    }

    #[test]
    fn test_toggle_does_not_touch_original() {
        let design = neon();
        let _ = design.toggle_like();
        assert_eq!(design.like_count(), 342);
        assert!(!design.is_liked());
    }

    #[test]
    fn test_deserialize_accepts_likes_alias() {
        let design: DesignRecord = serde_json::from_str(
            r#"{"id":"2","title":"Cosmic Waves","creator":"Michael Chen","tags":["Space"],"likes":256,"is_liked":true}"#,
        )
        .unwrap();

        assert_eq!(design.id().as_str(), "2");
        assert_eq!(design.like_count(), 256);
        assert!(design.is_liked());
        assert_eq!(design.tags().len(), 1);
        assert!(design.description().is_none());
    }
}
