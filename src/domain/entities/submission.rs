//! Design submission draft.

use super::tag::Tag;
use crate::domain::errors::SubmissionError;

/// Default cap on the number of tags per submission.
pub const DEFAULT_MAX_TAGS: usize = 5;

/// A design being prepared for submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionDraft {
    image: Option<String>,
    title: String,
    tags: Vec<Tag>,
    share_profits: bool,
}

impl Default for SubmissionDraft {
    fn default() -> Self {
        Self {
            image: None,
            title: String::new(),
            tags: Vec::new(),
            share_profits: true,
        }
    }
}

impl SubmissionDraft {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_image(&mut self, image: impl Into<String>) {
        self.image = Some(image.into());
    }

    pub fn clear_image(&mut self) {
        self.image = None;
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub const fn set_share_profits(&mut self, share: bool) {
        self.share_profits = share;
    }

    /// Adds a tag after normalizing it.
    ///
    /// # Errors
    /// Returns an error if the input is blank, already present, or the draft
    /// already holds `max_tags` tags.
    pub fn add_tag(&mut self, raw: &str, max_tags: usize) -> Result<&Tag, SubmissionError> {
        let tag = Tag::parse(raw).ok_or(SubmissionError::EmptyTag)?;
        if self.tags.contains(&tag) {
            return Err(SubmissionError::DuplicateTag {
                tag: tag.as_str().to_string(),
            });
        }
        if self.tags.len() >= max_tags {
            return Err(SubmissionError::TagLimitReached { max: max_tags });
        }
        self.tags.push(tag);
        Ok(&self.tags[self.tags.len() - 1])
    }

    /// Removes a tag. Returns whether it was present.
    pub fn remove_tag(&mut self, raw: &str) -> bool {
        let Some(tag) = Tag::parse(raw) else {
            return false;
        };
        let before = self.tags.len();
        self.tags.retain(|t| t != &tag);
        self.tags.len() != before
    }

    /// Checks the draft is ready to submit.
    ///
    /// # Errors
    /// Returns the first missing piece: image, then title, then tags.
    pub fn validate(&self) -> Result<(), SubmissionError> {
        if self.image.is_none() {
            return Err(SubmissionError::MissingImage);
        }
        if self.title.trim().is_empty() {
            return Err(SubmissionError::MissingTitle);
        }
        if self.tags.is_empty() {
            return Err(SubmissionError::MissingTags);
        }
        Ok(())
    }

    #[must_use]
    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Tags in the order they were added.
    #[must_use]
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    #[must_use]
    pub const fn share_profits(&self) -> bool {
        self.share_profits
    }
}
