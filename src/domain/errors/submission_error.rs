//! Design submission error types.

use thiserror::Error;

/// Reasons a submission draft is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[allow(missing_docs)]
pub enum SubmissionError {
    #[error("Please upload a design image.")]
    MissingImage,

    #[error("Please add a title for your design.")]
    MissingTitle,

    #[error("Please add at least one tag for your design.")]
    MissingTags,

    #[error("tag must not be empty")]
    EmptyTag,

    #[error("tag already added: {tag}")]
    DuplicateTag { tag: String },

    #[error("a design can have at most {max} tags")]
    TagLimitReached { max: usize },
}

impl SubmissionError {
    /// Short heading for the error, as shown in alert titles.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::MissingImage => "Missing Image",
            Self::MissingTitle => "Missing Title",
            Self::MissingTags => "Missing Tags",
            Self::EmptyTag | Self::DuplicateTag { .. } | Self::TagLimitReached { .. } => {
                "Invalid Tag"
            }
        }
    }
}
