//! Submission DTOs.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::entities::Tag;

/// Review state of a submitted design.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionStatus {
    /// Waiting for review; not yet part of the catalog.
    PendingReview,
}

impl SubmissionStatus {
    /// Returns human-readable description.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::PendingReview => "pending review",
        }
    }
}

impl std::fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// Acknowledgement for an accepted submission.
#[derive(Debug, Clone)]
pub struct SubmissionReceipt {
    /// Submission identifier.
    pub id: Uuid,
    /// Design title, trimmed.
    pub title: String,
    /// Tags in the order they were added.
    pub tags: Vec<Tag>,
    /// Whether the creator opted into profit sharing.
    pub share_profits: bool,
    /// When the submission was accepted.
    pub submitted_at: DateTime<Utc>,
    /// Review state.
    pub status: SubmissionStatus,
}
