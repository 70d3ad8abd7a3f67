//! Design submission use case implementation.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::application::dto::{SubmissionReceipt, SubmissionStatus};
use crate::domain::entities::SubmissionDraft;
use crate::domain::errors::SubmissionError;
use crate::domain::ports::NotificationPort;

const SUBMITTED_TITLE: &str = "Design Submitted!";
const SUBMITTED_BODY: &str =
    "Your design has been submitted for review. You'll be notified once it's approved.";

/// Handles the submit-a-design workflow.
#[derive(Clone)]
pub struct SubmitDesignUseCase {
    notifier: Arc<dyn NotificationPort>,
}

impl SubmitDesignUseCase {
    /// Creates new submit use case.
    #[must_use]
    pub fn new(notifier: Arc<dyn NotificationPort>) -> Self {
        Self { notifier }
    }

    /// Validates the draft and hands it off for review.
    ///
    /// # Errors
    /// Returns the first validation failure of the draft.
    pub fn execute(&self, draft: &SubmissionDraft) -> Result<SubmissionReceipt, SubmissionError> {
        debug!(title = %draft.title(), tags = draft.tags().len(), "Validating submission");

        draft.validate().map_err(|e| {
            warn!(error = %e, "Submission rejected");
            e
        })?;

        let receipt = SubmissionReceipt {
            id: Uuid::new_v4(),
            title: draft.title().trim().to_string(),
            tags: draft.tags().to_vec(),
            share_profits: draft.share_profits(),
            submitted_at: Utc::now(),
            status: SubmissionStatus::PendingReview,
        };

        info!(
            submission_id = %receipt.id,
            title = %receipt.title,
            share_profits = receipt.share_profits,
            "Design submitted for review"
        );

        self.notifier.send(SUBMITTED_TITLE, SUBMITTED_BODY);

        Ok(receipt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::DEFAULT_MAX_TAGS;
    use crate::domain::ports::mocks::MockNotificationPort;

    fn ready_draft() -> SubmissionDraft {
        let mut draft = SubmissionDraft::new();
        draft.set_image("file:///tmp/urban.png");
        draft.set_title("  Urban Jungle ");
        draft.add_tag("Urban", DEFAULT_MAX_TAGS).unwrap();
        draft.add_tag("geometric", DEFAULT_MAX_TAGS).unwrap();
        draft
    }

    #[test]
    fn test_successful_submission() {
        let notifier = Arc::new(MockNotificationPort::new());
        let use_case = SubmitDesignUseCase::new(notifier.clone());

        let receipt = use_case.execute(&ready_draft()).unwrap();

        assert_eq!(receipt.title, "Urban Jungle");
        assert_eq!(receipt.status, SubmissionStatus::PendingReview);
        assert!(receipt.share_profits);
        let tags: Vec<&str> = receipt.tags.iter().map(|t| t.as_str()).collect();
        assert_eq!(tags, vec!["urban", "geometric"]);

        let sent = notifier.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, SUBMITTED_TITLE);
    }

    #[test]
    fn test_invalid_draft_does_not_notify() {
        let notifier = Arc::new(MockNotificationPort::new());
        let use_case = SubmitDesignUseCase::new(notifier.clone());

        let mut draft = ready_draft();
        draft.clear_image();

        assert_eq!(
            use_case.execute(&draft).unwrap_err(),
            SubmissionError::MissingImage
        );
        assert!(notifier.sent().is_empty());
    }

    #[test]
    fn test_receipts_have_distinct_ids() {
        let use_case = SubmitDesignUseCase::new(Arc::new(MockNotificationPort::new()));
        let draft = ready_draft();
        let a = use_case.execute(&draft).unwrap();
        let b = use_case.execute(&draft).unwrap();
        assert_ne!(a.id, b.id);
    }
}
