//! Domain entity definitions.

mod activity;
mod design;
mod profile;
mod submission;
mod tag;

pub use activity::{ActivityKind, ActivityNotification};
pub use design::{DesignId, DesignRecord};
pub use profile::{CreatorProfile, ProfileStats};
pub use submission::{DEFAULT_MAX_TAGS, SubmissionDraft};
pub use tag::{Tag, TagSet};
