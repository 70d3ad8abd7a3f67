//! Activity notifications delivered to a creator's inbox.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::design::DesignId;

/// What an activity notification is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    /// A submitted design was approved.
    Approval,
    /// A product carrying one of the creator's designs was sold.
    Sale,
    /// A royalty payout was sent.
    Payout,
    /// Something noteworthy, such as a trending design.
    Alert,
}

impl std::fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Approval => write!(f, "approval"),
            Self::Sale => write!(f, "sale"),
            Self::Payout => write!(f, "payout"),
            Self::Alert => write!(f, "alert"),
        }
    }
}

/// An entry in the notifications inbox.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityNotification {
    pub id: String,
    pub kind: ActivityKind,
    pub title: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub design_id: Option<DesignId>,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub read: bool,
}

impl ActivityNotification {
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        kind: ActivityKind,
        title: impl Into<String>,
        message: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            title: title.into(),
            message: message.into(),
            design_id: None,
            timestamp,
            read: false,
        }
    }

    #[must_use]
    pub fn with_design(mut self, design_id: impl Into<DesignId>) -> Self {
        self.design_id = Some(design_id.into());
        self
    }

    #[must_use]
    pub const fn with_read(mut self, read: bool) -> Self {
        self.read = read;
        self
    }

    /// Compact age label such as `2h ago` or `1w ago`.
    #[must_use]
    pub fn relative_label(&self, now: DateTime<Utc>) -> String {
        let age = now.signed_duration_since(self.timestamp);
        let minutes = age.num_minutes();
        if minutes < 1 {
            return "just now".to_string();
        }
        let hours = age.num_hours();
        let days = age.num_days();
        if hours < 1 {
            format!("{minutes}m ago")
        } else if days < 1 {
            format!("{hours}h ago")
        } else if days < 7 {
            format!("{days}d ago")
        } else {
            format!("{}w ago", days / 7)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn at(offset: Duration) -> (ActivityNotification, DateTime<Utc>) {
        let now = Utc::now();
        let notification = ActivityNotification::new(
            "1",
            ActivityKind::Approval,
            "Design Approved!",
            "Your design is live.",
            now - offset,
        );
        (notification, now)
    }

    #[test]
    fn test_relative_labels() {
        let cases = [
            (Duration::seconds(10), "just now"),
            (Duration::minutes(5), "5m ago"),
            (Duration::hours(2), "2h ago"),
            (Duration::days(3), "3d ago"),
            (Duration::days(8), "1w ago"),
        ];
        for (offset, expected) in cases {
            let (n, now) = at(offset);
            assert_eq!(n.relative_label(now), expected);
        }
    }

    #[test]
    fn test_future_timestamp_is_just_now() {
        let (n, now) = at(Duration::hours(-1));
        assert_eq!(n.relative_label(now), "just now");
    }

    #[test]
    fn test_kind_serde_lowercase() {
        let json = serde_json::to_string(&ActivityKind::Payout).unwrap();
        assert_eq!(json, "\"payout\"");
    }
}
