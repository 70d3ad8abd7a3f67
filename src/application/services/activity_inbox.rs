use tracing::debug;

use crate::domain::entities::ActivityNotification;

/// The creator's notification inbox.
#[derive(Debug, Default)]
pub struct ActivityInbox {
    entries: Vec<ActivityNotification>,
}

impl ActivityInbox {
    #[must_use]
    pub fn new(entries: Vec<ActivityNotification>) -> Self {
        Self { entries }
    }

    #[must_use]
    pub fn entries(&self) -> &[ActivityNotification] {
        &self.entries
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&ActivityNotification> {
        self.entries.iter().find(|n| n.id == id)
    }

    #[must_use]
    pub fn unread_count(&self) -> usize {
        self.entries.iter().filter(|n| !n.read).count()
    }

    /// Marks one entry as read. Returns whether anything changed.
    pub fn mark_read(&mut self, id: &str) -> bool {
        match self.entries.iter_mut().find(|n| n.id == id) {
            Some(entry) if !entry.read => {
                entry.read = true;
                debug!(id, "Notification marked read");
                true
            }
            _ => false,
        }
    }

    /// Marks every entry as read. Returns how many changed.
    pub fn mark_all_read(&mut self) -> usize {
        let mut changed = 0;
        for entry in self.entries.iter_mut().filter(|n| !n.read) {
            entry.read = true;
            changed += 1;
        }
        changed
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::ActivityKind;
    use chrono::Utc;

    fn inbox() -> ActivityInbox {
        let now = Utc::now();
        ActivityInbox::new(vec![
            ActivityNotification::new("1", ActivityKind::Approval, "Design Approved!", "live", now)
                .with_design("1"),
            ActivityNotification::new("2", ActivityKind::Sale, "New Sale", "sold", now)
                .with_read(true),
            ActivityNotification::new("3", ActivityKind::Payout, "Royalty Payment", "$45.60", now),
        ])
    }

    #[test]
    fn test_unread_count_and_mark_read() {
        let mut inbox = inbox();
        assert_eq!(inbox.unread_count(), 2);

        assert!(inbox.mark_read("1"));
        assert!(!inbox.mark_read("1"));
        assert!(!inbox.mark_read("missing"));
        assert_eq!(inbox.unread_count(), 1);
    }

    #[test]
    fn test_mark_all_read() {
        let mut inbox = inbox();
        assert_eq!(inbox.mark_all_read(), 2);
        assert_eq!(inbox.unread_count(), 0);
        assert_eq!(inbox.mark_all_read(), 0);
    }

    #[test]
    fn test_get_links_design() {
        let inbox = inbox();
        assert_eq!(
            inbox.get("1").and_then(|n| n.design_id.clone()),
            Some("1".into())
        );
        assert!(inbox.get("3").unwrap().design_id.is_none());
        assert!(!inbox.is_empty());
    }
}
