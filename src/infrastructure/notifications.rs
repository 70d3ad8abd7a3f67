//! In-process notification delivery.

use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;

use crate::domain::ports::NotificationPort;

/// A confirmation waiting to be shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingNotice {
    pub title: String,
    pub body: String,
}

/// Logs notifications and queues them for the shell to print.
///
/// Clones share the queue and the on/off switch.
#[derive(Debug, Clone, Default)]
pub struct LogNotificationService {
    enabled: Arc<AtomicBool>,
    pending: Arc<Mutex<VecDeque<PendingNotice>>>,
}

impl LogNotificationService {
    #[must_use]
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled: Arc::new(AtomicBool::new(enabled)),
            pending: Arc::default(),
        }
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Relaxed)
    }

    /// Turns delivery on or off for every clone of this service.
    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::Relaxed);
        tracing::info!(enabled, "Push notifications toggled");
    }

    /// Takes every queued notice, oldest first.
    #[must_use]
    pub fn drain(&self) -> Vec<PendingNotice> {
        self.pending.lock().drain(..).collect()
    }
}

impl NotificationPort for LogNotificationService {
    fn send(&self, title: &str, body: &str) {
        if !self.is_enabled() {
            tracing::debug!(title, "Notification suppressed");
            return;
        }

        tracing::info!(title, body, "Notification");
        self.pending.lock().push_back(PendingNotice {
            title: title.to_string(),
            body: body.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_and_drain() {
        let service = LogNotificationService::new(true);
        let port: Arc<dyn NotificationPort> = Arc::new(service.clone());

        port.send("Design Submitted!", "Under review");
        port.send("Second", "Body");

        let notices = service.drain();
        assert_eq!(notices.len(), 2);
        assert_eq!(notices[0].title, "Design Submitted!");
        assert!(service.drain().is_empty());
    }

    #[test]
    fn test_disabled_drops_notices() {
        let service = LogNotificationService::new(false);
        service.send("Design Submitted!", "Under review");
        assert!(service.drain().is_empty());
    }

    #[test]
    fn test_toggle_reaches_shared_clones() {
        let service = LogNotificationService::new(true);
        let port: Arc<dyn NotificationPort> = Arc::new(service.clone());

        service.set_enabled(false);
        port.send("Design Submitted!", "Under review");
        assert!(service.drain().is_empty());

        service.set_enabled(true);
        port.send("Design Submitted!", "Under review");
        assert_eq!(service.drain().len(), 1);
        assert!(service.is_enabled());
    }
}
