/// Port for user-facing confirmations.
pub trait NotificationPort: Send + Sync {
    /// Shows a notification.
    fn send(&self, title: &str, body: &str);
}

#[cfg(test)]
#[allow(dead_code)]
pub mod mock {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    pub struct MockNotificationPort {
        pub notifications: Arc<Mutex<Vec<(String, String)>>>,
    }

    impl MockNotificationPort {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn sent(&self) -> Vec<(String, String)> {
            self.notifications.lock().unwrap().clone()
        }
    }

    impl NotificationPort for MockNotificationPort {
        fn send(&self, title: &str, body: &str) {
            self.notifications
                .lock()
                .unwrap()
                .push((title.to_string(), body.to_string()));
        }
    }
}
