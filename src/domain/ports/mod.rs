mod catalog_port;
mod notification_port;

pub use catalog_port::{CatalogPort, CatalogSnapshot};
pub use notification_port::NotificationPort;
