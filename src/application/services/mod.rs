//! Application services shared by the views.

mod activity_inbox;
mod catalog_store;
mod search_session;

pub use activity_inbox::ActivityInbox;
pub use catalog_store::CatalogStore;
pub use search_session::SearchSession;
