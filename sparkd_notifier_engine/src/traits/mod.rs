//! # Record store and delivery interfaces
//!
//! The notifier never talks to a database or push service directly. Instead, it is written against the traits in
//! this module, and concrete backends are supplied when the APIs are constructed.
//!
//! * [`NotificationStore`] creates notification records and deletes stale ones in bulk.
//! * [`UserDirectory`] resolves a user id to the user's push registration token.
//! * [`OrderRecords`] stores order snapshots written through the notifier, so that updates can be diffed.
//! * [`PushDelivery`] hands a finished push message to a delivery service.
mod notification_store;
mod order_records;
mod push_delivery;
mod user_directory;

pub use notification_store::{NotificationStore, NotifierStoreError};
pub use order_records::OrderRecords;
pub use push_delivery::{PushDelivery, PushDeliveryError};
pub use user_directory::UserDirectory;
