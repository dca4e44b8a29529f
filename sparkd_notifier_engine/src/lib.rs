//! Sparkd Notifier Engine
//!
//! The notifier turns marketplace order status transitions into user notifications, delivers those notifications to
//! devices as push messages, and prunes notifications that users have read and no longer need.
//!
//! The library is divided into three sections:
//! 1. The record store ([`mod@traits`] and, with the `sqlite` feature, [`SqliteDatabase`]). Orders and users are owned
//!    by other systems and only read here. Notifications are created here and deleted by the cleanup job.
//! 2. The event bus ([`mod@events`]). Order updates and newly created notifications are published as typed events,
//!    and handlers subscribe to them through [`events::EventHooks`].
//! 3. The notifier API ([`mod@notifier_api`]): the status mapper, the notification writer, the order change handler,
//!    the push dispatcher and the cleanup job.
//!
//! Every dependency (database, push service) is passed in explicitly when an API object is constructed. There is no
//! process-wide client state.
pub mod db_types;
pub mod events;
pub mod notifier_api;
pub mod traits;

#[cfg(feature = "sqlite")]
pub mod sqlite;

pub use notifier_api::{
    cleanup_api::{CleanupApi, CleanupResult},
    errors::PushDispatchError,
    notification_api::NotificationApi,
    order_change_handler::OrderChangeHandler,
    order_feed_api::OrderFeedApi,
    push_dispatcher::{DispatchResult, PushDispatcher},
    push_objects::{DeliveryHints, PushMessage},
    status_mapper::notifications_for_transition,
};
#[cfg(feature = "sqlite")]
pub use sqlite::SqliteDatabase;
pub use traits::{NotificationStore, NotifierStoreError, OrderRecords, PushDelivery, PushDeliveryError, UserDirectory};
