//! # Sparkd notifier public API
//!
//! * [`status_mapper`] decides which notifications an order status transition produces. It is a pure function.
//! * [`notification_api`] writes notification records and announces them on the event bus.
//! * [`order_change_handler`] reacts to order updates by running the mapper and writing its notifications.
//! * [`order_feed_api`] is the entry point for order updates, whether diffed here or reported by a change feed.
//! * [`push_dispatcher`] reacts to new notifications by sending them to the recipient's device.
//! * [`cleanup_api`] removes read notifications once they pass the retention period.
//!
//! The APIs are created by supplying the backends they need, e.g.
//!
//! ```rust,ignore
//! let db = SqliteDatabase::new_with_url("sqlite://data/sparkd_notifier.db", 5).await?;
//! let writer = NotificationApi::new(db.clone(), producers);
//! let handler = OrderChangeHandler::new(writer);
//! handler.handle_order_modified(event).await;
//! ```
pub mod cleanup_api;
pub mod errors;
pub mod notification_api;
pub mod order_change_handler;
pub mod order_feed_api;
pub mod push_dispatcher;
pub mod push_objects;
pub mod status_mapper;

#[cfg(test)]
mod mocks;
