//! Event hook wiring. Each module here builds the [`EventHandlers`] for one side of the notification chain.
//!
//! [`EventHandlers`]: sparkd_notifier_engine::events::EventHandlers
pub mod fcm;
pub mod notifications;
