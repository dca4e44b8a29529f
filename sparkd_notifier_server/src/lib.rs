//! # Sparkd notifier server
//! This crate hosts the notifier process. It is responsible for:
//! * Receiving order updates from the order change feed and publishing them onto the engine's event bus.
//! * Wiring the event hooks: order updates become notification records, and new notification records are pushed to
//!   the recipient's device via Firebase Cloud Messaging.
//! * Running the daily cleanup of old, read notifications.
//!
//! ## Configuration
//! The server is configured via environment variables. See [config](config/index.html) for more information.
//!
//! ## Routes
//! The server exposes the following routes:
//! * `/health`: A health check route that returns a 200 OK response.
//! * `POST /events/orders/{order_id}`: The order change webhook. Takes `{ "before": Order, "after": Order }`.
//! * `PUT /orders/{order_id}`: Stores an order snapshot and reports a change if the stored one differs.
//! * `GET /users/{user_id}/notifications`: A user's notifications, newest first.
pub mod cleanup_worker;
pub mod cli;
pub mod config;
pub mod data_objects;
pub mod errors;
pub mod integrations;
pub mod routes;
pub mod server;

#[cfg(test)]
mod endpoint_tests;
