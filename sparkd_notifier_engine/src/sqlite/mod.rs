//! SQLite record store for the Sparkd notifier.
//!
//! The same database holds the `users` and `orders` tables maintained by the rest of the platform, and the
//! `notifications` table that the notifier owns.
mod sqlite_impl;

pub mod db;
pub use sqlite_impl::SqliteDatabase;
