//! # SQLite Database methods
//!
//! This module contains "low-level" SQLite database interactions.
//!
//! All these interactions are simple functions that accept a `&mut SqliteConnection` argument. Callers can obtain a
//! connection from a pool, or open a transaction when several statements must be atomic, and call through to the
//! functions without any other changes.
//!
//! Single-row queries use `fetch_all` rather than `fetch_one`/`fetch_optional`. The latter stop stepping the statement
//! after the first row, and an unfinished `RETURNING` statement leaves the pooled connection inside its implicit
//! transaction, so its writes are invisible to the rest of the pool.
use std::env;

use log::info;
use sqlx::{sqlite::SqlitePoolOptions, Error as SqlxError, SqlitePool};

pub mod notifications;
pub mod orders;
pub mod users;

const SQLITE_DB_URL: &str = "sqlite://data/sparkd_notifier.db";

pub fn db_url() -> String {
    let result = env::var("SPN_DATABASE_URL").unwrap_or_else(|_| {
        info!("🗃️ SPN_DATABASE_URL is not set. Using the default.");
        SQLITE_DB_URL.to_string()
    });
    info!("🗃️ Using database URL: {result}");
    result
}

pub async fn new_pool(url: &str, max_connections: u32) -> Result<SqlitePool, SqlxError> {
    let pool = SqlitePoolOptions::new().max_connections(max_connections).connect(url).await?;
    Ok(pool)
}
