//! `SqliteDatabase` is a concrete implementation of the notifier's record store.
//!
//! Unsurprisingly, it uses SQLite as the backend and implements all the store traits defined in the [`traits`]
//! module.
//!
//! [`traits`]: crate::traits
use std::fmt::Debug;

use chrono::{DateTime, Utc};
use log::*;
use sqlx::SqlitePool;

use super::db::{db_url, new_pool, notifications, orders, users};
use crate::{
    db_types::{NewNotification, Notification, Order, OrderId, User},
    traits::{NotificationStore, NotifierStoreError, OrderRecords, UserDirectory},
};

#[derive(Clone)]
pub struct SqliteDatabase {
    url: String,
    pool: SqlitePool,
}

impl Debug for SqliteDatabase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "SqliteDatabase ({:?})", self.pool)
    }
}

impl NotificationStore for SqliteDatabase {
    async fn insert_notification(&self, notification: NewNotification) -> Result<Notification, NotifierStoreError> {
        let mut conn = self.pool.acquire().await?;
        notifications::insert_notification(notification, &mut conn).await
    }

    async fn fetch_notification(&self, id: i64) -> Result<Option<Notification>, NotifierStoreError> {
        let mut conn = self.pool.acquire().await?;
        let notification = notifications::fetch_notification(id, &mut conn).await?;
        Ok(notification)
    }

    async fn fetch_notifications_for_user(&self, user_id: &str) -> Result<Vec<Notification>, NotifierStoreError> {
        let mut conn = self.pool.acquire().await?;
        let result = notifications::fetch_notifications_for_user(user_id, &mut conn).await?;
        Ok(result)
    }

    /// The selection and the delete run in one transaction, so the batch is removed completely or not at all.
    async fn delete_read_notifications_before(&self, cutoff: DateTime<Utc>) -> Result<Vec<i64>, NotifierStoreError> {
        let mut tx = self.pool.begin().await?;
        let ids = notifications::fetch_read_notification_ids_before(cutoff, &mut tx).await?;
        if ids.is_empty() {
            tx.rollback().await?;
            return Ok(ids);
        }
        let deleted = notifications::delete_notifications(&ids, &mut tx).await?;
        if deleted != ids.len() as u64 {
            warn!("🗃️ Expected to delete {} notifications, but {deleted} rows were affected", ids.len());
        }
        tx.commit().await?;
        Ok(ids)
    }
}

impl UserDirectory for SqliteDatabase {
    async fn fetch_user(&self, user_id: &str) -> Result<Option<User>, NotifierStoreError> {
        let mut conn = self.pool.acquire().await?;
        let user = users::fetch_user(user_id, &mut conn).await?;
        Ok(user)
    }
}

impl OrderRecords for SqliteDatabase {
    async fn fetch_order(&self, order_id: &OrderId) -> Result<Option<Order>, NotifierStoreError> {
        let mut conn = self.pool.acquire().await?;
        let order = orders::fetch_order(order_id, &mut conn).await?;
        Ok(order)
    }

    async fn save_order(&self, order_id: &OrderId, order: &Order) -> Result<Option<Order>, NotifierStoreError> {
        let mut tx = self.pool.begin().await?;
        let previous = orders::fetch_order(order_id, &mut tx).await?;
        orders::upsert_order(order_id, order, &mut tx).await?;
        tx.commit().await?;
        Ok(previous)
    }
}

impl SqliteDatabase {
    /// Creates a new database API object using the `SPN_DATABASE_URL` environment variable, or the default URL.
    pub async fn new(max_connections: u32) -> Result<Self, sqlx::Error> {
        let url = db_url();
        SqliteDatabase::new_with_url(url.as_str(), max_connections).await
    }

    pub async fn new_with_url(url: &str, max_connections: u32) -> Result<Self, sqlx::Error> {
        trace!("🗃️ Creating new database connection pool with url {url}");
        let pool = new_pool(url, max_connections).await?;
        let url = url.to_string();
        Ok(Self { url, pool })
    }

    pub fn url(&self) -> &str {
        self.url.as_str()
    }

    /// Returns a reference to the database connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Brings the schema up to date. Safe to call on every start-up.
    pub async fn run_migrations(&self) -> Result<(), NotifierStoreError> {
        sqlx::migrate!("./src/sqlite/migrations")
            .run(&self.pool)
            .await
            .map_err(|e| NotifierStoreError::DatabaseError(e.to_string()))?;
        info!("🗃️ Migrations complete");
        Ok(())
    }

    pub async fn close(&mut self) -> Result<(), NotifierStoreError> {
        self.pool.close().await;
        Ok(())
    }

    /// Registers a user, or replaces their push token. User records belong to the apps; this exists for seeding and
    /// tests.
    pub async fn upsert_user(&self, user: &User) -> Result<User, NotifierStoreError> {
        let mut conn = self.pool.acquire().await?;
        let user = users::upsert_user(user, &mut conn).await?;
        Ok(user)
    }

    /// Marks a notification as read, on behalf of a client app.
    pub async fn mark_notification_read(&self, id: i64) -> Result<Notification, NotifierStoreError> {
        let mut conn = self.pool.acquire().await?;
        let notification = notifications::mark_notification_read(id, &mut conn).await?;
        notification.ok_or(NotifierStoreError::NotificationNotFound(id))
    }
}
