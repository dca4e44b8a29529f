use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::db_types::{NewNotification, Notification};

#[derive(Debug, Clone, Error)]
pub enum NotifierStoreError {
    #[error("Database error: {0}")]
    DatabaseError(String),
    #[error("The notification payload could not be stored or read: {0}")]
    InvalidPayload(String),
    #[error("Notification #{0} does not exist")]
    NotificationNotFound(i64),
    #[error("The retention period cannot be applied: {0}")]
    InvalidRetention(String),
}

impl From<sqlx::Error> for NotifierStoreError {
    fn from(e: sqlx::Error) -> Self {
        NotifierStoreError::DatabaseError(e.to_string())
    }
}

impl From<serde_json::Error> for NotifierStoreError {
    fn from(e: serde_json::Error) -> Self {
        NotifierStoreError::InvalidPayload(e.to_string())
    }
}

/// Storage for notification records.
#[allow(async_fn_in_trait)]
pub trait NotificationStore {
    /// Writes a new notification. The store assigns the id and the creation timestamp, and the notification starts
    /// out unread.
    async fn insert_notification(&self, notification: NewNotification) -> Result<Notification, NotifierStoreError>;

    async fn fetch_notification(&self, id: i64) -> Result<Option<Notification>, NotifierStoreError>;

    /// All notifications for the given user, newest first.
    async fn fetch_notifications_for_user(&self, user_id: &str) -> Result<Vec<Notification>, NotifierStoreError>;

    /// Deletes every notification that was created strictly before `cutoff` *and* has been read, as a single atomic
    /// batch. Unread notifications are never touched. Returns the ids of the deleted notifications.
    async fn delete_read_notifications_before(&self, cutoff: DateTime<Utc>) -> Result<Vec<i64>, NotifierStoreError>;
}
