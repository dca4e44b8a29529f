use chrono::{DateTime, Utc};
use log::{debug, trace};
use sqlx::{sqlite::SqliteRow, FromRow, QueryBuilder, Row, SqliteConnection};

use crate::{
    db_types::{NewNotification, Notification, NotificationData},
    traits::NotifierStoreError,
};

// Stays well clear of SQLite's bound parameter limit
const DELETE_CHUNK_SIZE: usize = 500;

impl FromRow<'_, SqliteRow> for Notification {
    fn from_row(row: &SqliteRow) -> Result<Self, sqlx::Error> {
        let data: String = row.try_get("data")?;
        let data = serde_json::from_str::<NotificationData>(&data).map_err(|e| sqlx::Error::Decode(Box::new(e)))?;
        Ok(Self {
            id: row.try_get("id")?,
            user_id: row.try_get("user_id")?,
            title: row.try_get("title")?,
            body: row.try_get("body")?,
            data,
            read: row.try_get("read")?,
            created_at: row.try_get("created_at")?,
        })
    }
}

/// Inserts a new notification. `read` and `created_at` take their column defaults (unread, and the current database
/// time).
pub async fn insert_notification(
    notification: NewNotification,
    conn: &mut SqliteConnection,
) -> Result<Notification, NotifierStoreError> {
    let data = serde_json::to_string(&notification.data)?;
    let notification: Notification = sqlx::query_as(
        r#"
            INSERT INTO notifications (user_id, title, body, data) VALUES ($1, $2, $3, $4)
            RETURNING *;
        "#,
    )
    .bind(notification.user_id)
    .bind(notification.title)
    .bind(notification.body)
    .bind(data)
    .fetch_all(conn)
    .await?
    .pop()
    .ok_or(sqlx::Error::RowNotFound)?;
    trace!("🗃️ Notification #{} inserted for {}", notification.id, notification.user_id);
    Ok(notification)
}

pub async fn fetch_notification(id: i64, conn: &mut SqliteConnection) -> Result<Option<Notification>, sqlx::Error> {
    let notification =
        sqlx::query_as("SELECT * FROM notifications WHERE id = $1").bind(id).fetch_all(conn).await?.pop();
    Ok(notification)
}

/// Returns the user's notifications, newest first.
pub async fn fetch_notifications_for_user(
    user_id: &str,
    conn: &mut SqliteConnection,
) -> Result<Vec<Notification>, sqlx::Error> {
    let notifications =
        sqlx::query_as("SELECT * FROM notifications WHERE user_id = $1 ORDER BY created_at DESC, id DESC")
            .bind(user_id)
            .fetch_all(conn)
            .await?;
    Ok(notifications)
}

/// Ids of all notifications that have been read and were created strictly before `cutoff`.
///
/// Timestamps are compared as whole unix seconds, since `CURRENT_TIMESTAMP` has no sub-second precision.
pub async fn fetch_read_notification_ids_before(
    cutoff: DateTime<Utc>,
    conn: &mut SqliteConnection,
) -> Result<Vec<i64>, sqlx::Error> {
    let ids = sqlx::query_scalar::<_, i64>(
        "SELECT id FROM notifications WHERE read = 1 AND unixepoch(created_at) < $1 ORDER BY id ASC",
    )
    .bind(cutoff.timestamp())
    .fetch_all(conn)
    .await?;
    Ok(ids)
}

/// Deletes the notifications with the given ids. This is not atomic on its own. Pass `&mut *tx` to run it inside a
/// transaction.
pub async fn delete_notifications(ids: &[i64], conn: &mut SqliteConnection) -> Result<u64, sqlx::Error> {
    let mut deleted = 0;
    for chunk in ids.chunks(DELETE_CHUNK_SIZE) {
        let mut builder = QueryBuilder::new("DELETE FROM notifications WHERE id IN (");
        let mut list = builder.separated(", ");
        for id in chunk {
            list.push_bind(*id);
        }
        list.push_unseparated(")");
        deleted += builder.build().execute(&mut *conn).await?.rows_affected();
    }
    debug!("🗃️ {deleted} notifications deleted");
    Ok(deleted)
}

/// Marks a notification as read. The apps do this; the notifier itself never does.
pub async fn mark_notification_read(id: i64, conn: &mut SqliteConnection) -> Result<Option<Notification>, sqlx::Error> {
    let notification = sqlx::query_as("UPDATE notifications SET read = 1 WHERE id = $1 RETURNING *")
        .bind(id)
        .fetch_all(conn)
        .await?
        .pop();
    Ok(notification)
}
