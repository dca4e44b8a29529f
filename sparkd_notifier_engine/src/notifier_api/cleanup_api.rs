use std::fmt::Debug;

use chrono::{DateTime, Duration, Utc};
use log::*;

use crate::traits::{NotificationStore, NotifierStoreError};

/// Read notifications are kept for this long before the cleanup job deletes them.
pub const DEFAULT_NOTIFICATION_RETENTION: Duration = Duration::days(30);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanupResult {
    /// Read notifications created before this time were deleted
    pub cutoff: DateTime<Utc>,
    pub deleted: Vec<i64>,
}

impl CleanupResult {
    pub fn count(&self) -> usize {
        self.deleted.len()
    }
}

/// Deletes read notifications that are older than the retention period.
pub struct CleanupApi<B> {
    db: B,
    retention: Duration,
}

impl<B> Debug for CleanupApi<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CleanupApi (retention: {} days)", self.retention.num_days())
    }
}

impl<B> CleanupApi<B> {
    pub fn new(db: B) -> Self {
        Self { db, retention: DEFAULT_NOTIFICATION_RETENTION }
    }

    pub fn with_retention(mut self, retention: Duration) -> Self {
        self.retention = retention;
        self
    }

    pub fn retention(&self) -> Duration {
        self.retention
    }
}

impl<B> CleanupApi<B>
where B: NotificationStore
{
    /// Deletes, in a single atomic batch, every notification that has been read and was created before
    /// `now - retention`. Unread notifications are kept regardless of age.
    ///
    /// Fails with [`NotifierStoreError::InvalidRetention`] if the cutoff falls outside the representable date range.
    pub async fn purge_stale_notifications(&self, now: DateTime<Utc>) -> Result<CleanupResult, NotifierStoreError> {
        let cutoff = now.checked_sub_signed(self.retention).ok_or_else(|| {
            NotifierStoreError::InvalidRetention(format!(
                "{} days before {now} is out of range",
                self.retention.num_days()
            ))
        })?;
        debug!("🧹️ Deleting read notifications created before {cutoff}");
        let deleted = self.db.delete_read_notifications_before(cutoff).await?;
        info!("🧹️ Deleted {} old notifications", deleted.len());
        Ok(CleanupResult { cutoff, deleted })
    }

    pub async fn purge_now(&self) -> Result<CleanupResult, NotifierStoreError> {
        self.purge_stale_notifications(Utc::now()).await
    }
}
