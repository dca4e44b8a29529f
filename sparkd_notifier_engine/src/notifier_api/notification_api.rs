use std::fmt::Debug;

use log::*;

use crate::{
    db_types::{NewNotification, Notification},
    events::{EventProducers, NotificationCreatedEvent},
    traits::{NotificationStore, NotifierStoreError},
};

/// `NotificationApi` writes notification records. Every successful write is announced with a
/// [`NotificationCreatedEvent`], which is what eventually triggers push delivery.
pub struct NotificationApi<B> {
    db: B,
    producers: EventProducers,
}

impl<B> Debug for NotificationApi<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "NotificationApi")
    }
}

impl<B> NotificationApi<B> {
    pub fn new(db: B, producers: EventProducers) -> Self {
        Self { db, producers }
    }

    pub fn db(&self) -> &B {
        &self.db
    }
}

impl<B> NotificationApi<B>
where B: NotificationStore
{
    /// Stores the notification and publishes a [`NotificationCreatedEvent`] for it.
    ///
    /// The creation time and unread flag are assigned by the store.
    pub async fn create_notification(&self, notification: NewNotification) -> Result<Notification, NotifierStoreError> {
        let notification = self.db.insert_notification(notification).await?;
        debug!("🔔️ {notification} stored");
        self.producers.publish_notification_created(NotificationCreatedEvent::new(notification.clone())).await;
        Ok(notification)
    }

    pub async fn notifications_for_user(&self, user_id: &str) -> Result<Vec<Notification>, NotifierStoreError> {
        self.db.fetch_notifications_for_user(user_id).await
    }
}

#[cfg(test)]
mod test {
    use std::sync::{Arc, Mutex};

    use futures_util::FutureExt;

    use super::*;
    use crate::{
        events::{EventHandler, Handler},
        notifier_api::mocks::{stored, MockStore},
    };

    #[tokio::test]
    async fn created_notifications_are_published() {
        let _ = env_logger::try_init();
        let mut db = MockStore::new();
        db.expect_insert_notification().times(1).returning(|n| Ok(stored(7, n)));
        let published = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&published);
        let handler: Handler<NotificationCreatedEvent> = Arc::new(move |ev: NotificationCreatedEvent| {
            let sink = Arc::clone(&sink);
            async move { sink.lock().unwrap().push(ev.notification) }.boxed()
        });
        let event_handler = EventHandler::new(5, handler);
        let producers = EventProducers {
            notification_created_producer: vec![event_handler.subscribe()],
            ..Default::default()
        };
        let api = NotificationApi::new(db, producers);
        let n = api
            .create_notification(NewNotification::new("u1", "Hi", "There").with_data("type", "test"))
            .await
            .expect("notification was not created");
        assert_eq!(n.id, 7);
        assert!(!n.read);
        drop(api);
        event_handler.start_handler().await;
        let published = published.lock().unwrap();
        assert_eq!(published.len(), 1);
        assert_eq!(published[0], n);
    }

    #[tokio::test]
    async fn failed_writes_are_not_published() {
        let _ = env_logger::try_init();
        let mut db = MockStore::new();
        db.expect_insert_notification()
            .returning(|_| Err(NotifierStoreError::DatabaseError("disk I/O error".into())));
        let count = Arc::new(Mutex::new(0));
        let sink = Arc::clone(&count);
        let handler: Handler<NotificationCreatedEvent> = Arc::new(move |_: NotificationCreatedEvent| {
            let sink = Arc::clone(&sink);
            async move { *sink.lock().unwrap() += 1 }.boxed()
        });
        let event_handler = EventHandler::new(5, handler);
        let producers = EventProducers {
            notification_created_producer: vec![event_handler.subscribe()],
            ..Default::default()
        };
        let api = NotificationApi::new(db, producers);
        let err = api.create_notification(NewNotification::new("u1", "Hi", "There")).await.unwrap_err();
        assert!(matches!(err, NotifierStoreError::DatabaseError(_)));
        drop(api);
        event_handler.start_handler().await;
        assert_eq!(*count.lock().unwrap(), 0);
    }
}
