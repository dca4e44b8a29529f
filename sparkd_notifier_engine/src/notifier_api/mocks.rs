use chrono::{DateTime, Utc};
use mockall::mock;

use crate::{
    db_types::{NewNotification, Notification, Order, OrderId, User},
    notifier_api::push_objects::PushMessage,
    traits::{NotificationStore, NotifierStoreError, OrderRecords, PushDelivery, PushDeliveryError, UserDirectory},
};

mock! {
    pub Store {}
    impl NotificationStore for Store {
        async fn insert_notification(&self, notification: NewNotification) -> Result<Notification, NotifierStoreError>;
        async fn fetch_notification(&self, id: i64) -> Result<Option<Notification>, NotifierStoreError>;
        async fn fetch_notifications_for_user(&self, user_id: &str) -> Result<Vec<Notification>, NotifierStoreError>;
        async fn delete_read_notifications_before(&self, cutoff: DateTime<Utc>) -> Result<Vec<i64>, NotifierStoreError>;
    }
    impl UserDirectory for Store {
        async fn fetch_user(&self, user_id: &str) -> Result<Option<User>, NotifierStoreError>;
    }
    impl OrderRecords for Store {
        async fn fetch_order(&self, order_id: &OrderId) -> Result<Option<Order>, NotifierStoreError>;
        async fn save_order(&self, order_id: &OrderId, order: &Order) -> Result<Option<Order>, NotifierStoreError>;
    }
}

mock! {
    pub Pusher {}
    impl PushDelivery for Pusher {
        async fn send(&self, message: &PushMessage) -> Result<String, PushDeliveryError>;
    }
}

/// What the store would hand back after inserting `n` as record `id`.
pub fn stored(id: i64, n: NewNotification) -> Notification {
    Notification {
        id,
        user_id: n.user_id,
        title: n.title,
        body: n.body,
        data: n.data,
        read: false,
        created_at: Utc::now(),
    }
}
