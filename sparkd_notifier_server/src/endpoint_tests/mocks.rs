use chrono::{DateTime, Utc};
use mockall::mock;
use sparkd_notifier_engine::{
    db_types::{NewNotification, Notification, Order, OrderId},
    NotificationStore,
    NotifierStoreError,
    OrderRecords,
};

mock! {
    pub OrderStore {}
    impl OrderRecords for OrderStore {
        async fn fetch_order(&self, order_id: &OrderId) -> Result<Option<Order>, NotifierStoreError>;
        async fn save_order(&self, order_id: &OrderId, order: &Order) -> Result<Option<Order>, NotifierStoreError>;
    }
}

mock! {
    pub Notifications {}
    impl NotificationStore for Notifications {
        async fn insert_notification(&self, notification: NewNotification) -> Result<Notification, NotifierStoreError>;
        async fn fetch_notification(&self, id: i64) -> Result<Option<Notification>, NotifierStoreError>;
        async fn fetch_notifications_for_user(&self, user_id: &str) -> Result<Vec<Notification>, NotifierStoreError>;
        async fn delete_read_notifications_before(&self, cutoff: DateTime<Utc>) -> Result<Vec<i64>, NotifierStoreError>;
    }
}
