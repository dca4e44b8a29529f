use actix_web::{http::StatusCode, web, web::ServiceConfig};
use chrono::{TimeZone, Utc};
use sparkd_notifier_engine::{
    db_types::{Notification, NotificationData},
    events::EventProducers,
    NotificationApi,
};

use super::{helpers::get_request, mocks::MockNotifications};
use crate::routes::UserNotificationsRoute;

fn configure(db: MockNotifications) -> impl FnOnce(&mut ServiceConfig) {
    move |cfg: &mut ServiceConfig| {
        let api = NotificationApi::new(db, EventProducers::default());
        cfg.service(UserNotificationsRoute::<MockNotifications>::new()).app_data(web::Data::new(api));
    }
}

fn notification(id: i64, title: &str) -> Notification {
    Notification {
        id,
        user_id: "u1".into(),
        title: title.into(),
        body: "Order \"Logo Design\" completed successfully!".into(),
        data: NotificationData::from([("type".to_string(), "order_status_change".to_string())]),
        read: id % 2 == 0,
        created_at: Utc.with_ymd_and_hms(2026, 10, 1, 12, 0, id as u32).unwrap(),
    }
}

#[actix_web::test]
async fn fetch_user_notifications() {
    let _ = env_logger::try_init().ok();
    let mut db = MockNotifications::new();
    db.expect_fetch_notifications_for_user()
        .times(1)
        .withf(|user_id| user_id == "u1")
        .returning(|_| Ok(vec![notification(2, "Order Completed! ✅"), notification(1, "Payment Received! 💰")]));
    let (status, body) = get_request("/users/u1/notifications", configure(db)).await.expect("Request failed");
    assert_eq!(status, StatusCode::OK);
    let list: Vec<Notification> = serde_json::from_str(&body).unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list[0], notification(2, "Order Completed! ✅"));
    assert!(body.contains(r#""userId":"u1""#));
    assert!(body.contains(r#""createdAt":"2026-10-01T12:00:02Z""#));
}

#[actix_web::test]
async fn user_without_notifications() {
    let _ = env_logger::try_init().ok();
    let mut db = MockNotifications::new();
    db.expect_fetch_notifications_for_user().returning(|_| Ok(vec![]));
    let (status, body) = get_request("/users/nobody/notifications", configure(db)).await.expect("Request failed");
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "[]");
}
