use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

use actix_web::{http::StatusCode, web, web::ServiceConfig};
use futures::FutureExt;
use sparkd_notifier_engine::{
    db_types::{Order, OrderId},
    events::{EventHandler, EventProducers, Handler, OrderModifiedEvent},
    NotifierStoreError,
    OrderFeedApi,
};

use super::{
    helpers::{post_json, put_json},
    mocks::MockOrderStore,
};
use crate::{
    data_objects::JsonResponse,
    routes::{order_changed, RecordOrderRoute},
};

const CHANGE_JSON: &str = r#"{
    "before": {"status": "pendingPayment", "smeID": "sme1", "sparkID": "u1", "gigTitle": "Logo Design"},
    "after": {"status": "inProgress", "smeID": "sme1", "sparkID": "u1", "gigTitle": "Logo Design"}
}"#;

/// An event handler that remembers every order update published to it.
fn recording_handler() -> (EventHandler<OrderModifiedEvent>, Arc<Mutex<Vec<OrderModifiedEvent>>>) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let handler: Handler<OrderModifiedEvent> = Arc::new(move |ev: OrderModifiedEvent| {
        let sink = Arc::clone(&sink);
        async move { sink.lock().unwrap().push(ev) }.boxed()
    });
    (EventHandler::new(5, handler), seen)
}

async fn drain(handler: EventHandler<OrderModifiedEvent>) {
    tokio::time::timeout(Duration::from_secs(5), handler.start_handler())
        .await
        .expect("The event handler did not stop");
}

fn configure(db: MockOrderStore, producers: EventProducers) -> impl FnOnce(&mut ServiceConfig) {
    move |cfg: &mut ServiceConfig| {
        let api = OrderFeedApi::new(db, producers.clone());
        cfg.service(order_changed)
            .service(RecordOrderRoute::<MockOrderStore>::new())
            .app_data(web::Data::new(producers))
            .app_data(web::Data::new(api));
    }
}

/// Only the event bus is registered. There is no order store behind the app at all.
fn configure_webhook_only(producers: EventProducers) -> impl FnOnce(&mut ServiceConfig) {
    move |cfg: &mut ServiceConfig| {
        cfg.service(order_changed).app_data(web::Data::new(producers));
    }
}

#[actix_web::test]
async fn order_change_is_published() {
    let _ = env_logger::try_init().ok();
    let (handler, seen) = recording_handler();
    let producers = EventProducers { order_modified_producer: vec![handler.subscribe()], ..Default::default() };
    let mut db = MockOrderStore::new();
    db.expect_save_order().never();
    let (status, body) =
        post_json("/events/orders/order42", CHANGE_JSON, configure(db, producers)).await.expect("Request failed");
    assert_eq!(status, StatusCode::ACCEPTED);
    let response: JsonResponse = serde_json::from_str(&body).unwrap();
    assert!(response.success);
    // The app, and with it the only producer, is gone, so the handler drains the channel and stops
    drain(handler).await;
    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].order_id, OrderId::from("order42"));
    assert_eq!(seen[0].before.status, "pendingPayment");
    assert_eq!(seen[0].after, Order::new("inProgress", "sme1", "u1", "Logo Design"));
}

#[actix_web::test]
async fn webhook_needs_no_order_store() {
    let _ = env_logger::try_init().ok();
    let (handler, seen) = recording_handler();
    let producers = EventProducers { order_modified_producer: vec![handler.subscribe()], ..Default::default() };
    let config = configure_webhook_only(producers);
    let (status, _) = post_json("/events/orders/order9", CHANGE_JSON, config).await.expect("Request failed");
    assert_eq!(status, StatusCode::ACCEPTED);
    drain(handler).await;
    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].order_id, OrderId::from("order9"));
}

#[actix_web::test]
async fn malformed_order_change_is_rejected() {
    let _ = env_logger::try_init().ok();
    let (handler, seen) = recording_handler();
    let producers = EventProducers { order_modified_producer: vec![handler.subscribe()], ..Default::default() };
    let payload = r#"{"before": {"status": "delivered"}"#;
    let (status, body) = post_json("/events/orders/order42", payload, configure(MockOrderStore::new(), producers))
        .await
        .expect("Request failed");
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let response: JsonResponse = serde_json::from_str(&body).unwrap();
    assert!(!response.success);
    drain(handler).await;
    assert!(seen.lock().unwrap().is_empty());
}

#[actix_web::test]
async fn blank_order_id_is_rejected() {
    let _ = env_logger::try_init().ok();
    let config = configure(MockOrderStore::new(), EventProducers::default());
    let (status, body) = post_json("/events/orders/%20", CHANGE_JSON, config).await.expect("Request failed");
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, r#"{"error":"Could not read request path: The order id cannot be blank"}"#);
}

#[actix_web::test]
async fn recording_a_status_change() {
    let _ = env_logger::try_init().ok();
    let mut db = MockOrderStore::new();
    db.expect_save_order()
        .times(1)
        .withf(|id, order| id.as_str() == "order42" && order.status == "delivered")
        .returning(|_, order| Ok(Some(order.clone().with_status("inProgress"))));
    let body = r#"{"status": "delivered", "smeID": "sme1", "sparkID": "u1", "gigTitle": "Logo Design"}"#;
    let (status, body) =
        put_json("/orders/order42", body, configure(db, EventProducers::default())).await.expect("Request failed");
    assert_eq!(status, StatusCode::OK);
    let response: JsonResponse = serde_json::from_str(&body).unwrap();
    assert_eq!(response, JsonResponse::success("Order #order42 moved from 'inProgress' to 'delivered'."));
}

#[actix_web::test]
async fn recording_a_new_order() {
    let _ = env_logger::try_init().ok();
    let mut db = MockOrderStore::new();
    db.expect_save_order().times(1).returning(|_, _| Ok(None));
    let body = r#"{"status": "pendingPayment", "smeID": "sme1", "sparkID": "u1", "gigTitle": "Logo Design"}"#;
    let (status, body) =
        put_json("/orders/order7", body, configure(db, EventProducers::default())).await.expect("Request failed");
    assert_eq!(status, StatusCode::OK);
    let response: JsonResponse = serde_json::from_str(&body).unwrap();
    assert_eq!(response, JsonResponse::success("Order #order7 recorded. There were no changes."));
}

#[actix_web::test]
async fn store_failures_are_server_errors() {
    let _ = env_logger::try_init().ok();
    let mut db = MockOrderStore::new();
    db.expect_save_order().returning(|_, _| Err(NotifierStoreError::DatabaseError("database is locked".into())));
    let body = r#"{"status": "completed"}"#;
    let (status, body) =
        put_json("/orders/order7", body, configure(db, EventProducers::default())).await.expect("Request failed");
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let expected = r#"{"error":"An error occurred on the backend of the server. Database error: database is locked"}"#;
    assert_eq!(body, expected);
}
