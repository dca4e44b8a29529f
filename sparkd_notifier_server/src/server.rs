use std::time::Duration;

use actix_web::{
    dev::Server,
    error::InternalError,
    http::KeepAlive,
    middleware::Logger,
    web,
    App,
    HttpResponse,
    HttpServer,
};
use log::*;
use sparkd_notifier_engine::{events::EventProducers, NotificationApi, OrderFeedApi, SqliteDatabase};

use crate::{
    cleanup_worker::start_cleanup_worker,
    config::ServerConfig,
    data_objects::JsonResponse,
    errors::ServerError,
    integrations::{
        fcm::{create_push_event_handlers, FcmPushDelivery},
        notifications::create_order_event_handlers,
    },
    routes::{health, order_changed, RecordOrderRoute, UserNotificationsRoute},
};

pub async fn run_server(config: ServerConfig) -> Result<(), ServerError> {
    let db = SqliteDatabase::new_with_url(&config.database_url, 25)
        .await
        .map_err(|e| ServerError::InitializeError(e.to_string()))?;
    db.run_migrations().await.map_err(|e| ServerError::InitializeError(e.to_string()))?;
    let producers = start_event_handlers(&config, &db).await?;
    let _cleanup = start_cleanup_worker(db.clone(), config.cleanup_interval, config.notification_retention);
    let srv = create_server_instance(config, db, producers)?;
    srv.await.map_err(|e| ServerError::Unspecified(e.to_string()))
}

/// Starts the notification chain and returns the producers that feed it.
///
/// Order updates go to the order change handler, which writes notifications. Every notification it writes is
/// announced to the push handler, which sends it to the recipient's device.
pub async fn start_event_handlers(config: &ServerConfig, db: &SqliteDatabase) -> Result<EventProducers, ServerError> {
    let push = FcmPushDelivery::new(config.fcm_config.clone())
        .map_err(|e| ServerError::InitializeError(format!("Could not create the FCM client. {e}")))?;
    let push_handlers =
        create_push_event_handlers(db.clone(), push, config.delivery_hints(), config.event_buffer_size);
    let order_handlers = create_order_event_handlers(db.clone(), push_handlers.producers(), config.event_buffer_size);
    let producers = order_handlers.producers();
    push_handlers.start_handlers().await;
    order_handlers.start_handlers().await;
    info!("📬️ Event handlers started");
    Ok(producers)
}

pub fn create_server_instance(
    config: ServerConfig,
    db: SqliteDatabase,
    producers: EventProducers,
) -> Result<Server, ServerError> {
    let srv = HttpServer::new(move || {
        let feed_api = OrderFeedApi::new(db.clone(), producers.clone());
        let webhook_producers = producers.clone();
        let notifications_api = NotificationApi::new(db.clone(), EventProducers::default());
        App::new()
            .wrap(Logger::new("%t (%D ms) %s %a %{Host}i %U").log_target("spn::access_log"))
            .app_data(json_config())
            .app_data(web::Data::new(webhook_producers))
            .app_data(web::Data::new(feed_api))
            .app_data(web::Data::new(notifications_api))
            .service(health)
            .service(order_changed)
            .service(RecordOrderRoute::<SqliteDatabase>::new())
            .service(UserNotificationsRoute::<SqliteDatabase>::new())
    })
    .keep_alive(KeepAlive::Timeout(Duration::from_secs(600)))
    .bind((config.host.as_str(), config.port))?
    .run();
    Ok(srv)
}

/// Malformed JSON bodies are answered with a `400` and a [`JsonResponse`] explaining what was wrong.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        debug!("💻️ Rejecting request with an invalid body. {message}");
        InternalError::from_response(err, HttpResponse::BadRequest().json(JsonResponse::failure(message))).into()
    })
}
