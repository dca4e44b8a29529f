//! Request handler definitions
//!
//! Define each route and its handler here. Handlers that are more than a line or two belong in a separate module.
//!
//! Since each worker thread processes its requests sequentially, handlers must never block the current thread. All
//! I/O (database access, publishing to the event bus) is expressed as futures and awaited.
use actix_web::{get, post, web, HttpResponse, Responder};
use log::*;
use sparkd_notifier_engine::{
    db_types::{Order, OrderId},
    events::{EventProducers, OrderModifiedEvent},
    NotificationApi,
    NotificationStore,
    OrderFeedApi,
    OrderRecords,
};

use crate::{
    data_objects::{JsonResponse, OrderChangeNotification},
    errors::ServerError,
};

// Web-actix cannot handle generics in handlers, so it's implemented manually using the `route!` macro
#[macro_export]
macro_rules! route {
    ($name:ident => $method:ident $path:literal impl $($bounds:ty),+) => {
        paste::paste! { pub struct [<$name:camel Route>]< $( [< T $bounds:camel> ],)+ >( $( core::marker::PhantomData<fn() -> [< T $bounds:camel> ] >,)+ );}
        paste::paste! { impl< $( [< T $bounds:camel> ],)+ > [<$name:camel Route>]< $( [< T $bounds:camel> ],)+ > {
            #[allow(clippy::new_without_default)]
            pub fn new() -> Self {
                Self($( core::marker::PhantomData::<fn() -> [< T $bounds:camel> ] >,)+)
            }
        }}
        paste::paste! { impl<$( [< T $bounds:camel >] , )+> actix_web::dev::HttpServiceFactory for [<$name:camel Route>]<$([<T $bounds:camel>],)+>
        where
            $([<T $bounds:camel>]: $bounds + 'static,)+
        {
            fn register(self, config: &mut actix_web::dev::AppService) {
                let res = actix_web::Resource::new($path)
                    .name(stringify!($name))
                    .guard(actix_web::guard::$method())
                    .to($name::< $( [< T $bounds:camel >], )+>);
                actix_web::dev::HttpServiceFactory::register(res, config);
            }
        }}
    };
}

// ----------------------------------------------   Health  ----------------------------------------------------
#[get("/health")]
pub async fn health() -> impl Responder {
    trace!("💻️ Received health check request");
    HttpResponse::Ok().body("👍️\n")
}

//----------------------------------------------   Order feed  ----------------------------------------------------
/// Route handler for the order change webhook.
///
/// The change feed posts the order document as it was before and after every update. The update is published onto
/// the event bus and the route returns immediately with `202 Accepted`. Whether the update produces notifications,
/// and whether those reach a device, is decided asynchronously and only shows up in the logs. The webhook never
/// touches the order table.
#[post("/events/orders/{order_id}")]
pub async fn order_changed(
    path: web::Path<String>,
    body: web::Json<OrderChangeNotification>,
    producers: web::Data<EventProducers>,
) -> Result<HttpResponse, ServerError> {
    let order_id = parse_order_id(path.into_inner())?;
    let OrderChangeNotification { before, after } = body.into_inner();
    debug!("💻️ Received order change for {order_id}: '{}' -> '{}'", before.status, after.status);
    producers.publish_order_modified(OrderModifiedEvent::new(order_id, before, after)).await;
    Ok(HttpResponse::Accepted().json(JsonResponse::success("Order change accepted.")))
}

route!(record_order => Put "/orders/{order_id}" impl OrderRecords);
/// Stores the latest snapshot of an order. If a different snapshot was stored before, the change is published just as
/// if it had arrived through the webhook.
pub async fn record_order<B: OrderRecords>(
    path: web::Path<String>,
    body: web::Json<Order>,
    api: web::Data<OrderFeedApi<B>>,
) -> Result<HttpResponse, ServerError> {
    let order_id = parse_order_id(path.into_inner())?;
    trace!("💻️ Received order snapshot for {order_id}");
    let message = match api.record_order(order_id.clone(), body.into_inner()).await? {
        Some(ev) if ev.status_changed() => {
            format!("Order {order_id} moved from '{}' to '{}'.", ev.before.status, ev.after.status)
        },
        Some(_) => format!("Order {order_id} updated."),
        None => format!("Order {order_id} recorded. There were no changes."),
    };
    Ok(HttpResponse::Ok().json(JsonResponse::success(message)))
}

fn parse_order_id(raw: String) -> Result<OrderId, ServerError> {
    if raw.trim().is_empty() {
        debug!("💻️ Rejecting request with a blank order id");
        return Err(ServerError::InvalidRequestPath("The order id cannot be blank".into()));
    }
    Ok(OrderId::from(raw))
}

//----------------------------------------------   Notifications  ----------------------------------------------------
route!(user_notifications => Get "/users/{user_id}/notifications" impl NotificationStore);
pub async fn user_notifications<B: NotificationStore>(
    path: web::Path<String>,
    api: web::Data<NotificationApi<B>>,
) -> Result<HttpResponse, ServerError> {
    let user_id = path.into_inner();
    trace!("💻️ Fetching notifications for {user_id}");
    let notifications = api.notifications_for_user(&user_id).await?;
    Ok(HttpResponse::Ok().json(notifications))
}
