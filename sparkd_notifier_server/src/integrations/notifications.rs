use std::sync::Arc;

use futures::FutureExt;
use log::*;
use sparkd_notifier_engine::{
    events::{EventHandlers, EventHooks, EventProducers},
    NotificationApi,
    OrderChangeHandler,
    SqliteDatabase,
};

/// Creates the handler for order updates. Notifications it writes are announced through `producers`, which should
/// feed the push handler created by [`super::fcm::create_push_event_handlers`].
pub fn create_order_event_handlers(
    db: SqliteDatabase,
    producers: EventProducers,
    buffer_size: usize,
) -> EventHandlers {
    let mut hooks = EventHooks::default();
    let handler = Arc::new(OrderChangeHandler::new(NotificationApi::new(db, producers)));
    hooks.on_order_modified(move |ev| {
        if !ev.status_changed() {
            trace!("🔔️ Order {} was updated without a status change", ev.order_id);
        }
        let handler = Arc::clone(&handler);
        async move {
            let created = handler.handle_order_modified(ev).await;
            trace!("🔔️ {} notifications written", created.len());
        }
        .boxed()
    });
    EventHandlers::new(buffer_size, hooks)
}
