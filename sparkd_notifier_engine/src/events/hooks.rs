use std::sync::Arc;

use futures_util::future::BoxFuture;
use log::*;

use crate::events::{EventHandler, EventProducer, Handler, NotificationCreatedEvent, OrderModifiedEvent};

#[derive(Default, Clone)]
pub struct EventProducers {
    pub order_modified_producer: Vec<EventProducer<OrderModifiedEvent>>,
    pub notification_created_producer: Vec<EventProducer<NotificationCreatedEvent>>,
}

impl EventProducers {
    pub async fn publish_order_modified(&self, event: OrderModifiedEvent) {
        for emitter in &self.order_modified_producer {
            trace!("📬️ Notifying order modified hook subscribers");
            emitter.publish_event(event.clone()).await;
        }
    }

    pub async fn publish_notification_created(&self, event: NotificationCreatedEvent) {
        for emitter in &self.notification_created_producer {
            trace!("📬️ Notifying notification created hook subscribers");
            emitter.publish_event(event.clone()).await;
        }
    }
}

pub struct EventHandlers {
    pub on_order_modified: Option<EventHandler<OrderModifiedEvent>>,
    pub on_notification_created: Option<EventHandler<NotificationCreatedEvent>>,
}

impl EventHandlers {
    pub fn new(buffer_size: usize, hooks: EventHooks) -> Self {
        let on_order_modified = hooks.on_order_modified.map(|f| EventHandler::new(buffer_size, f));
        let on_notification_created = hooks.on_notification_created.map(|f| EventHandler::new(buffer_size, f));
        Self { on_order_modified, on_notification_created }
    }

    pub fn producers(&self) -> EventProducers {
        let mut result = EventProducers::default();
        if let Some(handler) = &self.on_order_modified {
            result.order_modified_producer.push(handler.subscribe());
        }
        if let Some(handler) = &self.on_notification_created {
            result.notification_created_producer.push(handler.subscribe());
        }
        result
    }

    pub async fn start_handlers(self) {
        if let Some(handler) = self.on_order_modified {
            tokio::spawn(async move {
                handler.start_handler().await;
            });
        }
        if let Some(handler) = self.on_notification_created {
            tokio::spawn(async move {
                handler.start_handler().await;
            });
        }
    }
}

#[derive(Default, Clone)]
pub struct EventHooks {
    pub on_order_modified: Option<Handler<OrderModifiedEvent>>,
    pub on_notification_created: Option<Handler<NotificationCreatedEvent>>,
}

impl EventHooks {
    pub fn on_order_modified<F>(&mut self, f: F) -> &mut Self
    where F: (Fn(OrderModifiedEvent) -> BoxFuture<'static, ()>) + Send + Sync + 'static {
        self.on_order_modified = Some(Arc::new(f));
        self
    }

    pub fn on_notification_created<F>(&mut self, f: F) -> &mut Self
    where F: (Fn(NotificationCreatedEvent) -> BoxFuture<'static, ()>) + Send + Sync + 'static {
        self.on_notification_created = Some(Arc::new(f));
        self
    }
}
