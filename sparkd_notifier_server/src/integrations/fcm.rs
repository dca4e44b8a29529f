use std::sync::Arc;

use fcm_tools::{
    AndroidConfig,
    AndroidMessagePriority,
    AndroidNotification,
    ApnsConfig,
    ApnsPayload,
    Aps,
    FcmApi,
    FcmApiError,
    FcmConfig,
    FcmMessage,
    FcmNotification,
};
use futures::FutureExt;
use log::*;
use sparkd_notifier_engine::{
    events::{EventHandlers, EventHooks},
    notifier_api::push_objects::DeliveryPriority,
    DeliveryHints,
    PushDelivery,
    PushDeliveryError,
    PushDispatcher,
    PushMessage,
    SqliteDatabase,
};

/// Delivers push messages through Firebase Cloud Messaging.
#[derive(Clone)]
pub struct FcmPushDelivery {
    api: FcmApi,
}

impl FcmPushDelivery {
    pub fn new(config: FcmConfig) -> Result<Self, FcmApiError> {
        let api = FcmApi::new(config)?;
        Ok(Self { api })
    }
}

impl PushDelivery for FcmPushDelivery {
    async fn send(&self, message: &PushMessage) -> Result<String, PushDeliveryError> {
        let fcm_message = fcm_message_from_push(message);
        let receipt = self.api.send(&fcm_message).await.map_err(delivery_error)?;
        Ok(receipt.name)
    }
}

/// Lays out a push message the way FCM expects it. The notification block carries the title and body, `data` is
/// passed through untouched, and the delivery hints become the Android and APNs overrides.
pub fn fcm_message_from_push(message: &PushMessage) -> FcmMessage {
    let priority = match message.hints.priority {
        DeliveryPriority::Normal => AndroidMessagePriority::Normal,
        DeliveryPriority::High => AndroidMessagePriority::High,
    };
    FcmMessage {
        token: message.token.clone(),
        notification: Some(FcmNotification { title: message.title.clone(), body: message.body.clone() }),
        data: message.data.clone(),
        android: Some(AndroidConfig {
            priority,
            notification: Some(AndroidNotification {
                channel_id: Some(message.hints.android_channel_id.clone()),
                sound: Some(message.hints.sound.clone()),
            }),
        }),
        apns: Some(ApnsConfig {
            payload: ApnsPayload {
                aps: Aps { sound: Some(message.hints.sound.clone()), badge: Some(message.hints.badge) },
            },
        }),
    }
}

fn delivery_error(e: FcmApiError) -> PushDeliveryError {
    if e.is_invalid_token() {
        return PushDeliveryError::InvalidToken(e.to_string());
    }
    match e {
        FcmApiError::QueryError { status, message } => PushDeliveryError::Rejected { status, message },
        other => PushDeliveryError::Transport(other.to_string()),
    }
}

/// Creates the handler for newly created notifications, which pushes each one to the recipient's device.
pub fn create_push_event_handlers(
    db: SqliteDatabase,
    push: FcmPushDelivery,
    hints: DeliveryHints,
    buffer_size: usize,
) -> EventHandlers {
    let mut hooks = EventHooks::default();
    let dispatcher = Arc::new(PushDispatcher::new(db, push).with_hints(hints));
    hooks.on_notification_created(move |ev| {
        let dispatcher = Arc::clone(&dispatcher);
        trace!("📲️ Notification #{} created. Dispatching push message.", ev.notification.id);
        async move { dispatcher.handle_notification_created(ev).await }.boxed()
    });
    EventHandlers::new(buffer_size, hooks)
}
