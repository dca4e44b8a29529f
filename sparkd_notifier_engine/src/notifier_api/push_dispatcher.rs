use std::fmt::Debug;

use log::*;

use crate::{
    db_types::Notification,
    events::NotificationCreatedEvent,
    notifier_api::{
        errors::PushDispatchError,
        push_objects::{DeliveryHints, PushMessage},
    },
    traits::{PushDelivery, UserDirectory},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchResult {
    /// The push service accepted the message and returned this receipt.
    Delivered { receipt: String },
    /// The recipient has not registered a device. Nothing was sent.
    NoPushToken,
    /// There is no user record for the recipient. Nothing was sent.
    UnknownUser,
}

/// Sends newly created notifications to the recipient's device.
pub struct PushDispatcher<B, P> {
    db: B,
    push: P,
    hints: DeliveryHints,
}

impl<B, P> Debug for PushDispatcher<B, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PushDispatcher ({:?})", self.hints)
    }
}

impl<B, P> PushDispatcher<B, P> {
    pub fn new(db: B, push: P) -> Self {
        Self { db, push, hints: DeliveryHints::default() }
    }

    pub fn with_hints(mut self, hints: DeliveryHints) -> Self {
        self.hints = hints;
        self
    }
}

impl<B, P> PushDispatcher<B, P>
where
    B: UserDirectory,
    P: PushDelivery,
{
    /// Looks up the recipient's registration token and, if there is one, sends the notification to it.
    ///
    /// A missing token is not an error. Failures are returned as-is; nothing is retried.
    pub async fn dispatch(&self, notification: &Notification) -> Result<DispatchResult, PushDispatchError> {
        let Some(user) = self.db.fetch_user(&notification.user_id).await? else {
            return Ok(DispatchResult::UnknownUser);
        };
        let Some(token) = user.push_token() else {
            return Ok(DispatchResult::NoPushToken);
        };
        let message = PushMessage::for_notification(token, notification, self.hints.clone());
        let receipt = self.push.send(&message).await?;
        Ok(DispatchResult::Delivered { receipt })
    }

    /// Event hook entry point. Every outcome is logged, and nothing is propagated to the event bus.
    pub async fn handle_notification_created(&self, event: NotificationCreatedEvent) {
        let notification = event.notification;
        match self.dispatch(&notification).await {
            Ok(DispatchResult::Delivered { receipt }) => {
                info!("📲️ Successfully sent notification #{}: {receipt}", notification.id);
            },
            Ok(DispatchResult::NoPushToken) => {
                info!("📲️ No FCM token for user: {}", notification.user_id);
            },
            Ok(DispatchResult::UnknownUser) => {
                info!("📲️ No user record for {}. Notification #{} was not pushed", notification.user_id, notification.id);
            },
            Err(e) => {
                error!("📲️ Error sending notification #{} to {}. {e}", notification.id, notification.user_id);
            },
        }
    }
}
