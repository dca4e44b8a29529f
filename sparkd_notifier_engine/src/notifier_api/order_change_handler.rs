use std::fmt::Debug;

use log::*;

use crate::{
    db_types::Notification,
    events::OrderModifiedEvent,
    notifier_api::{notification_api::NotificationApi, status_mapper::notifications_for_transition},
    traits::NotificationStore,
};

/// Reacts to order updates by writing the notifications that the status transition calls for.
pub struct OrderChangeHandler<B> {
    writer: NotificationApi<B>,
}

impl<B> Debug for OrderChangeHandler<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "OrderChangeHandler")
    }
}

impl<B> OrderChangeHandler<B> {
    pub fn new(writer: NotificationApi<B>) -> Self {
        Self { writer }
    }
}

impl<B> OrderChangeHandler<B>
where B: NotificationStore
{
    /// Handles a single order update and returns the notifications that were written.
    ///
    /// Notifications are written one at a time, in the order the mapper returns them. If a write fails, the error is
    /// logged and the remaining notifications for this update are abandoned. Nothing that was already written is
    /// rolled back, and the event is not retried.
    pub async fn handle_order_modified(&self, event: OrderModifiedEvent) -> Vec<Notification> {
        let OrderModifiedEvent { order_id, before, after } = event;
        let notices = notifications_for_transition(&order_id, &before, &after);
        if notices.is_empty() {
            trace!("🔔️ Order {order_id} update ('{}' -> '{}') needs no notifications", before.status, after.status);
            return Vec::new();
        }
        debug!(
            "🔔️ Order {order_id} moved from '{}' to '{}'. Writing {} notifications",
            before.status,
            after.status,
            notices.len()
        );
        let mut created = Vec::with_capacity(notices.len());
        for notice in notices {
            let recipient = notice.user_id.clone();
            match self.writer.create_notification(notice).await {
                Ok(n) => created.push(n),
                Err(e) => {
                    error!("🔔️ Error in order status change for order {order_id}. Could not notify {recipient}. {e}");
                    break;
                },
            }
        }
        created
    }
}
