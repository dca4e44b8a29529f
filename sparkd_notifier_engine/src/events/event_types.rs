use serde::{Deserialize, Serialize};

use crate::db_types::{Notification, Order, OrderId};

/// An order document was updated. Carries the snapshots from before and after the update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderModifiedEvent {
    pub order_id: OrderId,
    pub before: Order,
    pub after: Order,
}

impl OrderModifiedEvent {
    pub fn new(order_id: OrderId, before: Order, after: Order) -> Self {
        Self { order_id, before, after }
    }

    pub fn status_changed(&self) -> bool {
        self.before.status != self.after.status
    }
}

/// A notification record was written to the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationCreatedEvent {
    pub notification: Notification,
}

impl NotificationCreatedEvent {
    pub fn new(notification: Notification) -> Self {
        Self { notification }
    }
}
