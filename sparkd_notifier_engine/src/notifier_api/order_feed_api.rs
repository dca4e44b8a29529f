use std::fmt::Debug;

use log::*;

use crate::{
    db_types::{Order, OrderId},
    events::{EventProducers, OrderModifiedEvent},
    traits::{NotifierStoreError, OrderRecords},
};

/// `OrderFeedApi` is where order updates enter the notifier.
///
/// Updates arrive in one of two ways:
/// * An external change feed already knows the before and after snapshots, and reports them with
///   [`Self::publish_change`].
/// * Order management writes the new snapshot through [`Self::record_order`], and the previous snapshot is read back
///   from [`OrderRecords`].
///
/// Either way, an [`OrderModifiedEvent`] is published to the subscribers.
pub struct OrderFeedApi<B> {
    db: B,
    producers: EventProducers,
}

impl<B> Debug for OrderFeedApi<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "OrderFeedApi")
    }
}

impl<B> OrderFeedApi<B> {
    pub fn new(db: B, producers: EventProducers) -> Self {
        Self { db, producers }
    }

    /// Publishes an update reported by an external change feed.
    pub async fn publish_change(&self, event: OrderModifiedEvent) {
        trace!("🔄️ Publishing change for order {}", event.order_id);
        self.producers.publish_order_modified(event).await;
    }
}

impl<B> OrderFeedApi<B>
where B: OrderRecords
{
    /// Stores the latest snapshot of an order. If a different snapshot was stored before, an [`OrderModifiedEvent`]
    /// is published and returned. Newly seen orders and identical rewrites publish nothing.
    pub async fn record_order(
        &self,
        order_id: OrderId,
        order: Order,
    ) -> Result<Option<OrderModifiedEvent>, NotifierStoreError> {
        let previous = self.db.save_order(&order_id, &order).await?;
        match previous {
            None => {
                debug!("🔄️ First snapshot of order {order_id} stored with status '{}'", order.status);
                Ok(None)
            },
            Some(before) if before == order => {
                trace!("🔄️ Order {order_id} was rewritten without changes");
                Ok(None)
            },
            Some(before) => {
                let event = OrderModifiedEvent::new(order_id, before, order);
                self.publish_change(event.clone()).await;
                Ok(Some(event))
            },
        }
    }

    pub async fn fetch_order(&self, order_id: &OrderId) -> Result<Option<Order>, NotifierStoreError> {
        self.db.fetch_order(order_id).await
    }
}
