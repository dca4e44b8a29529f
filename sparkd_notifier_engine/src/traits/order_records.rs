use crate::{
    db_types::{Order, OrderId},
    traits::NotifierStoreError,
};

/// Order snapshots, for deployments where order updates are written through the notifier rather than reported by an
/// external change feed.
#[allow(async_fn_in_trait)]
pub trait OrderRecords {
    async fn fetch_order(&self, order_id: &OrderId) -> Result<Option<Order>, NotifierStoreError>;

    /// Inserts or replaces the order, returning the snapshot that was stored before, if any.
    async fn save_order(&self, order_id: &OrderId, order: &Order) -> Result<Option<Order>, NotifierStoreError>;
}
