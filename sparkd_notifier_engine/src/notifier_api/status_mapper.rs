//! Maps order status transitions to the notifications they produce.
//!
//! | new status       | notified        |
//! |------------------|-----------------|
//! | `pendingPayment` | SME             |
//! | `inProgress`     | Spark           |
//! | `delivered`      | SME             |
//! | `completed`      | Spark           |
//! | `cancelled`      | SME, then Spark |
//!
//! Any other status, or an update that leaves the status unchanged, produces nothing.
use log::*;

use crate::db_types::{NewNotification, Order, OrderId, OrderStatusType};

pub const DATA_TYPE_KEY: &str = "type";
pub const DATA_ORDER_ID_KEY: &str = "orderId";
pub const DATA_STATUS_KEY: &str = "status";
pub const ORDER_STATUS_CHANGE: &str = "order_status_change";
pub const ORDER_CANCELLED: &str = "order_cancelled";

/// Returns the notifications to write for the transition from `before` to `after`, in the order they must be written.
///
/// The result is empty when the status did not change or is not one we notify about. Otherwise it holds one
/// notification, or two for a cancellation. Each one is addressed to whatever user id the order carries, even a blank
/// one.
pub fn notifications_for_transition(order_id: &OrderId, before: &Order, after: &Order) -> Vec<NewNotification> {
    if before.status == after.status {
        return Vec::new();
    }
    let Some(status) = after.status_type() else {
        trace!("🔔️ Order {order_id} moved to status '{}', which needs no notification", after.status);
        return Vec::new();
    };
    let gig = after.gig_title.as_str();
    match status {
        OrderStatusType::PendingPayment => vec![status_change(
            order_id,
            status,
            &after.sme_id,
            "Order Accepted! 🎉",
            format!("Your order \"{gig}\" was accepted. Please complete payment to start work."),
        )],
        OrderStatusType::InProgress => vec![status_change(
            order_id,
            status,
            &after.spark_id,
            "Payment Received! 💰",
            format!("Payment received for \"{gig}\". You can now start working."),
        )],
        OrderStatusType::Delivered => vec![status_change(
            order_id,
            status,
            &after.sme_id,
            "Work Delivered! 📦",
            format!("Your order \"{gig}\" has been delivered. Please review."),
        )],
        OrderStatusType::Completed => vec![status_change(
            order_id,
            status,
            &after.spark_id,
            "Order Completed! ✅",
            format!("Order \"{gig}\" completed successfully!"),
        )],
        OrderStatusType::Cancelled => vec![
            cancellation(order_id, &after.sme_id, format!("Your order \"{gig}\" was cancelled.")),
            cancellation(order_id, &after.spark_id, format!("Order \"{gig}\" was cancelled.")),
        ],
    }
}

fn status_change(
    order_id: &OrderId,
    status: OrderStatusType,
    recipient: &str,
    title: &str,
    body: String,
) -> NewNotification {
    NewNotification::new(recipient, title, body.as_str())
        .with_data(DATA_TYPE_KEY, ORDER_STATUS_CHANGE)
        .with_data(DATA_ORDER_ID_KEY, order_id.as_str())
        .with_data(DATA_STATUS_KEY, status.as_str())
}

fn cancellation(order_id: &OrderId, recipient: &str, body: String) -> NewNotification {
    NewNotification::new(recipient, "Order Cancelled", body.as_str())
        .with_data(DATA_TYPE_KEY, ORDER_CANCELLED)
        .with_data(DATA_ORDER_ID_KEY, order_id.as_str())
}
