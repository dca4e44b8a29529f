use log::trace;
use sqlx::SqliteConnection;

use crate::db_types::{Order, OrderId};

pub async fn fetch_order(order_id: &OrderId, conn: &mut SqliteConnection) -> Result<Option<Order>, sqlx::Error> {
    let order = sqlx::query_as("SELECT status, sme_id, spark_id, gig_title FROM orders WHERE order_id = $1")
        .bind(order_id.as_str())
        .fetch_all(conn)
        .await?
        .pop();
    Ok(order)
}

/// Inserts the order, or overwrites the stored snapshot. This is not atomic with respect to any read that precedes
/// it; wrap both in a transaction if you need the previous snapshot.
pub async fn upsert_order(order_id: &OrderId, order: &Order, conn: &mut SqliteConnection) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
            INSERT INTO orders (order_id, status, sme_id, spark_id, gig_title) VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (order_id) DO UPDATE SET
                status = excluded.status,
                sme_id = excluded.sme_id,
                spark_id = excluded.spark_id,
                gig_title = excluded.gig_title,
                updated_at = CURRENT_TIMESTAMP;
        "#,
    )
    .bind(order_id.as_str())
    .bind(&order.status)
    .bind(&order.sme_id)
    .bind(&order.spark_id)
    .bind(&order.gig_title)
    .execute(conn)
    .await?;
    trace!("🗃️ Order {order_id} saved with status '{}'", order.status);
    Ok(())
}
