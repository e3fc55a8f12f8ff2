use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::orders::models::{Order, OrderChanges, OrderFilter, OrderItem};

use super::OrderStore;

const ORDER_COLUMNS: &str = "id, customer_name, phone, email, address, note, total_amount, \
     status, is_deleted, created_at, updated_at";

/// PostgreSQL-backed order store
pub struct PgOrderStore {
    pool: PgPool,
}

impl PgOrderStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Append ` WHERE TRUE` and one ` AND` clause per set field of `filter`.
fn push_filter(qb: &mut QueryBuilder<'_, Postgres>, filter: &OrderFilter) {
    qb.push(" WHERE TRUE");
    if let Some(id) = filter.id {
        qb.push(" AND id = ").push_bind(id);
    }
    if let Some(is_deleted) = filter.is_deleted {
        qb.push(" AND is_deleted = ").push_bind(is_deleted);
    }
    if let Some(status) = filter.status {
        qb.push(" AND status = ").push_bind(status);
    }
    if let Some(phone) = &filter.phone {
        qb.push(" AND phone = ").push_bind(phone.clone());
    }
}

fn select_query(filter: &OrderFilter, tail: &str) -> QueryBuilder<'static, Postgres> {
    let mut qb = QueryBuilder::new(format!("SELECT {} FROM orders", ORDER_COLUMNS));
    push_filter(&mut qb, filter);
    qb.push(tail);
    qb
}

/// `UPDATE` touching only rows whose values really change, `None` when
/// there is nothing to set.
fn update_query(
    filter: &OrderFilter,
    changes: &OrderChanges,
) -> Option<QueryBuilder<'static, Postgres>> {
    if changes.is_empty() {
        return None;
    }

    let mut qb = QueryBuilder::new("UPDATE orders SET updated_at = NOW()");
    if let Some(status) = changes.status {
        qb.push(", status = ").push_bind(status);
    }
    if let Some(is_deleted) = changes.is_deleted {
        qb.push(", is_deleted = ").push_bind(is_deleted);
    }
    push_filter(&mut qb, filter);

    qb.push(" AND (FALSE");
    if let Some(status) = changes.status {
        qb.push(" OR status IS DISTINCT FROM ").push_bind(status);
    }
    if let Some(is_deleted) = changes.is_deleted {
        qb.push(" OR is_deleted IS DISTINCT FROM ").push_bind(is_deleted);
    }
    qb.push(")");

    Some(qb)
}

#[async_trait]
impl OrderStore for PgOrderStore {
    async fn find(&self, filter: &OrderFilter) -> Result<Vec<Order>> {
        select_query(filter, " ORDER BY created_at")
            .build_query_as::<Order>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list orders: {:?}", e);
                AppError::Database(e)
            })
    }

    async fn find_one(&self, filter: &OrderFilter) -> Result<Option<Order>> {
        select_query(filter, " ORDER BY created_at LIMIT 1")
            .build_query_as::<Order>()
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to find order: {:?}", e);
                AppError::Database(e)
            })
    }

    async fn update(&self, filter: &OrderFilter, changes: &OrderChanges) -> Result<u64> {
        let Some(mut qb) = update_query(filter, changes) else {
            return Ok(0);
        };

        let result = qb.build().execute(&self.pool).await.map_err(|e| {
            tracing::error!("Failed to update order: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(result.rows_affected())
    }

    async fn find_items(&self, order_id: Uuid) -> Result<Vec<OrderItem>> {
        sqlx::query_as::<_, OrderItem>(
            r#"
            SELECT id, order_id, product_name, quantity, unit_price
            FROM order_items
            WHERE order_id = $1
            ORDER BY id
            "#,
        )
        .bind(order_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list order items: {:?}", e);
            AppError::Database(e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::orders::models::OrderStatus;

    fn select_sql(filter: &OrderFilter) -> String {
        select_query(filter, " ORDER BY created_at").sql().to_string()
    }

    #[test]
    fn test_empty_filter_selects_everything() {
        assert_eq!(
            select_sql(&OrderFilter::default()),
            format!("SELECT {} FROM orders WHERE TRUE ORDER BY created_at", ORDER_COLUMNS)
        );
    }

    #[test]
    fn test_full_filter_binds_every_field() {
        let filter = OrderFilter::live()
            .with_id(Uuid::now_v7())
            .with_status(OrderStatus::Submit)
            .with_phone("0901234567");

        assert_eq!(
            select_sql(&filter),
            format!(
                "SELECT {} FROM orders WHERE TRUE AND id = $1 AND is_deleted = $2 \
                 AND status = $3 AND phone = $4 ORDER BY created_at",
                ORDER_COLUMNS
            )
        );
    }

    #[test]
    fn test_mark_paid_update_repeats_precondition_and_skips_unchanged_rows() {
        let filter = OrderFilter::live()
            .with_id(Uuid::now_v7())
            .with_status(OrderStatus::Submit);
        let changes = OrderChanges {
            status: Some(OrderStatus::Paid),
            ..Default::default()
        };

        let qb = update_query(&filter, &changes).unwrap();
        assert_eq!(
            qb.sql(),
            "UPDATE orders SET updated_at = NOW(), status = $1 \
             WHERE TRUE AND id = $2 AND is_deleted = $3 AND status = $4 \
             AND (FALSE OR status IS DISTINCT FROM $5)"
        );
    }

    #[test]
    fn test_soft_delete_update_skips_already_deleted_rows() {
        let changes = OrderChanges {
            is_deleted: Some(true),
            ..Default::default()
        };

        let qb = update_query(&OrderFilter::by_id(Uuid::now_v7()), &changes).unwrap();
        assert_eq!(
            qb.sql(),
            "UPDATE orders SET updated_at = NOW(), is_deleted = $1 \
             WHERE TRUE AND id = $2 AND (FALSE OR is_deleted IS DISTINCT FROM $3)"
        );
    }

    #[test]
    fn test_empty_changes_build_no_update() {
        assert!(update_query(&OrderFilter::default(), &OrderChanges::default()).is_none());
    }
}
