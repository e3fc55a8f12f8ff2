use std::sync::Arc;

use uuid::Uuid;

use crate::core::error::Result;
use crate::features::orders::models::{Order, OrderChanges, OrderFilter, OrderItem, OrderStatus};
use crate::features::orders::repositories::OrderStore;

/// An order together with its lines
#[derive(Debug, Clone)]
pub struct OrderDetail {
    pub order: Order,
    pub items: Vec<OrderItem>,
}

#[derive(Debug, PartialEq, Eq)]
pub enum MarkPaidOutcome {
    Paid,
    /// Unknown, deleted, or not awaiting payment
    InvalidInput,
}

#[derive(Debug, PartialEq, Eq)]
pub enum DeleteOrderOutcome {
    Deleted,
    NotFound,
    /// The record exists but the write changed nothing
    Failed,
}

/// Service for the order back-office: search, detail, payment, soft delete
pub struct OrderService {
    store: Arc<dyn OrderStore>,
}

impl OrderService {
    pub fn new(store: Arc<dyn OrderStore>) -> Self {
        Self { store }
    }

    /// List live orders, optionally restricted to an exact phone number.
    ///
    /// A blank filter is the same as no filter.
    pub async fn list(&self, phone: Option<&str>) -> Result<Vec<Order>> {
        let mut filter = OrderFilter::live();
        if let Some(phone) = phone.map(str::trim).filter(|p| !p.is_empty()) {
            filter = filter.with_phone(phone);
        }
        self.store.find(&filter).await
    }

    /// Get a live order with its lines
    pub async fn get_detail(&self, id: Uuid) -> Result<Option<OrderDetail>> {
        let Some(order) = self.store.find_one(&OrderFilter::live().with_id(id)).await? else {
            return Ok(None);
        };
        let items = self.store.find_items(order.id).await?;
        Ok(Some(OrderDetail { order, items }))
    }

    /// Move a live order from `submit` to `paid`
    pub async fn mark_paid(&self, id: Uuid) -> Result<MarkPaidOutcome> {
        let awaiting_payment = OrderFilter::live()
            .with_id(id)
            .with_status(OrderStatus::Submit);

        let Some(order) = self.store.find_one(&awaiting_payment).await? else {
            tracing::warn!(order_id = %id, "Payment rejected: order is not awaiting payment");
            return Ok(MarkPaidOutcome::InvalidInput);
        };

        let changes = OrderChanges {
            status: Some(OrderStatus::Paid),
            ..Default::default()
        };
        let modified = self
            .store
            .update(&awaiting_payment.with_id(order.id), &changes)
            .await?;

        if modified == 0 {
            tracing::warn!(order_id = %order.id, "Payment rejected: order changed before update");
            return Ok(MarkPaidOutcome::InvalidInput);
        }

        tracing::info!(order_id = %order.id, "Order marked paid");
        Ok(MarkPaidOutcome::Paid)
    }

    /// Soft delete an order whatever its status or delete flag
    pub async fn soft_delete(&self, id: Uuid) -> Result<DeleteOrderOutcome> {
        let Some(order) = self.store.find_one(&OrderFilter::by_id(id)).await? else {
            return Ok(DeleteOrderOutcome::NotFound);
        };

        let changes = OrderChanges {
            is_deleted: Some(true),
            ..Default::default()
        };
        let modified = self
            .store
            .update(&OrderFilter::by_id(order.id), &changes)
            .await?;

        if modified == 0 {
            tracing::warn!(order_id = %order.id, "Order delete modified nothing");
            return Ok(DeleteOrderOutcome::Failed);
        }

        tracing::info!(order_id = %order.id, status = %order.status, "Order soft deleted");
        Ok(DeleteOrderOutcome::Deleted)
    }
}
