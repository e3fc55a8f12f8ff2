//! Record store port for orders and its adapters.

use async_trait::async_trait;
use uuid::Uuid;

use crate::core::error::Result;
use crate::features::orders::models::{Order, OrderChanges, OrderFilter, OrderItem};

mod pg_order_store;
pub use pg_order_store::PgOrderStore;

#[cfg(test)]
mod memory_order_store;
#[cfg(test)]
pub use memory_order_store::InMemoryOrderStore;

/// Persistence operations the order lifecycle relies on.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// All orders matching `filter`, in store order.
    async fn find(&self, filter: &OrderFilter) -> Result<Vec<Order>>;

    /// First order matching `filter`.
    async fn find_one(&self, filter: &OrderFilter) -> Result<Option<Order>>;

    /// Apply `changes` to every order matching `filter`.
    ///
    /// Returns how many records actually changed. The filter is evaluated
    /// in the same step as the write, so it can carry a precondition.
    async fn update(&self, filter: &OrderFilter, changes: &OrderChanges) -> Result<u64>;

    /// Lines of an order, in insertion order.
    async fn find_items(&self, order_id: Uuid) -> Result<Vec<OrderItem>>;
}
