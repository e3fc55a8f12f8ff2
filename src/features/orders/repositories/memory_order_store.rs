use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::core::error::Result;
use crate::features::orders::models::{
    CreateOrder, Order, OrderChanges, OrderFilter, OrderItem, OrderStatus,
};

use super::OrderStore;

/// Order store held in memory, in insertion order
#[derive(Default)]
pub struct InMemoryOrderStore {
    orders: RwLock<Vec<Order>>,
    items: RwLock<HashMap<Uuid, Vec<OrderItem>>>,
}

impl InMemoryOrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get(&self, id: Uuid) -> Option<Order> {
        self.orders.read().await.iter().find(|o| o.id == id).cloned()
    }

    /// Insert a live order in `submit` status together with its lines
    pub async fn create(&self, data: &CreateOrder) -> Order {
        let now = Utc::now();
        let order = Order {
            id: Uuid::now_v7(),
            customer_name: data.customer_name.clone(),
            phone: data.phone.clone(),
            email: data.email.clone(),
            address: data.address.clone(),
            note: data.note.clone(),
            total_amount: data.total_amount(),
            status: OrderStatus::Submit,
            is_deleted: false,
            created_at: now,
            updated_at: now,
        };

        let items = data
            .items
            .iter()
            .map(|item| OrderItem {
                id: Uuid::now_v7(),
                order_id: order.id,
                product_name: item.product_name.clone(),
                quantity: item.quantity,
                unit_price: item.unit_price,
            })
            .collect();

        self.items.write().await.insert(order.id, items);
        self.orders.write().await.push(order.clone());
        order
    }

    /// Overwrite the stored status, bypassing the lifecycle rules
    pub async fn force_status(&self, id: Uuid, status: OrderStatus) {
        if let Some(order) = self.orders.write().await.iter_mut().find(|o| o.id == id) {
            order.status = status;
        }
    }
}

#[async_trait]
impl OrderStore for InMemoryOrderStore {
    async fn find(&self, filter: &OrderFilter) -> Result<Vec<Order>> {
        let orders = self.orders.read().await;
        Ok(orders.iter().filter(|o| filter.matches(o)).cloned().collect())
    }

    async fn find_one(&self, filter: &OrderFilter) -> Result<Option<Order>> {
        let orders = self.orders.read().await;
        Ok(orders.iter().find(|o| filter.matches(o)).cloned())
    }

    async fn update(&self, filter: &OrderFilter, changes: &OrderChanges) -> Result<u64> {
        let mut orders = self.orders.write().await;
        let mut modified = 0;
        for order in orders
            .iter_mut()
            .filter(|o| filter.matches(o) && changes.alters(o))
        {
            if let Some(status) = changes.status {
                order.status = status;
            }
            if let Some(is_deleted) = changes.is_deleted {
                order.is_deleted = is_deleted;
            }
            order.updated_at = Utc::now();
            modified += 1;
        }
        Ok(modified)
    }

    async fn find_items(&self, order_id: Uuid) -> Result<Vec<OrderItem>> {
        Ok(self
            .items
            .read()
            .await
            .get(&order_id)
            .cloned()
            .unwrap_or_default())
    }
}
