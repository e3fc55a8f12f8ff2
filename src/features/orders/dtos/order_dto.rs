use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::features::orders::models::{Order, OrderItem, OrderStatus};

/// Query string of the order list screen
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct OrderListQuery {
    pub phone: Option<String>,
}

impl OrderListQuery {
    /// The raw search text, echoed back into the search box
    pub fn search_query(&self) -> &str {
        self.phone.as_deref().unwrap_or_default()
    }
}

/// Order as shown on the admin screens
#[derive(Debug, Clone, Serialize)]
pub struct OrderView {
    pub id: Uuid,
    pub customer_name: String,
    pub phone: String,
    pub email: Option<String>,
    pub address: String,
    pub note: Option<String>,
    pub total_amount: String,
    pub status: OrderStatus,
    pub status_label: &'static str,
    pub can_mark_paid: bool,
    pub created_at: String,
}

impl From<Order> for OrderView {
    fn from(o: Order) -> Self {
        Self {
            id: o.id,
            customer_name: o.customer_name,
            phone: o.phone,
            email: o.email,
            address: o.address,
            note: o.note,
            total_amount: format!("{:.2}", o.total_amount),
            status: o.status,
            status_label: o.status.label(),
            can_mark_paid: o.status == OrderStatus::Submit,
            created_at: o.created_at.format("%d/%m/%Y %H:%M").to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct OrderItemView {
    pub product_name: String,
    pub quantity: i32,
    pub unit_price: String,
    pub line_total: String,
}

impl From<OrderItem> for OrderItemView {
    fn from(item: OrderItem) -> Self {
        Self {
            line_total: format!("{:.2}", item.line_total()),
            unit_price: format!("{:.2}", item.unit_price),
            product_name: item.product_name,
            quantity: item.quantity,
        }
    }
}
