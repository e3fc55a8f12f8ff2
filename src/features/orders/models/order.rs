use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use uuid::Uuid;

/// Order status enum matching database enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type)]
#[sqlx(type_name = "order_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Submit,
    Paid,
    Shipping,
    Completed,
    Cancelled,
}

impl OrderStatus {
    /// Human readable label for the admin screens
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Submit => "Awaiting payment",
            OrderStatus::Paid => "Paid",
            OrderStatus::Shipping => "Shipping",
            OrderStatus::Completed => "Completed",
            OrderStatus::Cancelled => "Cancelled",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderStatus::Submit => write!(f, "submit"),
            OrderStatus::Paid => write!(f, "paid"),
            OrderStatus::Shipping => write!(f, "shipping"),
            OrderStatus::Completed => write!(f, "completed"),
            OrderStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// Database model for order
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Order {
    pub id: Uuid,
    pub customer_name: String,
    pub phone: String,
    pub email: Option<String>,
    pub address: String,
    pub note: Option<String>,
    pub total_amount: Decimal,
    pub status: OrderStatus,
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Database model for an order line
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct OrderItem {
    pub id: Uuid,
    pub order_id: Uuid,
    pub product_name: String,
    pub quantity: i32,
    pub unit_price: Decimal,
}

impl OrderItem {
    pub fn line_total(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }
}

/// Data for seeding an order in tests
#[cfg(test)]
#[derive(Debug, Clone)]
pub struct CreateOrder {
    pub customer_name: String,
    pub phone: String,
    pub email: Option<String>,
    pub address: String,
    pub note: Option<String>,
    pub items: Vec<CreateOrderItem>,
}

#[cfg(test)]
impl CreateOrder {
    pub fn total_amount(&self) -> Decimal {
        self.items
            .iter()
            .map(|i| i.unit_price * Decimal::from(i.quantity))
            .sum()
    }
}

#[cfg(test)]
#[derive(Debug, Clone)]
pub struct CreateOrderItem {
    pub product_name: String,
    pub quantity: i32,
    pub unit_price: Decimal,
}

/// Partial update of an order; `None` leaves the column untouched
#[derive(Debug, Clone, Copy, Default)]
pub struct OrderChanges {
    pub status: Option<OrderStatus>,
    pub is_deleted: Option<bool>,
}

impl OrderChanges {
    pub fn is_empty(&self) -> bool {
        self.status.is_none() && self.is_deleted.is_none()
    }

    /// Whether applying these changes to `order` would alter any stored value
    #[cfg(test)]
    pub fn alters(&self, order: &Order) -> bool {
        self.status.is_some_and(|s| s != order.status)
            || self.is_deleted.is_some_and(|d| d != order.is_deleted)
    }
}

/// Equality filter over order columns; unset fields match anything
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderFilter {
    pub id: Option<Uuid>,
    pub is_deleted: Option<bool>,
    pub status: Option<OrderStatus>,
    pub phone: Option<String>,
}

impl OrderFilter {
    /// Orders that have not been soft deleted
    pub fn live() -> Self {
        Self {
            is_deleted: Some(false),
            ..Default::default()
        }
    }

    /// Match on id alone, whatever the status or delete flag
    pub fn by_id(id: Uuid) -> Self {
        Self {
            id: Some(id),
            ..Default::default()
        }
    }

    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_status(mut self, status: OrderStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    #[cfg(test)]
    pub fn matches(&self, order: &Order) -> bool {
        self.id.is_none_or(|id| id == order.id)
            && self.is_deleted.is_none_or(|d| d == order.is_deleted)
            && self.status.is_none_or(|s| s == order.status)
            && self.phone.as_ref().is_none_or(|p| *p == order.phone)
    }
}
