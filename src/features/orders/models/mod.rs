mod order;

pub use order::{Order, OrderChanges, OrderFilter, OrderItem, OrderStatus};
#[cfg(test)]
pub use order::{CreateOrder, CreateOrderItem};
