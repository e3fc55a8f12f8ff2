mod order_service;

pub use order_service::{DeleteOrderOutcome, MarkPaidOutcome, OrderService};
