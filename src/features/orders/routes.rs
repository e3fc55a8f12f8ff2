use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::orders::handlers;
use crate::features::orders::services::OrderService;

/// Create routes for the order back-office screens
///
/// Note: every route expects the admin auth middleware to run first
pub fn routes(service: Arc<OrderService>) -> Router {
    Router::new()
        .route("/admin/order", get(handlers::index))
        .route("/admin/order/list", get(handlers::list_orders))
        .route("/admin/order/detail/{id}", get(handlers::order_detail))
        .route("/admin/order/pay/{id}", get(handlers::mark_paid))
        .route("/admin/order/delete/{id}", get(handlers::delete_order))
        .with_state(service)
}
