use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::categories::handlers;
use crate::features::categories::services::CategoryService;

/// Create routes for the category back-office screens
///
/// Note: every route expects the admin auth middleware to run first
pub fn routes(service: Arc<CategoryService>) -> Router {
    Router::new()
        .route("/admin/category", get(handlers::index))
        .route("/admin/category/list", get(handlers::list_categories))
        .route(
            "/admin/category/create",
            get(handlers::create_form).post(handlers::create_category),
        )
        .route(
            "/admin/category/edit/{id}",
            get(handlers::edit_form).post(handlers::update_category),
        )
        .route("/admin/category/delete/{id}", get(handlers::delete_category))
        .with_state(service)
}
