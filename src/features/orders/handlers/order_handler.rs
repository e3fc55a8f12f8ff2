use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Redirect, Response},
};
use minijinja::context;

use crate::core::error::Result;
use crate::core::extractor::RecordId;
use crate::features::auth::guards::RequireAdmin;
use crate::features::orders::dtos::{OrderItemView, OrderListQuery, OrderView};
use crate::features::orders::services::{DeleteOrderOutcome, MarkPaidOutcome, OrderService};
use crate::shared::constants::{order_detail_path, ORDER_LIST_PATH};
use crate::shared::flash::{self, Flash, Notice};
use crate::shared::page;

pub async fn index(RequireAdmin(_admin): RequireAdmin) -> Redirect {
    Redirect::to(ORDER_LIST_PATH)
}

/// List live orders, optionally searched by phone
pub async fn list_orders(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<OrderService>>,
    Query(query): Query<OrderListQuery>,
    flash: Flash,
) -> Result<Response> {
    let orders: Vec<OrderView> = service
        .list(query.phone.as_deref())
        .await?
        .into_iter()
        .map(OrderView::from)
        .collect();

    page::render(
        StatusCode::OK,
        "admin/order/list.html",
        context! { orders, search_query => query.search_query() },
        &flash,
    )
}

/// Show one live order with its lines
pub async fn order_detail(
    RequireAdmin(_admin): RequireAdmin,
    State(service): State<Arc<OrderService>>,
    RecordId(id): RecordId,
    flash: Flash,
) -> Result<Response> {
    let detail = match id {
        Some(id) => service.get_detail(id).await?,
        None => None,
    };
    let Some(detail) = detail else {
        return Ok(flash::redirect(ORDER_LIST_PATH, Notice::InvalidInput));
    };

    let items: Vec<OrderItemView> = detail.items.into_iter().map(OrderItemView::from).collect();

    page::render(
        StatusCode::OK,
        "admin/order/detail.html",
        context! { order => OrderView::from(detail.order), items },
        &flash,
    )
}

/// Confirm payment of an order awaiting it, then show its detail
pub async fn mark_paid(
    RequireAdmin(admin): RequireAdmin,
    State(service): State<Arc<OrderService>>,
    RecordId(id): RecordId,
) -> Result<Response> {
    let Some(id) = id else {
        return Ok(flash::redirect(ORDER_LIST_PATH, Notice::InvalidInput));
    };

    let notice = match service.mark_paid(id).await? {
        MarkPaidOutcome::Paid => {
            tracing::info!(admin = %admin.username, order_id = %id, "Payment confirmed");
            Notice::PaymentConfirmed
        }
        MarkPaidOutcome::InvalidInput => Notice::InvalidInput,
    };

    Ok(flash::redirect(&order_detail_path(&id.to_string()), notice))
}

/// Soft delete an order and go back to the list
pub async fn delete_order(
    RequireAdmin(admin): RequireAdmin,
    State(service): State<Arc<OrderService>>,
    RecordId(id): RecordId,
) -> Result<Response> {
    let outcome = match id {
        Some(id) => service.soft_delete(id).await?,
        None => DeleteOrderOutcome::NotFound,
    };

    let notice = match outcome {
        DeleteOrderOutcome::Deleted => {
            tracing::info!(admin = %admin.username, order_id = ?id, "Order deleted");
            Notice::Deleted
        }
        DeleteOrderOutcome::NotFound => Notice::InvalidInput,
        DeleteOrderOutcome::Failed => {
            tracing::error!(admin = %admin.username, order_id = ?id, "Order delete failed");
            Notice::Failed
        }
    };

    Ok(flash::redirect(ORDER_LIST_PATH, notice))
}
