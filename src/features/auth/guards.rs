//! Authorization guard for back-office handlers.

use crate::core::error::AppError;
use crate::features::auth::model::AdminUser;
use axum::{extract::FromRequestParts, http::request::Parts};

/// Guard for handlers behind the admin auth middleware.
///
/// # Example
/// ```ignore
/// pub async fn handler(RequireAdmin(admin): RequireAdmin) { ... }
/// ```
pub struct RequireAdmin(pub AdminUser);

impl<S> FromRequestParts<S> for RequireAdmin
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AdminUser>()
            .cloned()
            .map(RequireAdmin)
            .ok_or_else(|| AppError::Unauthorized("Admin authentication required".to_string()))
    }
}
