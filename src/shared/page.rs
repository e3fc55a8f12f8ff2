use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use minijinja::{context, Value};

use crate::core::error::Result;
use crate::shared::flash::Flash;
use crate::shared::templates;

/// Render an admin page, consuming the pending flash message.
///
/// The flash message is exposed to the template as `flash`.
pub fn render(status: StatusCode, template: &str, ctx: Value, flash: &Flash) -> Result<Response> {
    let body = templates::render(
        template,
        context! {
            flash => flash.message(),
            ..ctx
        },
    )?;

    if flash.is_pending() {
        Ok((status, flash.consume(), Html(body)).into_response())
    } else {
        Ok((status, Html(body)).into_response())
    }
}
