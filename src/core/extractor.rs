use axum::{
    extract::{rejection::FormRejection, FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
    response::{IntoResponse, Response},
    Form,
};
use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::core::error::AppError;

/// Form extractor that reports malformed bodies as a bad request page
pub struct AppForm<T>(pub T);

impl<T, S> FromRequest<S> for AppForm<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppFormRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Form::<T>::from_request(req, state).await {
            Ok(value) => Ok(Self(value.0)),
            Err(rejection) => Err(AppFormRejection(rejection)),
        }
    }
}

pub struct AppFormRejection(FormRejection);

impl IntoResponse for AppFormRejection {
    fn into_response(self) -> Response {
        let message = match self.0 {
            FormRejection::InvalidFormContentType(_) => {
                "Expected a form submission (application/x-www-form-urlencoded)".to_string()
            }
            FormRejection::FailedToDeserializeForm(err) => format!("Invalid form data: {}", err),
            FormRejection::FailedToDeserializeFormBody(err) => {
                format!("Invalid form data: {}", err)
            }
            _ => "Failed to read form body".to_string(),
        };

        AppError::BadRequest(message).into_response()
    }
}

/// The `{id}` path segment of a record route.
///
/// Holds `None` when the segment is not a UUID, which handlers treat the same
/// as an unknown record.
#[derive(Debug, Clone, Copy)]
pub struct RecordId(pub Option<Uuid>);

impl<S> FromRequestParts<S> for RecordId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;

        Ok(Self(Uuid::parse_str(raw.trim()).ok()))
    }
}
