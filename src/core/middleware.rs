use crate::features::auth::model::AdminUser;
use axum::{
    body::Body,
    extract::{Request, State},
    http::{header, HeaderValue, StatusCode},
    middleware::Next,
    response::Response,
};
use base64::prelude::*;
use std::sync::Arc;
use subtle::ConstantTimeEq;
use tower_http::request_id::{MakeRequestId, RequestId};
use tracing::Span;
use uuid::Uuid;

/// Request ID generator using UUID v7 (time-ordered)
#[derive(Clone, Copy)]
pub struct MakeRequestUuid;

impl MakeRequestId for MakeRequestUuid {
    fn make_request_id<B>(&mut self, _request: &axum::http::Request<B>) -> Option<RequestId> {
        let id = Uuid::now_v7().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// Custom MakeSpan that includes request_id in the tracing span
#[derive(Clone, Debug)]
pub struct MakeSpanWithRequestId;

impl<B> tower_http::trace::MakeSpan<B> for MakeSpanWithRequestId {
    fn make_span(&mut self, request: &axum::http::Request<B>) -> Span {
        let request_id = request
            .headers()
            .get("x-request-id")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("-");

        tracing::info_span!(
            "request",
            method = %request.method(),
            uri = %request.uri(),
            request_id = %request_id,
        )
    }
}

/// Basic credentials accepted for the admin area
#[derive(Clone)]
pub struct AdminCredentials {
    username: Arc<str>,
    password: Arc<str>,
}

impl AdminCredentials {
    pub fn new(username: &str, password: &str) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Compare both fields in constant time, without short-circuiting
    fn accepts(&self, username: &str, password: &str) -> bool {
        let username_ok = username.as_bytes().ct_eq(self.username.as_bytes());
        let password_ok = password.as_bytes().ct_eq(self.password.as_bytes());
        bool::from(username_ok & password_ok)
    }
}

/// Decode a `Basic` authorization header into its username and password.
fn decode_basic(value: &str) -> Option<(String, String)> {
    let encoded = value.strip_prefix("Basic ")?;
    let decoded = BASE64_STANDARD.decode(encoded.trim()).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (username, password) = decoded.split_once(':')?;
    Some((username.to_string(), password.to_string()))
}

fn unauthorized() -> Response {
    let mut response = Response::new(Body::from("Unauthorized"));
    *response.status_mut() = StatusCode::UNAUTHORIZED;
    response.headers_mut().insert(
        header::WWW_AUTHENTICATE,
        HeaderValue::from_static("Basic realm=\"Shopfront Admin\""),
    );
    response
}

/// Require admin credentials before any back-office route runs.
///
/// On success the [`AdminUser`] is stored in the request extensions.
pub async fn admin_auth_middleware(
    State(expected): State<AdminCredentials>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let provided = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(decode_basic);

    let Some((username, password)) = provided else {
        return Err(unauthorized());
    };

    if !expected.accepts(&username, &password) {
        tracing::warn!("Rejected admin login attempt");
        return Err(unauthorized());
    }

    req.extensions_mut().insert(AdminUser { username });
    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{middleware::from_fn_with_state, routing::get, Router};
    use axum_test::TestServer;

    use crate::features::auth::guards::RequireAdmin;

    async fn whoami(RequireAdmin(admin): RequireAdmin) -> String {
        admin.username
    }

    fn server() -> TestServer {
        let credentials = AdminCredentials::new("admin", "s3cret");
        let app = Router::new()
            .route("/admin/whoami", get(whoami))
            .route_layer(from_fn_with_state(credentials, admin_auth_middleware));
        TestServer::new(app).unwrap()
    }

    fn basic(credentials: &str) -> HeaderValue {
        let value = format!("Basic {}", BASE64_STANDARD.encode(credentials));
        HeaderValue::from_str(&value).unwrap()
    }

    #[test]
    fn test_decode_basic() {
        let header = format!("Basic {}", BASE64_STANDARD.encode("admin:pw:with:colons"));
        assert_eq!(
            decode_basic(&header),
            Some(("admin".to_string(), "pw:with:colons".to_string()))
        );
        assert_eq!(decode_basic("Bearer abc"), None);
        assert_eq!(decode_basic("Basic !!!not-base64"), None);
        let no_colon = format!("Basic {}", BASE64_STANDARD.encode("admin"));
        assert_eq!(decode_basic(&no_colon), None);
    }

    #[test]
    fn test_credentials_need_both_fields_to_match() {
        let credentials = AdminCredentials::new("admin", "s3cret");
        assert!(credentials.accepts("admin", "s3cret"));
        assert!(!credentials.accepts("admin", "s3cre"));
        assert!(!credentials.accepts("root", "s3cret"));
        assert!(!credentials.accepts("admin:s3cret", ""));
    }

    #[tokio::test]
    async fn test_missing_credentials_are_challenged() {
        let response = server().get("/admin/whoami").await;
        response.assert_status(StatusCode::UNAUTHORIZED);
        assert!(response.headers().contains_key(header::WWW_AUTHENTICATE));
    }

    #[tokio::test]
    async fn test_wrong_password_is_rejected() {
        for credentials in ["admin:guess", "root:s3cret", "admin:s3cret2"] {
            let response = server()
                .get("/admin/whoami")
                .add_header(header::AUTHORIZATION, basic(credentials))
                .await;
            response.assert_status(StatusCode::UNAUTHORIZED);
        }
    }

    #[tokio::test]
    async fn test_valid_credentials_reach_handler() {
        let response = server()
            .get("/admin/whoami")
            .add_header(header::AUTHORIZATION, basic("admin:s3cret"))
            .await;
        response.assert_status_ok();
        response.assert_text("admin");
    }
}
