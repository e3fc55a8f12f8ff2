use crate::features::auth::model::AdminUser;

use axum::{
    extract::Request,
    http::{header, HeaderValue},
    middleware::Next,
    response::Response,
    Router,
};

pub fn create_admin_user() -> AdminUser {
    AdminUser {
        username: "test-admin".to_string(),
    }
}

async fn inject_admin_middleware(mut request: Request, next: Next) -> Response {
    request.extensions_mut().insert(create_admin_user());
    next.run(request).await
}

/// Wrap `router` so every request arrives as an authenticated admin
pub fn with_admin_auth(router: Router) -> Router {
    router.layer(axum::middleware::from_fn(inject_admin_middleware))
}

/// The `flash=...` pair set by a redirect, ready to send back as a `Cookie` header
pub fn flash_cookie(response: &axum_test::TestResponse) -> HeaderValue {
    let set_cookie = response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .find(|v| v.starts_with("flash="))
        .expect("response should set a flash cookie");

    let pair = set_cookie.split(';').next().unwrap_or_default();
    HeaderValue::from_str(pair).unwrap()
}

/// Location header of a redirect response
pub fn location(response: &axum_test::TestResponse) -> String {
    response
        .headers()
        .get(header::LOCATION)
        .expect("response should redirect")
        .to_str()
        .unwrap()
        .to_string()
}
