//! One-shot status messages carried across a redirect.
//!
//! A write handler answers with [`redirect`], which attaches the message to
//! the redirect as a `flash` cookie. The next page render reads it through the
//! [`Flash`] extractor and clears the cookie in its own response, so the
//! message is shown exactly once.

use std::convert::Infallible;

use axum::{
    extract::FromRequestParts,
    http::{request::Parts, HeaderMap},
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

pub const FLASH_COOKIE: &str = "flash";

/// Outcome message of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Added,
    Updated,
    Deleted,
    PaymentConfirmed,
    InvalidInput,
    Failed,
}

impl Notice {
    pub fn message(self) -> &'static str {
        match self {
            Notice::Added => "Added successfully",
            Notice::Updated => "Updated successfully",
            Notice::Deleted => "Deleted successfully",
            Notice::PaymentConfirmed => "Payment confirmed",
            Notice::InvalidInput => "Invalid input",
            Notice::Failed => "An error occurred",
        }
    }
}

fn flash_cookie(value: &'static str) -> Cookie<'static> {
    Cookie::build((FLASH_COOKIE, value))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}

/// Redirect to `to`, carrying `notice` to the next page render.
pub fn redirect(to: &str, notice: Notice) -> Response {
    let jar = CookieJar::new().add(flash_cookie(notice.message()));
    (jar, Redirect::to(to)).into_response()
}

/// Flash message pending for this request, if any
#[derive(Debug, Clone, Default)]
pub struct Flash {
    jar: CookieJar,
    message: Option<String>,
}

impl Flash {
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let jar = CookieJar::from_headers(headers);
        let message = jar
            .get(FLASH_COOKIE)
            .map(|cookie| cookie.value_trimmed().to_string())
            .filter(|value| !value.is_empty());

        Self { jar, message }
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn is_pending(&self) -> bool {
        self.message.is_some()
    }

    /// Cookie jar that expires the consumed flash cookie
    pub fn consume(&self) -> CookieJar {
        self.jar.clone().remove(flash_cookie(""))
    }
}

impl<S> FromRequestParts<S> for Flash
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from_headers(&parts.headers))
    }
}
