//! Session cookie helpers
//!
//! The session token travels in an HTTP-only cookie named `Authorization`:
//!
//! ```text
//! Authorization=<token>; HttpOnly; Max-Age=3600; Path=/
//! ```
//!
//! Logout overwrites it with an empty value and `Max-Age=0`.

use axum::http::HeaderMap;
use axum_extra::extract::cookie::CookieJar;

use crate::backend::auth::sessions::IssuedToken;

/// Name of the session cookie
pub const AUTH_COOKIE_NAME: &str = "Authorization";

/// `Set-Cookie` value carrying a freshly issued token
pub fn session_cookie(token: &IssuedToken) -> String {
    format!(
        "{}={}; HttpOnly; Max-Age={}; Path=/",
        AUTH_COOKIE_NAME, token.token, token.expires_in
    )
}

/// `Set-Cookie` value that makes the browser drop the session cookie
pub fn cleared_session_cookie() -> String {
    format!("{}=; HttpOnly; Max-Age=0; Path=/", AUTH_COOKIE_NAME)
}

/// Session token from the request's `Cookie` header, if present and non-empty
pub fn session_token(headers: &HeaderMap) -> Option<String> {
    CookieJar::from_headers(headers)
        .get(AUTH_COOKIE_NAME)
        .map(|cookie| cookie.value().to_string())
        .filter(|value| !value.is_empty())
}
