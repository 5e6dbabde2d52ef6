//! Logout handler for POST /auth/logout
//!
//! Always succeeds and always clears the session cookie, whether or not the
//! caller was logged in.

use axum::http::{
    header::{HeaderName, SET_COOKIE},
    StatusCode,
};

use crate::backend::auth::cookies::cleared_session_cookie;

/// Logout handler
pub async fn logout() -> (StatusCode, [(HeaderName, String); 1]) {
    tracing::info!("Logout request");
    (StatusCode::OK, [(SET_COOKIE, cleared_session_cookie())])
}
