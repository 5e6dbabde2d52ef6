/**
 * Login Handler
 *
 * This module implements the user authentication handler for POST /auth/login.
 *
 * # Authentication Process
 *
 * 1. Look up user by email
 * 2. Verify password using bcrypt
 * 3. Issue a session token
 * 4. Return the user and set the session cookie
 *
 * # Security
 *
 * - Unknown email and wrong password return the same 401 (no information leakage)
 * - User password hashes are never returned in responses
 */

use axum::{
    extract::State,
    http::header::{HeaderName, SET_COOKIE},
    response::Json,
};
use bcrypt::verify;

use crate::backend::auth::cookies::session_cookie;
use crate::backend::auth::handlers::types::{LoginRequest, UserResponse};
use crate::backend::auth::users::get_user_by_email;
use crate::backend::error::BackendError;
use crate::backend::middleware::ValidatedJson;
use crate::backend::server::state::AppState;

/// Login handler
///
/// # Errors
///
/// * `400 Bad Request` - If the body fails validation
/// * `401 Unauthorized` - If user is not found or password is incorrect
/// * `500 Internal Server Error` - If the database query or token generation fails
///
/// # Example Request
///
/// ```http
/// POST /auth/login HTTP/1.1
/// Content-Type: application/json
///
/// {
///   "email": "a@b.com",
///   "password": "secret123"
/// }
/// ```
pub async fn login(
    State(app_state): State<AppState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> Result<([(HeaderName, String); 1], Json<UserResponse>), BackendError> {
    tracing::info!("Login request for email: {}", request.email);

    let user = get_user_by_email(&app_state.db, &request.email)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Login for unknown email: {}", request.email);
            BackendError::WrongCredentials
        })?;

    let valid = verify(&request.password, &user.password_hash).map_err(|e| {
        tracing::error!("Password verification error: {:?}", e);
        BackendError::internal(format!("password verification failed: {}", e))
    })?;

    if !valid {
        tracing::warn!("Invalid password for user: {}", request.email);
        return Err(BackendError::WrongCredentials);
    }

    let token = app_state.tokens.issue(user.id).map_err(|e| {
        tracing::error!("Failed to issue token: {:?}", e);
        BackendError::internal(e.to_string())
    })?;

    tracing::info!("User logged in successfully: {}", user.email);

    Ok(([(SET_COOKIE, session_cookie(&token))], Json(UserResponse::from(user))))
}
