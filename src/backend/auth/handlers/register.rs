/**
 * Register Handler
 *
 * This module implements the user registration handler for POST /auth/register.
 *
 * # Registration Process
 *
 * 1. Validate email format, password length and optional name
 * 2. Check if user already exists
 * 3. Hash password using bcrypt
 * 4. Create user in database
 * 5. Issue a session token
 * 6. Return the user and set the session cookie
 *
 * # Security
 *
 * - Passwords are hashed using bcrypt with the configured cost
 * - Password hashes are never returned in responses
 * - Session tokens expire after one hour
 */

use axum::{
    extract::State,
    http::header::{HeaderName, SET_COOKIE},
    response::Json,
};
use bcrypt::hash;

use crate::backend::auth::cookies::session_cookie;
use crate::backend::auth::handlers::types::{RegisterRequest, UserResponse};
use crate::backend::auth::users::{create_user, get_user_by_email};
use crate::backend::error::conversion::is_unique_violation;
use crate::backend::error::BackendError;
use crate::backend::middleware::ValidatedJson;
use crate::backend::server::state::AppState;

/// Register handler
///
/// This handler processes user registration requests. It creates a new user
/// account and logs it in straight away by setting the session cookie.
///
/// # Errors
///
/// * `400 Bad Request` - If email format is invalid or password is too short
/// * `409 Conflict` - If user with this email already exists
/// * `500 Internal Server Error` - If password hashing, user creation, or token generation fails
///
/// # Example Request
///
/// ```http
/// POST /auth/register HTTP/1.1
/// Content-Type: application/json
///
/// {
///   "email": "a@b.com",
///   "password": "secret123"
/// }
/// ```
///
/// # Example Response
///
/// ```http
/// HTTP/1.1 200 OK
/// Set-Cookie: Authorization=eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...; HttpOnly; Max-Age=3600; Path=/
///
/// {
///   "id": "123e4567-e89b-12d3-a456-426614174000",
///   "name": null,
///   "email": "a@b.com",
///   "role": "regular",
///   "restaurant_id": null,
///   ...
/// }
/// ```
pub async fn register(
    State(app_state): State<AppState>,
    ValidatedJson(request): ValidatedJson<RegisterRequest>,
) -> Result<([(HeaderName, String); 1], Json<UserResponse>), BackendError> {
    tracing::info!("Register request for email: {}", request.email);

    if get_user_by_email(&app_state.db, &request.email).await?.is_some() {
        tracing::warn!("Email already exists: {}", request.email);
        return Err(BackendError::UserWithThatEmailAlreadyExists {
            email: request.email,
        });
    }

    let password_hash = hash(&request.password, app_state.config.bcrypt_cost).map_err(|e| {
        tracing::error!("Failed to hash password: {:?}", e);
        BackendError::internal(format!("password hashing failed: {}", e))
    })?;

    let user = create_user(&app_state.db, request.name, request.email.clone(), password_hash)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                tracing::warn!("Email registered concurrently: {}", request.email);
                BackendError::UserWithThatEmailAlreadyExists {
                    email: request.email.clone(),
                }
            } else {
                tracing::error!("Failed to create user: {:?}", e);
                BackendError::Database(e)
            }
        })?;

    let token = app_state.tokens.issue(user.id).map_err(|e| {
        tracing::error!("Failed to issue token: {:?}", e);
        BackendError::internal(e.to_string())
    })?;

    tracing::info!("User registered successfully: {} ({})", user.id, user.email);

    Ok(([(SET_COOKIE, session_cookie(&token))], Json(UserResponse::from(user))))
}
