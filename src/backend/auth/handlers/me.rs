/**
 * Get Current User Handler
 *
 * This module implements the handler for GET /auth/me, which returns
 * information about the currently authenticated user.
 *
 * # Authentication
 *
 * The route sits behind the auth middleware, which has already verified
 * the session cookie and loaded the user.
 */

use axum::response::Json;

use crate::backend::auth::handlers::types::UserResponse;
use crate::backend::middleware::AuthUser;

/// Get current user handler
///
/// # Example Response
///
/// ```json
/// {
///   "id": "123e4567-e89b-12d3-a456-426614174000",
///   "name": null,
///   "email": "a@b.com",
///   "role": "owner",
///   "restaurant_id": "6f1c2a8e-0d5b-4c1e-9f5e-2b7a1d3c4e5f",
///   "created_at": "2025-01-01T12:00:00Z",
///   "updated_at": "2025-01-01T12:05:00Z"
/// }
/// ```
pub async fn get_me(AuthUser(current): AuthUser) -> Json<UserResponse> {
    tracing::debug!("Current user requested: {}", current.user.id);
    Json(UserResponse::from(current.user))
}
