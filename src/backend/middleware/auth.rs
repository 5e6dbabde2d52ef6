/**
 * Authentication Middleware
 *
 * This module protects routes that require a logged-in user. It reads the
 * session token from the `Authorization` cookie, verifies it, loads the
 * user it names and hands that user to the handler as a typed value.
 *
 * # Outcomes
 *
 * - no cookie → `AuthenticationTokenMissing`
 * - token fails verification → `WrongAuthenticationToken`
 * - token names a user that no longer exists → `WrongAuthenticationToken`
 * - otherwise the request continues with an `AuthenticatedUser` extension
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};

use crate::backend::auth::cookies::session_token;
use crate::backend::auth::users::{get_user_by_id, User};
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;

/// User loaded by the auth middleware for the current request
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub user: User,
}

/// Authentication middleware
///
/// This middleware:
/// 1. Extracts the session token from the `Authorization` cookie
/// 2. Verifies the token
/// 3. Loads the user named by the token
/// 4. Attaches the user to request extensions for use in handlers
pub async fn auth_middleware(
    State(app_state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    let token = session_token(request.headers()).ok_or_else(|| {
        tracing::warn!("Missing session cookie on {}", request.uri().path());
        BackendError::AuthenticationTokenMissing
    })?;

    let user_id = app_state.tokens.verify(&token).map_err(|e| {
        tracing::warn!("Invalid session token: {}", e);
        BackendError::WrongAuthenticationToken
    })?;

    let user = get_user_by_id(&app_state.db, user_id)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Session token names unknown user: {}", user_id);
            BackendError::WrongAuthenticationToken
        })?;

    tracing::debug!("Authenticated request for user {}", user.id);
    request.extensions_mut().insert(AuthenticatedUser { user });

    Ok(next.run(request).await)
}

/// Axum extractor for the authenticated user
///
/// Only valid on routes behind [`auth_middleware`]; elsewhere it rejects
/// with `AuthenticationTokenMissing`.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                BackendError::AuthenticationTokenMissing
            })?;

        Ok(AuthUser(user))
    }
}
