/**
 * Role Upgrade Handler
 *
 * This module implements PATCH /auth/roleRequest/{id}, which changes the
 * role of the authenticated user.
 *
 * # Role Codes
 *
 * - `0` - regular user
 * - `1` - restaurant owner; requires `restaurantId`
 *
 * Becoming an owner links both sides in one transaction: the user gets
 * `restaurant_id` and the restaurant gets `owner_id`. A restaurant the user
 * owned before is released in the same transaction, so a user owns at most
 * one restaurant. Either all writes land or none do.
 *
 * # Authorization
 *
 * Users can only change their own role, and cannot claim a restaurant that
 * already belongs to someone else.
 */

use axum::{
    extract::{Path, State},
    response::Json,
};
use uuid::Uuid;

use crate::backend::auth::handlers::types::{RoleUpgradeRequest, RoleUpgradeResponse, UserResponse};
use crate::backend::auth::users::{get_user_by_id, update_role, UserRole};
use crate::backend::error::BackendError;
use crate::backend::middleware::{parse_id, AuthUser, ValidatedJson};
use crate::backend::restaurants::db::{get_restaurant_by_id, release_owner, set_owner};
use crate::backend::server::state::AppState;

/// Role upgrade handler
///
/// # Errors
///
/// * `400 Bad Request` - If the id is malformed, the role code is unknown, or
///   role 1 comes without `restaurantId`
/// * `401 Unauthorized` - If the session cookie is missing or invalid
/// * `403 Forbidden` - If the caller is not the target user, or the
///   restaurant belongs to another user
/// * `404 Not Found` - If the restaurant does not exist
/// * `500 Internal Server Error` - If a database write fails
///
/// # Example Request
///
/// ```http
/// PATCH /auth/roleRequest/123e4567-e89b-12d3-a456-426614174000 HTTP/1.1
/// Cookie: Authorization=eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...
/// Content-Type: application/json
///
/// {
///   "userRole": 1,
///   "restaurantId": "6f1c2a8e-0d5b-4c1e-9f5e-2b7a1d3c4e5f"
/// }
/// ```
pub async fn upgrade_role(
    State(app_state): State<AppState>,
    AuthUser(current): AuthUser,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<RoleUpgradeRequest>,
) -> Result<Json<RoleUpgradeResponse>, BackendError> {
    let user_id = parse_id(&id)?;

    if user_id != current.user.id {
        tracing::warn!(
            "User {} tried to change the role of user {}",
            current.user.id,
            user_id
        );
        return Err(BackendError::NotAuthorized);
    }

    let role = request
        .user_role
        .value()
        .and_then(UserRole::from_code)
        .ok_or_else(|| {
            tracing::warn!("Unknown role code: {:?}", request.user_role);
            BackendError::validation("userRole must be 0 (regular) or 1 (owner)")
        })?;

    tracing::info!("Role change for user {} to {:?}", user_id, role);

    let response = match role {
        UserRole::Owner => {
            let restaurant_id = request.restaurant_id.ok_or_else(|| {
                tracing::warn!("Owner role requested without restaurantId");
                BackendError::validation("restaurantId is required for the owner role")
            })?;
            become_owner(&app_state, user_id, restaurant_id).await?
        }
        UserRole::Regular => {
            let user = update_role(&app_state.db, user_id, role, None)
                .await?
                .ok_or_else(|| BackendError::internal(format!("user {} vanished", user_id)))?;

            RoleUpgradeResponse {
                user: UserResponse::from(user),
                restaurant: None,
            }
        }
    };

    tracing::info!("Role changed for user {}", user_id);
    Ok(Json(response))
}

async fn become_owner(
    app_state: &AppState,
    user_id: Uuid,
    restaurant_id: Uuid,
) -> Result<RoleUpgradeResponse, BackendError> {
    let mut tx = app_state.db.begin().await?;

    let restaurant = get_restaurant_by_id(&mut *tx, restaurant_id)
        .await?
        .ok_or_else(|| BackendError::restaurant_not_found(restaurant_id))?;

    if let Some(owner_id) = restaurant.owner_id {
        if owner_id != user_id {
            tracing::warn!(
                "User {} tried to claim restaurant {} owned by {}",
                user_id,
                restaurant_id,
                owner_id
            );
            return Err(BackendError::NotAuthorized);
        }
    }

    let previous = get_user_by_id(&mut *tx, user_id)
        .await?
        .and_then(|user| user.restaurant_id)
        .filter(|previous| *previous != restaurant_id);

    if let Some(previous) = previous {
        tracing::info!(
            "User {} moves from restaurant {} to {}",
            user_id,
            previous,
            restaurant_id
        );
        release_owner(&mut tx, previous, user_id).await?;
    }

    let user = update_role(&mut *tx, user_id, UserRole::Owner, Some(restaurant_id))
        .await?
        .ok_or_else(|| BackendError::internal(format!("user {} vanished", user_id)))?;

    let restaurant = set_owner(&mut tx, restaurant_id, user_id)
        .await?
        .ok_or_else(|| BackendError::restaurant_not_found(restaurant_id))?;

    tx.commit().await.map_err(|e| {
        tracing::error!("Failed to commit role upgrade: {}", e);
        BackendError::Database(e)
    })?;

    Ok(RoleUpgradeResponse {
        user: UserResponse::from(user),
        restaurant: Some(restaurant),
    })
}
