/**
 * Restaurant Handlers
 *
 * HTTP handlers for the `/restaurants` resource.
 *
 * # Endpoints
 *
 * - `GET /restaurants` - List all restaurants (public)
 * - `GET /restaurants/{id}` - Get one restaurant (public)
 * - `POST /restaurants` - Create a restaurant (authenticated)
 * - `PATCH /restaurants/{id}` - Partial update (authenticated)
 * - `DELETE /restaurants/{id}` - Delete, returning the deleted restaurant (authenticated)
 *
 * # Duplicates
 *
 * Email and street are unique. Writes check for an existing restaurant
 * first; the UNIQUE constraints catch anything that slips past the check
 * and map to the same `RestaurantAlreadyExists` error.
 *
 * # Ownership
 *
 * Once a restaurant has an owner, only that owner may update or delete it.
 * The owner check, duplicate checks and write share one transaction.
 */

use axum::{
    extract::{Path, State},
    response::Json,
};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::backend::error::conversion::unique_violation_column;
use crate::backend::error::BackendError;
use crate::backend::middleware::{parse_id, AuthUser, AuthenticatedUser, ValidatedJson};
use crate::backend::restaurants::db;
use crate::backend::restaurants::types::{
    CreateRestaurantRequest, Restaurant, UpdateRestaurantRequest,
};

/// List all restaurants
pub async fn list_restaurants(
    State(pool): State<SqlitePool>,
) -> Result<Json<Vec<Restaurant>>, BackendError> {
    let restaurants = db::list_restaurants(&pool).await.map_err(|e| {
        tracing::error!("Failed to list restaurants: {}", e);
        BackendError::Database(e)
    })?;

    tracing::debug!("Listed {} restaurants", restaurants.len());
    Ok(Json(restaurants))
}

/// Get a restaurant by id
///
/// # Errors
///
/// * `400 Bad Request` - If the id is not a UUID
/// * `404 Not Found` - If no restaurant has this id
pub async fn get_restaurant_by_id(
    State(pool): State<SqlitePool>,
    Path(id): Path<String>,
) -> Result<Json<Restaurant>, BackendError> {
    let id = parse_id(&id)?;

    let restaurant = db::get_restaurant_by_id(&pool, id)
        .await?
        .ok_or_else(|| BackendError::restaurant_not_found(id))?;

    Ok(Json(restaurant))
}

/// Create a restaurant with its address
///
/// # Example Request
///
/// ```http
/// POST /restaurants HTTP/1.1
/// Cookie: Authorization=eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...
/// Content-Type: application/json
///
/// {
///   "name": "Trattoria Roma",
///   "email": "hello@trattoria.example",
///   "phone": "555-0100",
///   "address": { "street": "1 Via Roma", "city": "Rome" }
/// }
/// ```
///
/// # Errors
///
/// * `400 Bad Request` - If the body fails validation
/// * `401 Unauthorized` - If the session cookie is missing or invalid
/// * `409 Conflict` - If the street or email is already used by a restaurant
pub async fn create_restaurant(
    State(pool): State<SqlitePool>,
    AuthUser(current): AuthUser,
    ValidatedJson(request): ValidatedJson<CreateRestaurantRequest>,
) -> Result<Json<Restaurant>, BackendError> {
    tracing::info!(
        "User {} creating restaurant {}",
        current.user.id,
        request.name
    );

    if db::find_restaurant_by_street(&pool, &request.address.street)
        .await?
        .is_some()
    {
        tracing::warn!("Restaurant address already taken: {}", request.address.street);
        return Err(BackendError::restaurant_exists("address", &request.address.street));
    }

    if db::find_restaurant_by_email(&pool, &request.email).await?.is_some() {
        tracing::warn!("Restaurant email already taken: {}", request.email);
        return Err(BackendError::restaurant_exists("email", &request.email));
    }

    let restaurant = db::create_restaurant(&pool, &request)
        .await
        .map_err(|e| conflict_or_database(e, request.address.street.as_str(), &request.email))?;

    tracing::info!("Restaurant created: {}", restaurant.id);
    Ok(Json(restaurant))
}

/// Partially update a restaurant
///
/// Only the fields present in the body change, address fields included.
///
/// # Errors
///
/// * `400 Bad Request` - If the id is not a UUID or the body fails validation
/// * `403 Forbidden` - If the restaurant is owned by another user
/// * `404 Not Found` - If no restaurant has this id
/// * `409 Conflict` - If the new street or email belongs to another restaurant
pub async fn update_restaurant(
    State(pool): State<SqlitePool>,
    AuthUser(current): AuthUser,
    Path(id): Path<String>,
    ValidatedJson(changes): ValidatedJson<UpdateRestaurantRequest>,
) -> Result<Json<Restaurant>, BackendError> {
    let id = parse_id(&id)?;
    let mut tx = pool.begin().await?;

    let existing = db::get_restaurant_by_id(&mut *tx, id)
        .await?
        .ok_or_else(|| BackendError::restaurant_not_found(id))?;
    ensure_owner(&existing, &current)?;

    if let Some(street) = changes.street() {
        if taken_by_other(db::find_restaurant_by_street(&mut *tx, street).await?, id) {
            tracing::warn!("Restaurant address already taken: {}", street);
            return Err(BackendError::restaurant_exists("address", street));
        }
    }

    if let Some(email) = changes.email.as_deref() {
        if taken_by_other(db::find_restaurant_by_email(&mut *tx, email).await?, id) {
            tracing::warn!("Restaurant email already taken: {}", email);
            return Err(BackendError::restaurant_exists("email", email));
        }
    }

    let restaurant = db::update_restaurant(&mut tx, id, &changes)
        .await
        .map_err(|e| {
            conflict_or_database(
                e,
                changes.street().unwrap_or_default(),
                changes.email.as_deref().unwrap_or_default(),
            )
        })?
        .ok_or_else(|| BackendError::restaurant_not_found(id))?;

    tx.commit().await.map_err(|e| {
        tracing::error!("Failed to commit restaurant update: {}", e);
        BackendError::Database(e)
    })?;

    tracing::info!("Restaurant {} updated by user {}", id, current.user.id);
    Ok(Json(restaurant))
}

/// Delete a restaurant and its address
///
/// The owning user, if any, loses its link to the restaurant and its owner role.
///
/// # Errors
///
/// * `400 Bad Request` - If the id is not a UUID
/// * `403 Forbidden` - If the restaurant is owned by another user
/// * `404 Not Found` - If no restaurant has this id
pub async fn delete_restaurant(
    State(pool): State<SqlitePool>,
    AuthUser(current): AuthUser,
    Path(id): Path<String>,
) -> Result<Json<Restaurant>, BackendError> {
    let id = parse_id(&id)?;
    let mut tx = pool.begin().await?;

    let existing = db::get_restaurant_by_id(&mut *tx, id)
        .await?
        .ok_or_else(|| BackendError::restaurant_not_found(id))?;
    ensure_owner(&existing, &current)?;

    let deleted = db::delete_restaurant(&mut tx, id)
        .await?
        .ok_or_else(|| BackendError::restaurant_not_found(id))?;

    tx.commit().await.map_err(|e| {
        tracing::error!("Failed to commit restaurant delete: {}", e);
        BackendError::Database(e)
    })?;

    tracing::info!("Restaurant {} deleted by user {}", id, current.user.id);
    Ok(Json(deleted))
}

fn ensure_owner(restaurant: &Restaurant, current: &AuthenticatedUser) -> Result<(), BackendError> {
    match restaurant.owner_id {
        Some(owner_id) if owner_id != current.user.id => {
            tracing::warn!(
                "User {} tried to modify restaurant {} owned by {}",
                current.user.id,
                restaurant.id,
                owner_id
            );
            Err(BackendError::NotAuthorized)
        }
        _ => Ok(()),
    }
}

fn taken_by_other(found: Option<Restaurant>, id: Uuid) -> bool {
    found.is_some_and(|restaurant| restaurant.id != id)
}

fn conflict_or_database(error: sqlx::Error, street: &str, email: &str) -> BackendError {
    match unique_violation_column(&error).as_deref() {
        Some("street") => BackendError::restaurant_exists("address", street),
        Some("email") => BackendError::restaurant_exists("email", email),
        _ => {
            tracing::error!("Failed to write restaurant: {}", error);
            BackendError::Database(error)
        }
    }
}
