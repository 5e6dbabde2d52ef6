//! Database operations for restaurants
//!
//! A restaurant row always has exactly one address row. Writes that touch
//! both run in one transaction. Update and delete take the caller's
//! connection so the ownership check and the write share a transaction.

use chrono::Utc;
use sqlx::{Sqlite, SqliteConnection, SqlitePool};
use uuid::Uuid;

use super::types::{
    CreateRestaurantRequest, Restaurant, RestaurantRow, UpdateRestaurantRequest,
};

const SELECT_RESTAURANT: &str = r#"
    SELECT r.id, r.name, r.email, r.phone, r.owner_id, r.created_at, r.updated_at,
           a.id AS address_id, a.street, a.city, a.region, a.postal_code
    FROM restaurants r
    JOIN addresses a ON a.id = r.address_id
"#;

/// List all restaurants, oldest first
pub async fn list_restaurants(pool: &SqlitePool) -> Result<Vec<Restaurant>, sqlx::Error> {
    let rows = sqlx::query_as::<_, RestaurantRow>(&format!(
        "{} ORDER BY r.created_at ASC",
        SELECT_RESTAURANT
    ))
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(Restaurant::from).collect())
}

/// Get restaurant by ID
pub async fn get_restaurant_by_id<'e, E>(executor: E, id: Uuid) -> Result<Option<Restaurant>, sqlx::Error>
where
    E: sqlx::Executor<'e, Database = Sqlite>,
{
    let row = sqlx::query_as::<_, RestaurantRow>(&format!("{} WHERE r.id = $1", SELECT_RESTAURANT))
        .bind(id)
        .fetch_optional(executor)
        .await?;

    Ok(row.map(Restaurant::from))
}

/// Find the restaurant using an email, if any
pub async fn find_restaurant_by_email<'e, E>(
    executor: E,
    email: &str,
) -> Result<Option<Restaurant>, sqlx::Error>
where
    E: sqlx::Executor<'e, Database = Sqlite>,
{
    let row = sqlx::query_as::<_, RestaurantRow>(&format!("{} WHERE r.email = $1", SELECT_RESTAURANT))
        .bind(email)
        .fetch_optional(executor)
        .await?;

    Ok(row.map(Restaurant::from))
}

/// Find the restaurant located at a street, if any
pub async fn find_restaurant_by_street<'e, E>(
    executor: E,
    street: &str,
) -> Result<Option<Restaurant>, sqlx::Error>
where
    E: sqlx::Executor<'e, Database = Sqlite>,
{
    let row = sqlx::query_as::<_, RestaurantRow>(&format!("{} WHERE a.street = $1", SELECT_RESTAURANT))
        .bind(street)
        .fetch_optional(executor)
        .await?;

    Ok(row.map(Restaurant::from))
}

/// Create a restaurant and its address
///
/// # Returns
/// The created restaurant, or the sqlx error (a UNIQUE violation on a
/// duplicate email or street)
pub async fn create_restaurant(
    pool: &SqlitePool,
    request: &CreateRestaurantRequest,
) -> Result<Restaurant, sqlx::Error> {
    let restaurant_id = Uuid::new_v4();
    let address_id = Uuid::new_v4();
    let now = Utc::now();

    let mut tx = pool.begin().await?;

    sqlx::query(
        r#"
        INSERT INTO addresses (id, street, city, region, postal_code)
        VALUES ($1, $2, $3, $4, $5)
        "#,
    )
    .bind(address_id)
    .bind(&request.address.street)
    .bind(&request.address.city)
    .bind(&request.address.region)
    .bind(&request.address.postal_code)
    .execute(&mut *tx)
    .await?;

    sqlx::query(
        r#"
        INSERT INTO restaurants (id, name, email, phone, address_id, owner_id, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, NULL, $6, $7)
        "#,
    )
    .bind(restaurant_id)
    .bind(&request.name)
    .bind(&request.email)
    .bind(&request.phone)
    .bind(address_id)
    .bind(now)
    .bind(now)
    .execute(&mut *tx)
    .await?;

    let restaurant = get_restaurant_by_id(&mut *tx, restaurant_id)
        .await?
        .ok_or(sqlx::Error::RowNotFound)?;

    tx.commit().await?;
    Ok(restaurant)
}

/// Apply a partial update to a restaurant and its address
///
/// Runs on the caller's connection, normally an open transaction.
///
/// # Returns
/// Updated restaurant or None if no restaurant has this id
pub async fn update_restaurant(
    conn: &mut SqliteConnection,
    id: Uuid,
    changes: &UpdateRestaurantRequest,
) -> Result<Option<Restaurant>, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE restaurants
        SET name = COALESCE($1, name),
            email = COALESCE($2, email),
            phone = COALESCE($3, phone),
            updated_at = $4
        WHERE id = $5
        "#,
    )
    .bind(&changes.name)
    .bind(&changes.email)
    .bind(&changes.phone)
    .bind(Utc::now())
    .bind(id)
    .execute(&mut *conn)
    .await?;

    if result.rows_affected() == 0 {
        return Ok(None);
    }

    if let Some(address) = &changes.address {
        sqlx::query(
            r#"
            UPDATE addresses
            SET street = COALESCE($1, street),
                city = COALESCE($2, city),
                region = COALESCE($3, region),
                postal_code = COALESCE($4, postal_code)
            WHERE id = (SELECT address_id FROM restaurants WHERE id = $5)
            "#,
        )
        .bind(&address.street)
        .bind(&address.city)
        .bind(&address.region)
        .bind(&address.postal_code)
        .bind(id)
        .execute(&mut *conn)
        .await?;
    }

    get_restaurant_by_id(&mut *conn, id).await
}

/// Set the owner of a restaurant inside an open transaction
///
/// # Returns
/// Updated restaurant or None if no restaurant has this id
pub async fn set_owner(
    conn: &mut SqliteConnection,
    id: Uuid,
    owner_id: Uuid,
) -> Result<Option<Restaurant>, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE restaurants
        SET owner_id = $1, updated_at = $2
        WHERE id = $3
        "#,
    )
    .bind(owner_id)
    .bind(Utc::now())
    .bind(id)
    .execute(&mut *conn)
    .await?;

    if result.rows_affected() == 0 {
        return Ok(None);
    }

    get_restaurant_by_id(&mut *conn, id).await
}

/// Drop `owner_id` from a restaurant, but only if `owner_id` still owns it
pub async fn release_owner(
    conn: &mut SqliteConnection,
    id: Uuid,
    owner_id: Uuid,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE restaurants
        SET owner_id = NULL, updated_at = $1
        WHERE id = $2 AND owner_id = $3
        "#,
    )
    .bind(Utc::now())
    .bind(id)
    .bind(owner_id)
    .execute(&mut *conn)
    .await?;

    Ok(result.rows_affected())
}

/// Delete a restaurant and its address
///
/// The owning user, if any, loses its `restaurant_id` and owner role.
/// Runs on the caller's connection, normally an open transaction.
///
/// # Returns
/// The deleted restaurant or None if no restaurant has this id
pub async fn delete_restaurant(
    conn: &mut SqliteConnection,
    id: Uuid,
) -> Result<Option<Restaurant>, sqlx::Error> {
    let Some(restaurant) = get_restaurant_by_id(&mut *conn, id).await? else {
        return Ok(None);
    };

    crate::backend::auth::users::clear_restaurant(&mut *conn, id).await?;

    sqlx::query("DELETE FROM restaurants WHERE id = $1")
        .bind(id)
        .execute(&mut *conn)
        .await?;

    sqlx::query("DELETE FROM addresses WHERE id = $1")
        .bind(restaurant.address.id)
        .execute(&mut *conn)
        .await?;

    Ok(Some(restaurant))
}
