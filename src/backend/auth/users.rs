/**
 * User Model and Database Operations
 *
 * This module is the credential store: user records with their bcrypt
 * password hash and role, and the queries the auth flow needs.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{Sqlite, SqlitePool};
use uuid::Uuid;

/// Role of a user account
///
/// Stored as an integer; the role-upgrade payload uses the same codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[repr(i64)]
pub enum UserRole {
    /// Ordinary customer account
    Regular = 0,
    /// Owner of a restaurant
    Owner = 1,
}

impl UserRole {
    /// Map a numeric role code to a role
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Self::Regular),
            1 => Some(Self::Owner),
            _ => None,
        }
    }

    /// Numeric code of this role
    pub fn code(self) -> i64 {
        self as i64
    }
}

/// User struct representing a user in the database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (UUID)
    pub id: Uuid,
    /// Display name (optional)
    pub name: Option<String>,
    /// User email address (unique)
    pub email: String,
    /// Hashed password (bcrypt)
    pub password_hash: String,
    /// Account role
    pub role: UserRole,
    /// Restaurant owned by this user, set by a role upgrade
    pub restaurant_id: Option<Uuid>,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
    /// Updated at timestamp
    pub updated_at: DateTime<Utc>,
}

/// Create a new user
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `name` - Optional display name
/// * `email` - User email
/// * `password_hash` - Hashed password
///
/// # Returns
/// Created user, or the sqlx error (a UNIQUE violation if the email is taken)
pub async fn create_user(
    pool: &SqlitePool,
    name: Option<String>,
    email: String,
    password_hash: String,
) -> Result<User, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let user = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (id, name, email, password_hash, role, restaurant_id, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, NULL, $6, $7)
        RETURNING id, name, email, password_hash, role, restaurant_id, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(&name)
    .bind(&email)
    .bind(&password_hash)
    .bind(UserRole::Regular)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(user)
}

/// Get user by email
///
/// # Returns
/// User or None if not found
pub async fn get_user_by_email(pool: &SqlitePool, email: &str) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, name, email, password_hash, role, restaurant_id, created_at, updated_at
        FROM users
        WHERE email = $1
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Get user by ID
///
/// # Returns
/// User or None if not found
pub async fn get_user_by_id<'e, E>(executor: E, id: Uuid) -> Result<Option<User>, sqlx::Error>
where
    E: sqlx::Executor<'e, Database = Sqlite>,
{
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, name, email, password_hash, role, restaurant_id, created_at, updated_at
        FROM users
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(executor)
    .await?;

    Ok(user)
}

/// Update a user's role
///
/// `restaurant_id` is only written when given; `None` keeps the current
/// value so a role change never silently detaches a restaurant.
///
/// # Returns
/// Updated user or None if no user has this id
pub async fn update_role<'e, E>(
    executor: E,
    user_id: Uuid,
    role: UserRole,
    restaurant_id: Option<Uuid>,
) -> Result<Option<User>, sqlx::Error>
where
    E: sqlx::Executor<'e, Database = Sqlite>,
{
    let now = Utc::now();

    let user = sqlx::query_as::<_, User>(
        r#"
        UPDATE users
        SET role = $1, restaurant_id = COALESCE($2, restaurant_id), updated_at = $3
        WHERE id = $4
        RETURNING id, name, email, password_hash, role, restaurant_id, created_at, updated_at
        "#,
    )
    .bind(role)
    .bind(restaurant_id)
    .bind(now)
    .bind(user_id)
    .fetch_optional(executor)
    .await?;

    Ok(user)
}

/// Detach a deleted restaurant from whichever user owned it
///
/// The owner drops back to `Regular`: an owner always has a restaurant.
pub async fn clear_restaurant<'e, E>(executor: E, restaurant_id: Uuid) -> Result<u64, sqlx::Error>
where
    E: sqlx::Executor<'e, Database = Sqlite>,
{
    let result = sqlx::query(
        r#"
        UPDATE users
        SET role = $1, restaurant_id = NULL, updated_at = $2
        WHERE restaurant_id = $3
        "#,
    )
    .bind(UserRole::Regular)
    .bind(Utc::now())
    .bind(restaurant_id)
    .execute(executor)
    .await?;

    Ok(result.rows_affected())
}
