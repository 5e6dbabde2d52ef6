/**
 * Authentication Handler Types
 *
 * This module defines the request and response types used by the
 * authentication handlers. Request types carry `validator` rules that the
 * `ValidatedJson` extractor enforces before a handler runs.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::backend::auth::users::{User, UserRole};
use crate::backend::restaurants::types::Restaurant;

/// Registration request
#[derive(Deserialize, Serialize, Debug, Validate)]
pub struct RegisterRequest {
    /// Optional display name
    #[validate(length(min = 1, max = 100, message = "name must be 1-100 characters"))]
    pub name: Option<String>,
    /// User's email address
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    /// User's password (will be hashed before storage)
    #[validate(length(min = 8, message = "password must be at least 8 characters"))]
    pub password: String,
}

/// Login request
#[derive(Deserialize, Serialize, Debug, Validate)]
pub struct LoginRequest {
    /// User's email address
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    /// User's password (will be verified against stored hash)
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

/// Role code as sent by clients: a number, or a numeric string
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum RoleCode {
    Number(i64),
    Text(String),
}

impl RoleCode {
    /// Numeric value of the code, if it has one
    pub fn value(&self) -> Option<i64> {
        match self {
            Self::Number(code) => Some(*code),
            Self::Text(text) => text.trim().parse().ok(),
        }
    }
}

/// Role upgrade request
///
/// `userRole` = 1 makes the user the owner of `restaurantId`.
#[derive(Deserialize, Debug, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RoleUpgradeRequest {
    pub user_role: RoleCode,
    #[serde(default)]
    pub restaurant_id: Option<Uuid>,
}

/// User response (without sensitive data)
///
/// Contains user information that is safe to return to clients.
/// Does not include the password hash.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UserResponse {
    pub id: Uuid,
    pub name: Option<String>,
    pub email: String,
    pub role: UserRole,
    pub restaurant_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            role: user.role,
            restaurant_id: user.restaurant_id,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Role upgrade response
///
/// `restaurant` is present only when the upgrade made the user an owner.
#[derive(Serialize, Debug)]
pub struct RoleUpgradeResponse {
    pub user: UserResponse,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restaurant: Option<Restaurant>,
}
