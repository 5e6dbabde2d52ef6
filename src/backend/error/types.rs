/**
 * Backend Error Types
 *
 * This module defines the error kinds that handlers and middleware can
 * produce, together with the HTTP status and client-facing message of each.
 *
 * # Error Categories
 *
 * ## Authentication Errors
 *
 * - Wrong credentials on login (same kind for unknown email and bad password)
 * - Missing session cookie
 * - Invalid, expired or orphaned session token
 * - Authorization failures (acting on another user's resources)
 *
 * ## Resource Errors
 *
 * - Restaurant not found
 * - Restaurant or user already exists
 *
 * ## Request Errors
 *
 * - Body or path input that fails deserialization or validation
 *
 * ## Server Errors
 *
 * - Database failures and other unexpected conditions, reported to clients
 *   as a generic 500
 */

use axum::http::StatusCode;
use thiserror::Error;
use uuid::Uuid;

/// Backend-specific error types
///
/// Every variant maps to exactly one HTTP status code via
/// [`BackendError::status_code`].
///
/// # Usage
///
/// ```rust
/// use restaurant_orders::backend::error::BackendError;
/// use axum::http::StatusCode;
///
/// let err = BackendError::validation("email must be a valid address");
/// assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Login with an unknown email or a password that does not match
    #[error("Wrong credentials provided")]
    WrongCredentials,

    /// Protected route called without an `Authorization` cookie
    #[error("Authentication token missing")]
    AuthenticationTokenMissing,

    /// Token failed verification, or the user it names no longer exists
    #[error("Wrong authentication token")]
    WrongAuthenticationToken,

    /// Authenticated caller may not act on the target resource
    #[error("You are not authorized to perform this action")]
    NotAuthorized,

    /// Registration with an email that is already taken
    #[error("User with email {email} already exists")]
    UserWithThatEmailAlreadyExists {
        /// The conflicting email
        email: String,
    },

    /// Restaurant lookup came back empty
    #[error("{}", restaurant_not_found_message(.id))]
    RestaurantNotFound {
        /// Identifier that was looked up, if any
        id: Option<Uuid>,
    },

    /// Restaurant with the same unique field already exists
    #[error("Restaurant with {field} {value} already exists")]
    RestaurantAlreadyExists {
        /// Which unique field collided (`email` or `address`)
        field: &'static str,
        /// The colliding value
        value: String,
    },

    /// Request input that could not be parsed or failed validation
    #[error("Validation error: {message}")]
    ValidationError {
        /// Human-readable description of what was wrong
        message: String,
    },

    /// Unexpected server-side failure (hashing, signing, ...)
    #[error("Internal error: {message}")]
    InternalError {
        /// Detail for the logs; never sent to the client
        message: String,
    },

    /// Database failure
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

fn restaurant_not_found_message(id: &Option<Uuid>) -> String {
    match id {
        Some(id) => format!("Restaurant with id {} not found", id),
        None => "Restaurant not found".to_string(),
    }
}

impl BackendError {
    /// Create a restaurant-not-found error for a specific id
    pub fn restaurant_not_found(id: Uuid) -> Self {
        Self::RestaurantNotFound { id: Some(id) }
    }

    /// Create a restaurant-already-exists error
    ///
    /// # Arguments
    ///
    /// * `field` - Unique field that collided (`email` or `address`)
    /// * `value` - The colliding value
    pub fn restaurant_exists(field: &'static str, value: impl Into<String>) -> Self {
        Self::RestaurantAlreadyExists {
            field,
            value: value.into(),
        }
    }

    /// Create a new validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError {
            message: message.into(),
        }
    }

    /// Create a new internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::InternalError {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `WrongCredentials`, `AuthenticationTokenMissing`,
    ///   `WrongAuthenticationToken` - 401 Unauthorized
    /// - `NotAuthorized` - 403 Forbidden
    /// - `RestaurantNotFound` - 404 Not Found
    /// - `UserWithThatEmailAlreadyExists`, `RestaurantAlreadyExists` - 409 Conflict
    /// - `ValidationError` - 400 Bad Request
    /// - `InternalError`, `Database` - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::WrongCredentials
            | Self::AuthenticationTokenMissing
            | Self::WrongAuthenticationToken => StatusCode::UNAUTHORIZED,
            Self::NotAuthorized => StatusCode::FORBIDDEN,
            Self::RestaurantNotFound { .. } => StatusCode::NOT_FOUND,
            Self::UserWithThatEmailAlreadyExists { .. }
            | Self::RestaurantAlreadyExists { .. } => StatusCode::CONFLICT,
            Self::ValidationError { .. } => StatusCode::BAD_REQUEST,
            Self::InternalError { .. } | Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the message sent to the client
    ///
    /// Server errors collapse to a generic message so database or crypto
    /// details never reach the response body.
    pub fn message(&self) -> String {
        match self {
            Self::ValidationError { message } => message.clone(),
            Self::InternalError { .. } | Self::Database(_) => "Internal server error".to_string(),
            other => other.to_string(),
        }
    }

    /// Whether this error is the server's fault rather than the client's
    pub fn is_server_error(&self) -> bool {
        self.status_code().is_server_error()
    }
}
