//! Backend Error Module
//!
//! This module defines the error type returned by every handler, extractor
//! and middleware in the backend, and the single place where those errors
//! become HTTP responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error kinds, status codes and client messages
//! └── conversion.rs - IntoResponse and sqlx conversions
//! ```
//!
//! # Error Kinds
//!
//! - `WrongCredentials` - login with an unknown email or a wrong password
//! - `AuthenticationTokenMissing` - protected route called without a cookie
//! - `WrongAuthenticationToken` - bad or expired token, or its user is gone
//! - `NotAuthorized` - authenticated, but not allowed to touch the resource
//! - `UserWithThatEmailAlreadyExists` - registration with a taken email
//! - `RestaurantNotFound` / `RestaurantAlreadyExists` - restaurant lookups
//! - `ValidationError` - malformed or invalid request input
//! - `InternalError` / `Database` - anything the client cannot fix
//!
//! # Response Format
//!
//! ```json
//! { "error": "Wrong credentials provided", "status": 401 }
//! ```
//!
//! Server-side failures never leak their details to the client; they are
//! logged with `tracing` and reported as a generic 500.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

pub use types::BackendError;
