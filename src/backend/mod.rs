//! Backend Module
//!
//! This module contains all server-side code for the restaurant ordering
//! backend: an Axum HTTP server with cookie-based authentication and a
//! restaurant catalogue stored in SQLite.
//!
//! # Overview
//!
//! The backend module includes:
//! - Axum HTTP server setup and configuration
//! - Registration, login and logout with an `HttpOnly` session cookie
//! - Role upgrades that link a user to the restaurant they own
//! - Restaurant CRUD with an embedded address
//! - Database persistence (SQLite via sqlx)
//!
//! # Architecture
//!
//! - **`server`** - Server initialization, application state, configuration
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Users, session tokens, cookies and auth handlers
//! - **`restaurants`** - Restaurant models, queries and handlers
//! - **`middleware`** - Authentication and request validation
//! - **`error`** - Backend-specific error types
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── auth/           - Authentication
//! ├── restaurants/    - Restaurant resource
//! ├── middleware/     - Request middleware
//! └── error/          - Error types
//! ```
//!
//! # Error Handling
//!
//! Handlers return `Result<_, BackendError>`. `BackendError` implements
//! `IntoResponse`, so every failure reaches the client as
//! `{ "error": <message>, "status": <code> }`.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// Authentication and user management
pub mod auth;

/// Restaurants and their addresses
pub mod restaurants;

/// Middleware for request processing
pub mod middleware;

/// Re-export commonly used types
pub use error::BackendError;
pub use server::{create_app, create_app_with_pool, AppState, ServerConfig};
