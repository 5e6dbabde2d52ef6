//! Middleware Module
//!
//! This module contains the request processing that runs before handlers.
//!
//! # Architecture
//!
//! - **`auth`** - Session-cookie authentication for protected routes, and the
//!   `AuthUser` extractor that hands the loaded user to handlers
//! - **`validation`** - `ValidatedJson` extractor that rejects invalid bodies
//!
//! # Example
//!
//! ```rust,no_run
//! use axum::{middleware::from_fn_with_state, routing::delete, Router};
//! use restaurant_orders::backend::middleware::auth_middleware;
//! use restaurant_orders::backend::restaurants::handlers::delete_restaurant;
//! use restaurant_orders::backend::server::state::AppState;
//!
//! fn protected(state: AppState) -> Router<AppState> {
//!     Router::new()
//!         .route("/restaurants/{id}", delete(delete_restaurant))
//!         .route_layer(from_fn_with_state(state, auth_middleware))
//! }
//! ```

pub mod auth;

pub mod validation;

pub use auth::{auth_middleware, AuthUser, AuthenticatedUser};
pub use validation::{parse_id, ValidatedJson};
