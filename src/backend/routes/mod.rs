//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//! Routes are organized by resource into focused submodules.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs                - Module exports and documentation
//! ├── router.rs             - Main router creation, tracing and fallback
//! ├── auth_routes.rs        - /auth endpoints
//! └── restaurant_routes.rs  - /restaurants endpoints
//! ```
//!
//! # Authentication
//!
//! Protected routes are grouped in their own sub-router with
//! `route_layer(from_fn_with_state(.., auth_middleware))`, then merged with
//! the public ones. A path can therefore be public for `GET` and protected
//! for `PATCH`.

/// Main router creation
pub mod router;

/// Authentication routes
pub mod auth_routes;

/// Restaurant routes
pub mod restaurant_routes;

// Re-export commonly used functions
pub use router::create_router;
