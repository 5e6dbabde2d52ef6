//! Restaurant Orders - Main Library
//!
//! Backend for a restaurant ordering service: user accounts with
//! cookie-based sessions, restaurant owners, and a restaurant catalogue.
//!
//! # Module Structure
//!
//! - **`backend`** - Axum HTTP server
//!   - Authentication (register, login, logout, role upgrades)
//!   - Restaurant CRUD with embedded addresses
//!   - SQLite persistence with embedded migrations
//!
//! # Usage
//!
//! ```rust,no_run
//! use restaurant_orders::backend::server::{create_app, ServerConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::builder()
//!     .jwt_secret("change-me")
//!     .build()?;
//! let app = create_app(config).await?;
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

/// Backend server-side code
pub mod backend;
