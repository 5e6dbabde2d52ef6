//! Authentication Module
//!
//! This module handles user authentication, registration, and session management.
//! It provides HTTP handlers for authentication endpoints and manages user data
//! and session tokens.
//!
//! # Architecture
//!
//! - **`users`** - User data model, roles and database operations
//! - **`sessions`** - Signed session token issuing and verification
//! - **`cookies`** - The `Authorization` session cookie
//! - **`handlers`** - HTTP handlers for authentication endpoints
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── users.rs        - User model and database operations
//! ├── sessions.rs     - Token service
//! ├── cookies.rs      - Set-Cookie values and cookie parsing
//! └── handlers/       - HTTP handlers
//! ```
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage
//! - Session tokens are HS256-signed and expire after one hour
//! - The token travels only in an `HttpOnly` cookie
//! - Invalid credentials return 401 (no information leakage)
//!
//! # Example
//!
//! ```rust
//! use restaurant_orders::backend::auth::sessions::TokenService;
//! use uuid::Uuid;
//!
//! let tokens = TokenService::new("secret");
//! let user_id = Uuid::new_v4();
//! let issued = tokens.issue(user_id).unwrap();
//! assert_eq!(tokens.verify(&issued.token).unwrap(), user_id);
//! ```

/// User data model and database operations
pub mod users;

/// Session token generation and validation
pub mod sessions;

/// Session cookie handling
pub mod cookies;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use handlers::types::{LoginRequest, RegisterRequest, UserResponse};
pub use handlers::{get_me, login, logout, register, upgrade_role};
