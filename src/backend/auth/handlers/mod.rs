//! Authentication Handlers Module
//!
//! This module contains all HTTP handlers for authentication endpoints.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs       - Module exports and documentation
//! ├── types.rs     - Request and response types
//! ├── register.rs  - User registration handler
//! ├── login.rs     - User authentication handler
//! ├── logout.rs    - Session cookie clearing
//! ├── me.rs        - Get current user handler
//! └── role.rs      - Role upgrade handler
//! ```
//!
//! # Handlers
//!
//! - **`register`** - POST /auth/register - User registration
//! - **`login`** - POST /auth/login - User authentication
//! - **`logout`** - POST /auth/logout - Clear the session cookie
//! - **`get_me`** - GET /auth/me - Get current user info
//! - **`upgrade_role`** - PATCH /auth/roleRequest/{id} - Change own role
//!
//! # Authentication Flow
//!
//! 1. **Register**: email and password → user created → session cookie set
//! 2. **Login**: credentials verified → session cookie set
//! 3. **Authenticated requests**: cookie verified by the auth middleware
//! 4. **Logout**: cookie overwritten with an expired, empty one

/// Request and response types
pub mod types;

/// Register handler
pub mod register;

/// Login handler
pub mod login;

/// Logout handler
pub mod logout;

/// Get current user handler
pub mod me;

/// Role upgrade handler
pub mod role;

// Re-export commonly used types
pub use types::{LoginRequest, RegisterRequest, RoleUpgradeRequest, RoleUpgradeResponse, UserResponse};

// Re-export handlers
pub use login::login;
pub use logout::logout;
pub use me::get_me;
pub use register::register;
pub use role::upgrade_role;
