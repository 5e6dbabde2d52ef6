/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the necessary `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * The `AppState` struct serves as the central state container for the
 * application, holding:
 * - The SQLite connection pool
 * - The session token service
 * - The server configuration
 *
 * Everything in it is immutable after startup, so cloning the state into
 * each request needs no locking.
 *
 * # State Extraction
 *
 * The `FromRef` implementations allow Axum handlers to extract specific
 * parts of the state without needing the entire `AppState`.
 *
 * # Example
 *
 * ```rust
 * use axum::extract::State;
 * use sqlx::SqlitePool;
 *
 * async fn handler(State(pool): State<SqlitePool>) {
 *     // Query using the pool
 *     let _ = pool;
 * }
 * ```
 */

use std::sync::Arc;

use axum::extract::FromRef;
use sqlx::SqlitePool;

use crate::backend::auth::sessions::TokenService;
use crate::backend::server::config::ServerConfig;

/// Application state shared by all handlers
///
/// # Fields
///
/// * `db` - SQLite connection pool
/// * `tokens` - Issues and verifies session tokens
/// * `config` - Server configuration the app was built from
#[derive(Clone, Debug)]
pub struct AppState {
    pub db: SqlitePool,
    pub tokens: Arc<TokenService>,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Build the state from a configuration and an open pool
    pub fn new(config: ServerConfig, db: SqlitePool) -> Self {
        let tokens = TokenService::new(&config.jwt_secret);
        Self {
            db,
            tokens: Arc::new(tokens),
            config: Arc::new(config),
        }
    }
}

/// Implement FromRef for the database pool
///
/// This allows handlers to use `State<SqlitePool>` directly.
impl FromRef<AppState> for SqlitePool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db.clone()
    }
}

impl FromRef<AppState> for Arc<TokenService> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.tokens.clone()
    }
}

impl FromRef<AppState> for Arc<ServerConfig> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.config.clone()
    }
}

/// State over a fresh in-memory database, with a cheap bcrypt cost
#[cfg(test)]
pub(crate) async fn test_state() -> AppState {
    let config = ServerConfig::builder()
        .database_url("sqlite::memory:")
        .jwt_secret("test-secret")
        .bcrypt_cost(4)
        .build()
        .unwrap();
    let pool = crate::backend::server::config::connect_in_memory()
        .await
        .unwrap();
    AppState::new(config, pool)
}
