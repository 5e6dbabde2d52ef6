/**
 * Server Initialization
 *
 * This module handles the initialization and setup of the Axum HTTP server,
 * including state creation, database loading, and route configuration.
 *
 * # Initialization Process
 *
 * 1. Open the SQLite pool and run migrations
 * 2. Build the token service from the configured secret
 * 3. Create and configure the router
 */

use axum::Router;
use sqlx::SqlitePool;

use crate::backend::routes::router::create_router;
use crate::backend::server::config::{load_database, ServerConfig};
use crate::backend::server::state::AppState;

/// Create and configure the Axum application
///
/// # Errors
///
/// Fails when the database cannot be opened or migrated. Unlike a missing
/// optional service, the app cannot serve anything without its database.
pub async fn create_app(config: ServerConfig) -> Result<Router<()>, sqlx::Error> {
    tracing::info!("Initializing restaurant backend server");

    let pool = load_database(&config).await?;
    Ok(create_app_with_pool(config, pool))
}

/// Create the application over an already open pool
///
/// Integration tests use this with an in-memory database.
pub fn create_app_with_pool(config: ServerConfig, pool: SqlitePool) -> Router<()> {
    let app_state = AppState::new(config, pool);
    let app = create_router(app_state);

    tracing::info!("Router configured");
    app
}
