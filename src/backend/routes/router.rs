/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Route Order
 *
 * 1. Auth routes (register, login, logout, me, role requests)
 * 2. Restaurant routes
 * 3. Fallback handler (JSON 404)
 *
 * Every request passes through a `TraceLayer`, so each one gets its own
 * tracing span with method, path, status and latency.
 */

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json},
    Router,
};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::backend::routes::auth_routes::configure_auth_routes;
use crate::backend::routes::restaurant_routes::configure_restaurant_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Application state containing the pool and token service
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = Router::new();

    let router = configure_auth_routes(router, &app_state);
    let router = configure_restaurant_routes(router, &app_state);

    // Fallback handler for 404
    let router = router.fallback(not_found);

    router
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(app_state)
}

async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({
            "error": "Not Found",
            "status": StatusCode::NOT_FOUND.as_u16(),
        })),
    )
}
