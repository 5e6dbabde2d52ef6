/**
 * Authentication Routes
 *
 * # Routes
 *
 * - `POST /auth/register` - User registration
 * - `POST /auth/login` - User login
 * - `POST /auth/logout` - Clear the session cookie
 * - `GET /auth/me` - Get current user info (requires authentication)
 * - `PATCH /auth/roleRequest/{id}` - Change own role (requires authentication)
 */

use axum::{
    middleware::from_fn_with_state,
    routing::{get, patch, post},
    Router,
};

use crate::backend::auth::handlers::{get_me, login, logout, register, upgrade_role};
use crate::backend::middleware::auth_middleware;
use crate::backend::server::state::AppState;

/// Configure authentication routes
///
/// Register, login and logout are public; the rest sit behind
/// [`auth_middleware`].
pub fn configure_auth_routes(router: Router<AppState>, app_state: &AppState) -> Router<AppState> {
    let public = Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        .route("/auth/logout", post(logout));

    let protected = Router::new()
        .route("/auth/me", get(get_me))
        .route("/auth/roleRequest/{id}", patch(upgrade_role))
        .route_layer(from_fn_with_state(app_state.clone(), auth_middleware));

    router.merge(public).merge(protected)
}
