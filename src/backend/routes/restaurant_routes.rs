/**
 * Restaurant Routes
 *
 * # Routes
 *
 * - `GET /restaurants` - List restaurants
 * - `GET /restaurants/{id}` - Get one restaurant
 * - `POST /restaurants` - Create (requires authentication)
 * - `PATCH /restaurants/{id}` - Partial update (requires authentication)
 * - `DELETE /restaurants/{id}` - Delete (requires authentication)
 */

use axum::{
    middleware::from_fn_with_state,
    routing::{get, patch, post},
    Router,
};

use crate::backend::middleware::auth_middleware;
use crate::backend::restaurants::handlers::{
    create_restaurant, delete_restaurant, get_restaurant_by_id, list_restaurants,
    update_restaurant,
};
use crate::backend::server::state::AppState;

/// Configure restaurant routes
///
/// Reads are public. Writes share their paths with the reads, so they are
/// built as a separate router with the auth layer and merged per method.
pub fn configure_restaurant_routes(
    router: Router<AppState>,
    app_state: &AppState,
) -> Router<AppState> {
    let public = Router::new()
        .route("/restaurants", get(list_restaurants))
        .route("/restaurants/{id}", get(get_restaurant_by_id));

    let protected = Router::new()
        .route("/restaurants", post(create_restaurant))
        .route(
            "/restaurants/{id}",
            patch(update_restaurant).delete(delete_restaurant),
        )
        .route_layer(from_fn_with_state(app_state.clone(), auth_middleware));

    router.merge(public).merge(protected)
}
