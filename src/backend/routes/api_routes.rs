/**
 * API Route Handlers
 *
 * This module registers the `/api/lists` endpoints.
 *
 * # Routes
 *
 * - `POST /api/lists` - Create a list with its elements (requires authentication)
 * - `GET /api/lists/{list_id}` - List with likes count and elements (public)
 * - `PUT /api/lists/{list_id}` - Update a list and its elements (requires authentication)
 * - `DELETE /api/lists/{list_id}` - Delete a list and its elements (requires authentication)
 * - `POST /api/lists/{list_id}/like` - Toggle the caller's like (requires authentication)
 * - `POST /api/lists/like` - Same, with the list id in the body
 *
 * Any other method on the two like routes is answered with
 * `400 {"error": "Invalid request"}` instead of 405.
 */

use axum::routing::{get, post};
use axum::Router;

use crate::backend::lists::handlers::{
    create_list, delete_list, get_list, invalid_like_method, toggle_like, toggle_like_by_body, update_list,
};
use crate::backend::server::state::AppState;

/// Configure list API routes
///
/// # Arguments
///
/// * `router` - The router to add routes to
///
/// # Returns
///
/// Router with the list routes configured
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/api/lists", post(create_list))
        // Static segment, matched ahead of `{list_id}`
        .route(
            "/api/lists/like",
            post(toggle_like_by_body).fallback(invalid_like_method),
        )
        .route(
            "/api/lists/{list_id}",
            get(get_list).put(update_list).delete(delete_list),
        )
        .route(
            "/api/lists/{list_id}/like",
            post(toggle_like).fallback(invalid_like_method),
        )
}
