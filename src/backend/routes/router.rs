/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Route Order
 *
 * 1. Health check
 * 2. API routes (lists, elements, likes)
 * 3. Fallback handler (404)
 */

use axum::{http::StatusCode, routing::get, Json, Router};
use serde_json::{json, Value};
use tower_http::trace::TraceLayer;

use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Store and token verifier shared by every handler
///
/// # Returns
///
/// Configured Axum Router ready to serve requests. Every request is
/// traced through `TraceLayer`.
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = Router::new().route("/health", get(health));

    let router = configure_api_routes(router);

    // Fallback handler for 404
    let router = router.fallback(not_found);

    router.layer(TraceLayer::new_for_http()).with_state(app_state)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn not_found() -> (StatusCode, Json<Value>) {
    let status = StatusCode::NOT_FOUND;
    (status, Json(json!({ "error": "Not Found", "status": status.as_u16() })))
}
