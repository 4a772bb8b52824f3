/**
 * Server Initialization
 *
 * This module assembles the Axum application from a loaded configuration.
 *
 * # Initialization Process
 *
 * 1. Open the list store (PostgreSQL with migrations, or in-memory)
 * 2. Derive the token keys from the configured secret
 * 3. Build the shared `AppState`
 * 4. Create the router
 */

use std::sync::Arc;

use axum::Router;

use crate::backend::lists::store::StoreResult;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::{load_store, AppConfig};
use crate::backend::server::state::AppState;

/// Create and configure the Axum application
///
/// # Errors
///
/// Fails if a database is configured but cannot be reached or migrated.
pub async fn create_app(config: &AppConfig) -> StoreResult<Router<()>> {
    tracing::info!("Initializing travel lists backend");

    let store = load_store(config).await?;
    let tokens = Arc::new(config.jwt_keys());
    tracing::info!("Bearer tokens verified with {:?}", tokens.algorithm());

    let app_state = AppState::new(store, tokens);
    let app = create_router(app_state);

    tracing::info!("Router configured");
    Ok(app)
}
