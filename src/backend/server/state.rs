/**
 * Application State Management
 *
 * This module defines the state shared by all request handlers.
 *
 * # Thread Safety
 *
 * Both services are held behind `Arc` and are `Send + Sync`; cloning the
 * state per request is cheap.
 *
 * # Example
 *
 * ```rust,no_run
 * use travel_lists::backend::server::state::AppState;
 * use axum::extract::State;
 *
 * async fn handler(State(state): State<AppState>) {
 *     let _ = state.store.get_list(1).await;
 * }
 * ```
 */

use std::sync::Arc;

use crate::backend::auth::sessions::TokenVerifier;
use crate::backend::lists::store::ListStore;

/// Application state shared by all handlers
#[derive(Clone)]
pub struct AppState {
    /// Persistence for lists, elements, likes and users
    pub store: Arc<dyn ListStore>,
    /// Bearer token verification
    pub tokens: Arc<dyn TokenVerifier>,
}

impl AppState {
    pub fn new(store: Arc<dyn ListStore>, tokens: Arc<dyn TokenVerifier>) -> Self {
        Self { store, tokens }
    }
}
