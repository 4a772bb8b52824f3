//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Architecture
//!
//! - **`router`** - Main router creation, health check, fallback and tracing layer
//! - **`api_routes`** - The `/api/lists` endpoints
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation
//! └── api_routes.rs   - List API endpoints
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use travel_lists::backend::auth::sessions::JwtKeys;
//! use travel_lists::backend::lists::MemoryListStore;
//! use travel_lists::backend::routes::create_router;
//! use travel_lists::backend::server::AppState;
//!
//! let keys = JwtKeys::from_secret(b"secret", jsonwebtoken::Algorithm::HS256);
//! let state = AppState::new(Arc::new(MemoryListStore::new()), Arc::new(keys));
//! let router = create_router(state);
//! ```

/// Main router creation
pub mod router;

/// List API endpoints
pub mod api_routes;

// Re-export commonly used functions
pub use router::create_router;
