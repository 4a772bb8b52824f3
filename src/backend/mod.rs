//! Backend Module
//!
//! This module contains all server-side code: an Axum HTTP server exposing
//! travel lists, their elements and per-user likes.
//!
//! This module is only compiled when the `ssr` feature is enabled.
//!
//! # Architecture
//!
//! - **`server`** - Server initialization, application state, configuration
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`lists`** - List handlers, operations, validation and storage
//! - **`auth`** - Bearer token verification
//! - **`middleware`** - The `AuthUser` extractor
//! - **`error`** - Backend-specific error types
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── lists/          - Lists, elements, likes
//! ├── auth/           - Token verification
//! ├── middleware/     - Request extractors
//! └── error/          - Error types
//! ```
//!
//! # State Management
//!
//! `AppState` holds an `Arc<dyn ListStore>` and an `Arc<dyn TokenVerifier>`.
//! The PostgreSQL store relies on one transaction per write; the in-memory
//! store serializes writes behind a single `RwLock`.
//!
//! # Example
//!
//! ```rust,no_run
//! use travel_lists::backend::server::{create_app, AppConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::from_env()?;
//! let app = create_app(&config).await?;
//! // Use app with axum::serve
//! # Ok(())
//! # }
//! ```

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Lists, elements and likes
pub mod lists;

/// Backend error types
pub mod error;

/// Bearer token verification
pub mod auth;

/// Request extractors
pub mod middleware;

/// Re-export commonly used types
pub use error::BackendError;
pub use server::{create_app, AppConfig, AppState};
