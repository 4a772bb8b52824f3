//! Travel Lists - Main Library
//!
//! A backend for travel lists: named lists owned by a user, each holding
//! elements (places, activities), with a per-user like toggle.
//!
//! # Module Structure
//!
//! - **`shared`** - Serializable types used on the wire
//!   - Lists, elements, like requests and responses
//!   - Field validation errors
//!
//! - **`backend`** - Server-side code (only compiled with `ssr` feature)
//!   - Axum HTTP server and routes
//!   - Bearer token authentication
//!   - PostgreSQL and in-memory list stores
//!
//! # Feature Flags
//!
//! - **`ssr`** (default) - Enables the backend modules and the server binary
//!
//! Without `ssr` only the `shared` types are built, which lets a client
//! crate depend on them without pulling in the server stack.

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
#[cfg(feature = "ssr")]
pub mod backend;
