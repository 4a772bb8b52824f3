//! Backend Error Module
//!
//! This module defines the error type returned by HTTP handlers and its
//! conversion into HTTP responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - Error conversion implementations
//! ```
//!
//! # Error Types
//!
//! - `Unauthorized` - 401, missing or invalid credential
//! - `NotFound` - 404, referenced list or element absent
//! - `ValidationFailed` - 400, field errors returned verbatim
//! - `EmptyElementSet` - 400, list creation without elements
//! - `BadRequest` - 400, malformed request
//! - `Internal` - 500, unexpected store failure
//!
//! # Example
//!
//! ```rust,no_run
//! use travel_lists::backend::error::BackendError;
//! use axum::Json;
//!
//! async fn handler() -> Result<Json<()>, BackendError> {
//!     Err(BackendError::not_found("List", 1))
//! }
//! ```

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::BackendError;
