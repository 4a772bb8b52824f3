//! Shared Module
//!
//! Types shared between the backend and its clients. Everything here is
//! plain serde data and builds without the `ssr` feature.

/// Shared error types
pub mod error;

/// Lists, elements and likes
pub mod lists;

/// Re-export commonly used types for convenience
pub use error::FieldErrors;
pub use lists::{Element, ListWithElements, ListWriteRequest, ListWriteResponse, TravelList};
