//! Lists Module
//!
//! Lists, their elements, and likes.
//!
//! # Architecture
//!
//! - **`handlers`** - HTTP handlers for the `/api/lists` endpoints
//! - **`service`** - The list operations: create, get, update, delete, toggle like
//! - **`validation`** - Raw JSON to validated drafts, or field errors
//! - **`store`** - The `ListStore` trait and its PostgreSQL and in-memory implementations
//!
//! # Request Flow
//!
//! ```text
//! handler -> AuthUser (protected routes) -> service -> validation -> store
//! ```

pub mod handlers;
pub mod service;
pub mod store;
pub mod validation;

pub use store::{ListStore, MemoryListStore, PgListStore, StoreError};
