//! Middleware Module
//!
//! Request processing that runs before handlers.
//!
//! # Architecture
//!
//! - **`auth`** - the `AuthUser` extractor protecting routes that need a caller
//! - **`extract`** - `JsonBody` and `PathParam`, rejecting with `BackendError`
//!
//! # Example
//!
//! ```rust,no_run
//! use travel_lists::backend::middleware::AuthUser;
//!
//! async fn protected(AuthUser(user): AuthUser) -> String {
//!     format!("hello user {}", user.user_id)
//! }
//! ```

pub mod auth;
pub mod extract;

pub use auth::{authenticate, AuthUser, AuthenticatedUser};
pub use extract::{JsonBody, PathParam};
