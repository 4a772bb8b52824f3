//! Authentication Module
//!
//! Bearer token verification. Tokens are issued by another service; this
//! backend only checks them.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! └── sessions.rs     - Claims, TokenVerifier, JwtKeys
//! ```
//!
//! # Authentication Flow
//!
//! 1. The client sends `Authorization: Bearer <token>`
//! 2. `decode_bearer` strips the scheme and hands the token to a `TokenVerifier`
//! 3. The `sub` claim names the user id
//! 4. `middleware::auth` checks the user exists and exposes it to the handler
//!
//! Any failure is answered with 401.

/// JWT token generation and validation
pub mod sessions;

pub use sessions::{decode_bearer, Claims, JwtKeys, TokenError, TokenVerifier};
