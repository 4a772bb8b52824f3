//! Authentication test helpers
//!
//! Provides utilities for generating tokens and authorization headers.

use std::time::Duration;

use chrono::Utc;
use jsonwebtoken::Algorithm;
use travel_lists::backend::auth::sessions::{Claims, JwtKeys};

/// Secret shared by the test app and the tokens minted here
pub const TEST_SECRET: &[u8] = b"integration-test-secret";

pub fn test_keys() -> JwtKeys {
    JwtKeys::from_secret(TEST_SECRET, Algorithm::HS256)
}

/// Generate a test JWT token valid for one hour
pub fn token_for(keys: &JwtKeys, user_id: i64) -> String {
    keys.issue(user_id, Duration::from_secs(3600)).expect("Failed to generate test token")
}

/// A token that expired an hour ago
pub fn expired_token(keys: &JwtKeys, user_id: i64) -> String {
    let now = Utc::now().timestamp() as u64;
    let claims = Claims {
        sub: user_id.to_string(),
        exp: now - 3600,
        iat: now - 7200,
    };
    keys.encode(&claims).expect("Failed to generate expired token")
}

/// A token signed with a different secret
pub fn foreign_token(user_id: i64) -> String {
    let keys = JwtKeys::from_secret(b"some-other-secret", Algorithm::HS256);
    token_for(&keys, user_id)
}

/// Create authorization header value
pub fn auth_header(token: &str) -> String {
    format!("Bearer {}", token)
}
