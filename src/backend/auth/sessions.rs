/**
 * Bearer Tokens
 *
 * This module extracts bearer credentials from the `Authorization` header
 * and verifies them as HMAC-signed JWTs. Verification sits behind the
 * `TokenVerifier` trait so handlers never touch the signing scheme.
 *
 * Two failure kinds are kept apart:
 * - `MissingCredential` - no header, or not a `Bearer ` header
 * - `InvalidCredential` - a token was presented but did not verify
 */

use std::time::Duration;

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Scheme prefix expected in the `Authorization` header
pub const BEARER_PREFIX: &str = "Bearer ";

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// User ID
    pub sub: String,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
}

impl Claims {
    /// The caller's user ID carried in `sub`
    pub fn user_id(&self) -> Result<i64, TokenError> {
        self.sub
            .parse()
            .map_err(|_| TokenError::InvalidCredential(format!("subject {:?} is not a user id", self.sub)))
    }
}

/// Why a request could not be authenticated
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("missing bearer credential")]
    MissingCredential,
    #[error("invalid bearer credential: {0}")]
    InvalidCredential(String),
}

/// Capability to turn a raw token into verified claims
pub trait TokenVerifier: Send + Sync {
    fn verify(&self, token: &str) -> Result<Claims, TokenError>;
}

/// Signing and verification keys derived from one shared secret
pub struct JwtKeys {
    algorithm: Algorithm,
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl JwtKeys {
    /// Build keys for a symmetric algorithm (HS256, HS384 or HS512)
    pub fn from_secret(secret: &[u8], algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation: Validation::new(algorithm),
        }
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Sign arbitrary claims with these keys
    pub fn encode(&self, claims: &Claims) -> Result<String, TokenError> {
        encode(&Header::new(self.algorithm), claims, &self.encoding)
            .map_err(|e| TokenError::InvalidCredential(e.to_string()))
    }

    /// Mint a token for a user, valid for `ttl`
    ///
    /// Token issuance is not exposed over HTTP; this is used by tests and
    /// operator tooling.
    pub fn issue(&self, user_id: i64, ttl: Duration) -> Result<String, TokenError> {
        let now = Utc::now().timestamp().max(0) as u64;
        let claims = Claims {
            sub: user_id.to_string(),
            exp: now + ttl.as_secs(),
            iat: now,
        };
        self.encode(&claims)
    }
}

impl TokenVerifier for JwtKeys {
    fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        decode::<Claims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| TokenError::InvalidCredential(e.to_string()))
    }
}

/// Extract the token from an `Authorization` header value
pub fn bearer_token(header: Option<&str>) -> Result<&str, TokenError> {
    header
        .and_then(|value| value.strip_prefix(BEARER_PREFIX))
        .ok_or(TokenError::MissingCredential)
}

/// Extract and verify a bearer credential
///
/// # Arguments
/// * `header` - The `Authorization` header value, if present
/// * `verifier` - Signature verification primitive
///
/// # Returns
/// Decoded claims, `MissingCredential` when no bearer token was presented,
/// or `InvalidCredential` when one was presented and failed verification
pub fn decode_bearer(header: Option<&str>, verifier: &dyn TokenVerifier) -> Result<Claims, TokenError> {
    let token = bearer_token(header)?;
    if token.is_empty() {
        return Err(TokenError::InvalidCredential("empty token".to_string()));
    }
    verifier.verify(token)
}
