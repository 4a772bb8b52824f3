/**
 * Authentication Extractor
 *
 * This module resolves the caller of a protected route. It extracts the
 * bearer token from the Authorization header, verifies it, and checks that
 * the user named by the token still exists. Handlers take `AuthUser` as a
 * parameter; routes without it stay anonymous.
 */

use axum::{extract::FromRequestParts, http::header::AUTHORIZATION, http::request::Parts};

use crate::backend::auth::sessions::decode_bearer;
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;

/// Authenticated user data extracted from JWT token
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: i64,
}

/// Resolve the authenticated user from request parts
///
/// Returns `Unauthorized` if the credential is missing or invalid, or if the
/// user it names is unknown to the store.
pub async fn authenticate(parts: &Parts, state: &AppState) -> Result<AuthenticatedUser, BackendError> {
    let header = parts.headers.get(AUTHORIZATION).and_then(|h| h.to_str().ok());

    let claims = decode_bearer(header, state.tokens.as_ref()).map_err(|e| {
        tracing::warn!("Rejected credential: {}", e);
        BackendError::from(e)
    })?;
    let user_id = claims.user_id()?;

    if !state.store.user_exists(user_id).await? {
        tracing::warn!("Token names unknown user {}", user_id);
        return Err(BackendError::unauthorized("unknown user"));
    }

    Ok(AuthenticatedUser { user_id })
}

/// Axum extractor for authenticated user
///
/// A user already placed in the request extensions (e.g. by an upstream
/// layer) is used as-is.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        if let Some(user) = parts.extensions.get::<AuthenticatedUser>() {
            return Ok(AuthUser(user.clone()));
        }

        let user = authenticate(parts, state).await?;
        parts.extensions.insert(user.clone());
        Ok(AuthUser(user))
    }
}
