/**
 * Backend Error Types
 *
 * This module defines the error type returned by every HTTP handler.
 * Each variant maps to one HTTP status code.
 *
 * # Error Categories
 *
 * - `Unauthorized` - missing or invalid bearer credential, unknown user
 * - `NotFound` - the referenced list or element does not exist
 * - `ValidationFailed` - field errors, returned to the client verbatim
 * - `EmptyElementSet` - a list creation request carried no elements
 * - `BadRequest` - malformed request outside field validation (including
 *   bodies and path segments axum could not extract)
 * - `Internal` - unexpected store failure
 */

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::auth::sessions::TokenError;
use crate::backend::lists::store::StoreError;
use crate::shared::error::FieldErrors;

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use travel_lists::backend::error::BackendError;
///
/// let err = BackendError::not_found("List", 3);
/// assert_eq!(err.status_code().as_u16(), 404);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// The caller could not be authenticated
    #[error("{0}")]
    Unauthorized(String),

    /// A referenced entity does not exist
    #[error("{entity} not found")]
    NotFound {
        /// Entity kind, e.g. "List"
        entity: &'static str,
        id: i64,
    },

    /// Input failed field validation
    #[error(transparent)]
    ValidationFailed(#[from] FieldErrors),

    /// A list was submitted without any element
    #[error("A list must be created with at least one element.")]
    EmptyElementSet,

    /// The request is malformed in a way field validation does not cover
    #[error("{0}")]
    BadRequest(String),

    /// Unexpected failure; the message is passed through to the client
    #[error("{0}")]
    Internal(String),
}

impl BackendError {
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized(message.into())
    }

    pub fn not_found(entity: &'static str, id: i64) -> Self {
        Self::NotFound { entity, id }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::ValidationFailed(_) => StatusCode::BAD_REQUEST,
            Self::EmptyElementSet => StatusCode::BAD_REQUEST,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error message
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl From<TokenError> for BackendError {
    fn from(err: TokenError) -> Self {
        Self::Unauthorized(err.to_string())
    }
}

impl From<StoreError> for BackendError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { entity, id } => Self::NotFound { entity, id },
            other => {
                tracing::error!("Store failure: {}", other);
                Self::Internal(other.to_string())
            }
        }
    }
}

impl From<JsonRejection> for BackendError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::warn!("Rejected request body: {}", rejection.body_text());
        Self::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for BackendError {
    fn from(rejection: PathRejection) -> Self {
        tracing::warn!("Rejected path: {}", rejection.body_text());
        Self::BadRequest(rejection.body_text())
    }
}
