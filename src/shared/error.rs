//! Shared Error Types
//!
//! Field-level validation errors that travel from the server back to the
//! client unchanged. The wire format is a JSON object mapping each offending
//! field to a list of human-readable messages:
//!
//! ```json
//! { "name": ["This field is required."] }
//! ```
//!
//! Errors that are not tied to a single field are filed under
//! [`NON_FIELD_ERRORS`].
//!
//! # Usage
//!
//! ```rust
//! use travel_lists::shared::error::FieldErrors;
//!
//! let errors = FieldErrors::single("name", "This field may not be blank.");
//! assert!(errors.contains("name"));
//! ```
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Key used for errors that apply to the input as a whole
pub const NON_FIELD_ERRORS: &str = "non_field_errors";

/// Validation errors keyed by field name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(transparent)]
#[error("validation failed on {} field(s)", .0.len())]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    /// Create an empty error set
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an error set holding one message for one field
    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.add(field, message);
        errors
    }

    /// Append a message to a field
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// Messages recorded for a field, if any
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    /// Names of the fields that failed, in sorted order
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// `Ok(value)` when no error was recorded, `Err(self)` otherwise
    pub fn into_result<T>(self, value: T) -> Result<T, Self> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}
