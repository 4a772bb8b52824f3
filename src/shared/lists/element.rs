//! Element Data Structure
//!
//! Represents a single item (a place, a stop) that belongs to exactly one list.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::shared::error::FieldErrors;

/// An element as stored and returned to clients
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "ssr", derive(sqlx::FromRow))]
pub struct Element {
    /// Store-generated element ID
    pub id: i64,
    /// Display name (1-255 characters)
    pub name: String,
    /// Optional free-form notes
    pub description: Option<String>,
    /// ID of the owning list
    pub tlist: i64,
}

/// What to do with element entries that fail validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementErrorPolicy {
    /// Persist the valid entries and report the rejected ones
    Skip,
    /// Fail the whole call on the first rejected entry
    RejectAll,
}

/// An element entry that was not persisted
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RejectedElement {
    /// Position of the entry in the request's `elements` array
    pub index: usize,
    /// The entry as the client sent it
    pub input: Value,
    pub errors: FieldErrors,
}
