//! List Data Structure
//!
//! Represents a named collection owned by a user, plus the request and
//! response bodies of the list write endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::element::{Element, ElementErrorPolicy, RejectedElement};

/// A list as stored and returned to clients
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "ssr", derive(sqlx::FromRow))]
pub struct TravelList {
    /// Store-generated list ID
    pub id: i64,
    /// Display name (1-255 characters)
    pub name: String,
    /// ID of the user who created the list
    pub author: i64,
    /// When the list was created
    pub created_at: DateTime<Utc>,
}

/// A list with its elements nested under the list fields
///
/// Returned by `GET /api/lists/{list_id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ListWithElements {
    #[serde(flatten)]
    pub list: TravelList,
    /// Number of users who currently like the list
    pub likes_count: i64,
    pub elements: Vec<Element>,
}

/// Body of `POST /api/lists` and `PUT /api/lists/{list_id}`
///
/// Both `list` and the entries of `elements` are kept as raw JSON so that
/// shape and type problems are reported as field errors instead of a
/// deserialization rejection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListWriteRequest {
    /// List fields (complete on create, partial on update)
    #[serde(default)]
    pub list: Option<Value>,
    /// Element entries; an entry with an `id` updates, one without creates
    #[serde(default)]
    pub elements: Option<Vec<Value>>,
    /// How to treat entries that fail validation
    #[serde(default)]
    pub on_element_error: Option<ElementErrorPolicy>,
}

/// Response of the list write endpoints
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ListWriteResponse {
    pub list: TravelList,
    /// Elements actually persisted by this call, in request order
    pub elements: Vec<Element>,
    /// Entries skipped under the `skip` policy
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rejected: Vec<RejectedElement>,
}
