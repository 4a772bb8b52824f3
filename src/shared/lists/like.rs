//! Like Toggle Types
//!
//! Request and response bodies of the like endpoints.

use serde::{Deserialize, Serialize};

/// Reference to a list by ID
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ListRef {
    pub id: i64,
}

/// Body of `POST /api/lists/like`
///
/// Accepts either `{"list_id": 3}` or `{"list": {"id": 3}}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LikeRequest {
    #[serde(default)]
    pub list_id: Option<i64>,
    #[serde(default)]
    pub list: Option<ListRef>,
}

impl LikeRequest {
    /// The referenced list ID; `list_id` wins when both forms are present
    pub fn target(&self) -> Option<i64> {
        self.list_id.or(self.list.map(|list| list.id))
    }
}

/// Result of toggling a like
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ToggleLikeResponse {
    /// Whether the caller likes the list after the toggle
    pub liked: bool,
    /// Number of likers after the toggle
    pub likes_count: i64,
}
