//! Lists Module
//!
//! Data structures for user-authored lists and the elements they own:
//!
//! - `TravelList` - A named list owned by a user
//! - `Element` - A single item belonging to exactly one list
//! - `ListWriteRequest` / `ListWriteResponse` - Create and update payloads
//! - `ToggleLikeResponse` - Result of the like toggle
//!
//! # Usage
//!
//! ```rust
//! use travel_lists::shared::lists::{TravelList, Element, ListWriteRequest};
//! ```

pub mod list;
pub mod element;
pub mod like;

// Re-export all types
pub use list::{TravelList, ListWithElements, ListWriteRequest, ListWriteResponse};
pub use element::{Element, ElementErrorPolicy, RejectedElement};
pub use like::{LikeRequest, ListRef, ToggleLikeResponse};
