//! List Store
//!
//! Persistence boundary for lists, elements, likes and user lookups.
//!
//! - **`postgres`** - `PgListStore`, backed by PostgreSQL through sqlx
//! - **`memory`** - `MemoryListStore`, for tests and local development
//!
//! Every method that writes more than one row is atomic: either all of its
//! writes land or none do.

use async_trait::async_trait;
use thiserror::Error;

use crate::shared::lists::{Element, TravelList};

pub mod memory;
pub mod postgres;

pub use memory::MemoryListStore;
pub use postgres::PgListStore;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Store failures
#[derive(Debug, Error)]
pub enum StoreError {
    /// The row an operation depends on is gone
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i64 },

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

impl StoreError {
    pub fn not_found(entity: &'static str, id: i64) -> Self {
        Self::NotFound { entity, id }
    }
}

/// A validated list that has not been persisted yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewList {
    pub name: String,
    pub author: i64,
}

/// A validated element that has not been persisted yet
///
/// The owning list is supplied by the write that persists it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewElement {
    pub name: String,
    pub description: Option<String>,
}

/// One element write inside a list update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementWrite {
    /// Insert a new element into the list
    Create(NewElement),
    /// Overwrite an existing element of the list
    Update(Element),
}

/// Membership state after a like toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LikeState {
    pub liked: bool,
    pub likes_count: i64,
}

/// Repository for lists and their elements
///
/// Implementations must be `Send + Sync` to be shared across handlers.
#[async_trait]
pub trait ListStore: Send + Sync {
    /// Whether a user with this ID exists
    async fn user_exists(&self, user_id: i64) -> StoreResult<bool>;

    /// Insert a list and its elements in one transaction
    ///
    /// Returns the persisted list and elements, elements in input order.
    async fn create_list(&self, list: NewList, elements: Vec<NewElement>) -> StoreResult<(TravelList, Vec<Element>)>;

    async fn get_list(&self, list_id: i64) -> StoreResult<Option<TravelList>>;

    /// Elements owned by a list, ordered by ID
    async fn list_elements(&self, list_id: i64) -> StoreResult<Vec<Element>>;

    /// An element, only if it belongs to `list_id`
    async fn get_element(&self, list_id: i64, element_id: i64) -> StoreResult<Option<Element>>;

    /// Overwrite a list and apply element writes in one transaction
    ///
    /// Fails with `NotFound` (and writes nothing) if the list or any updated
    /// element no longer exists. Returned elements follow `writes` order.
    async fn update_list(&self, list: TravelList, writes: Vec<ElementWrite>) -> StoreResult<(TravelList, Vec<Element>)>;

    /// Delete a list with its elements and likes; `false` if it did not exist
    async fn delete_list(&self, list_id: i64) -> StoreResult<bool>;

    /// Add the like if absent, remove it if present, then count
    ///
    /// Fails with `NotFound` if the list does not exist.
    async fn toggle_like(&self, list_id: i64, user_id: i64) -> StoreResult<LikeState>;

    async fn count_likes(&self, list_id: i64) -> StoreResult<i64>;
}
