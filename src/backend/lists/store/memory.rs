//! In-memory list store
//!
//! All state lives behind one `RwLock`; every write method holds the write
//! guard for its whole duration, which makes each call atomic.

use std::collections::{BTreeMap, BTreeSet};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::{ElementWrite, LikeState, ListStore, NewElement, NewList, StoreError, StoreResult};
use crate::shared::lists::{Element, TravelList};

#[derive(Debug, Default)]
struct MemoryState {
    users: BTreeSet<i64>,
    lists: BTreeMap<i64, TravelList>,
    elements: BTreeMap<i64, Element>,
    /// (list_id, user_id)
    likes: BTreeSet<(i64, i64)>,
    last_list_id: i64,
    last_element_id: i64,
}

impl MemoryState {
    fn insert_element(&mut self, tlist: i64, element: NewElement) -> Element {
        self.last_element_id += 1;
        let element = Element {
            id: self.last_element_id,
            name: element.name,
            description: element.description,
            tlist,
        };
        self.elements.insert(element.id, element.clone());
        element
    }
}

/// List store kept in process memory
#[derive(Debug, Default)]
pub struct MemoryListStore {
    state: RwLock<MemoryState>,
}

impl MemoryListStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already knows the given users
    pub fn with_users(user_ids: impl IntoIterator<Item = i64>) -> Self {
        let state = MemoryState {
            users: user_ids.into_iter().collect(),
            ..Default::default()
        };
        Self { state: RwLock::new(state) }
    }

    pub async fn add_user(&self, user_id: i64) {
        self.state.write().await.users.insert(user_id);
    }

    /// Number of stored elements referencing `list_id`
    pub async fn element_count(&self, list_id: i64) -> usize {
        self.state.read().await.elements.values().filter(|e| e.tlist == list_id).count()
    }
}

#[async_trait]
impl ListStore for MemoryListStore {
    async fn user_exists(&self, user_id: i64) -> StoreResult<bool> {
        Ok(self.state.read().await.users.contains(&user_id))
    }

    async fn create_list(&self, list: NewList, elements: Vec<NewElement>) -> StoreResult<(TravelList, Vec<Element>)> {
        let mut state = self.state.write().await;
        state.last_list_id += 1;
        let list = TravelList {
            id: state.last_list_id,
            name: list.name,
            author: list.author,
            created_at: Utc::now(),
        };
        state.lists.insert(list.id, list.clone());

        let elements = elements
            .into_iter()
            .map(|element| state.insert_element(list.id, element))
            .collect();
        Ok((list, elements))
    }

    async fn get_list(&self, list_id: i64) -> StoreResult<Option<TravelList>> {
        Ok(self.state.read().await.lists.get(&list_id).cloned())
    }

    async fn list_elements(&self, list_id: i64) -> StoreResult<Vec<Element>> {
        let state = self.state.read().await;
        Ok(state.elements.values().filter(|e| e.tlist == list_id).cloned().collect())
    }

    async fn get_element(&self, list_id: i64, element_id: i64) -> StoreResult<Option<Element>> {
        let state = self.state.read().await;
        Ok(state.elements.get(&element_id).filter(|e| e.tlist == list_id).cloned())
    }

    async fn update_list(&self, list: TravelList, writes: Vec<ElementWrite>) -> StoreResult<(TravelList, Vec<Element>)> {
        let mut state = self.state.write().await;

        // Check everything up front so a failure leaves the state untouched
        if !state.lists.contains_key(&list.id) {
            return Err(StoreError::not_found("List", list.id));
        }
        for write in &writes {
            if let ElementWrite::Update(element) = write {
                let owned = state.elements.get(&element.id).is_some_and(|e| e.tlist == list.id);
                if !owned {
                    return Err(StoreError::not_found("Element", element.id));
                }
            }
        }

        state.lists.insert(list.id, list.clone());
        let mut results = Vec::with_capacity(writes.len());
        for write in writes {
            let element = match write {
                ElementWrite::Create(element) => state.insert_element(list.id, element),
                ElementWrite::Update(element) => {
                    let element = Element { tlist: list.id, ..element };
                    state.elements.insert(element.id, element.clone());
                    element
                }
            };
            results.push(element);
        }
        Ok((list, results))
    }

    async fn delete_list(&self, list_id: i64) -> StoreResult<bool> {
        let mut state = self.state.write().await;
        if state.lists.remove(&list_id).is_none() {
            return Ok(false);
        }
        state.elements.retain(|_, e| e.tlist != list_id);
        state.likes.retain(|(liked_list, _)| *liked_list != list_id);
        Ok(true)
    }

    async fn toggle_like(&self, list_id: i64, user_id: i64) -> StoreResult<LikeState> {
        let mut state = self.state.write().await;
        if !state.lists.contains_key(&list_id) {
            return Err(StoreError::not_found("List", list_id));
        }

        let liked = if state.likes.remove(&(list_id, user_id)) {
            false
        } else {
            state.likes.insert((list_id, user_id));
            true
        };
        let likes_count = state.likes.iter().filter(|(liked_list, _)| *liked_list == list_id).count() as i64;
        Ok(LikeState { liked, likes_count })
    }

    async fn count_likes(&self, list_id: i64) -> StoreResult<i64> {
        let state = self.state.read().await;
        Ok(state.likes.iter().filter(|(liked_list, _)| *liked_list == list_id).count() as i64)
    }
}
