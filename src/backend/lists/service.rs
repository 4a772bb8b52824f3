//! List operations
//!
//! Each operation validates its whole input before touching the store and
//! then hands the store a single atomic write. Per-element failures follow
//! the request's `ElementErrorPolicy`: creation defaults to `Skip`, update
//! defaults to `RejectAll`.

use serde_json::{Map, Value};

use crate::backend::error::BackendError;
use crate::backend::lists::store::{ElementWrite, ListStore};
use crate::backend::lists::validation::{
    expect_object, validate_element_patch, validate_list_patch, validate_new_element, validate_new_list, ElementEntry,
};
use crate::backend::middleware::AuthenticatedUser;
use crate::shared::error::FieldErrors;
use crate::shared::lists::{
    ElementErrorPolicy, ListWithElements, ListWriteRequest, ListWriteResponse, RejectedElement, ToggleLikeResponse,
};

/// Valid entries and the ones set aside, under one policy
struct ElementOutcomes<T> {
    policy: ElementErrorPolicy,
    accepted: Vec<T>,
    rejected: Vec<RejectedElement>,
}

impl<T> ElementOutcomes<T> {
    fn new(policy: ElementErrorPolicy) -> Self {
        Self { policy, accepted: Vec::new(), rejected: Vec::new() }
    }

    /// Record one entry's outcome; under `RejectAll` a failure ends the call
    fn record(&mut self, index: usize, input: Value, outcome: Result<T, FieldErrors>) -> Result<(), BackendError> {
        match outcome {
            Ok(write) => self.accepted.push(write),
            Err(errors) => {
                tracing::warn!("Element entry {} rejected: {:?}", index, errors);
                if self.policy == ElementErrorPolicy::RejectAll {
                    return Err(BackendError::ValidationFailed(errors));
                }
                self.rejected.push(RejectedElement { index, input, errors });
            }
        }
        Ok(())
    }
}

/// The `list` part of a write request as an object; absent or null is empty
fn list_fields(list: Option<Value>) -> Result<Map<String, Value>, FieldErrors> {
    match list {
        None | Some(Value::Null) => Ok(Map::new()),
        Some(value) => expect_object(&value),
    }
}

fn warn_list_rejected(user: &AuthenticatedUser, errors: &FieldErrors) {
    tracing::warn!("List fields from user {} rejected: {:?}", user.user_id, errors);
}

/// Create a list together with its elements
///
/// The author is always the caller. Fails with `EmptyElementSet` when no
/// element entry is given, whatever the list fields look like. Under the
/// `Skip` policy invalid entries are reported in `rejected`; if none
/// survives the call fails and nothing is written.
pub async fn create_list_with_elements(
    store: &dyn ListStore,
    user: &AuthenticatedUser,
    request: ListWriteRequest,
) -> Result<ListWriteResponse, BackendError> {
    let entries = match request.elements {
        Some(entries) if !entries.is_empty() => entries,
        _ => return Err(BackendError::EmptyElementSet),
    };

    let list = list_fields(request.list)
        .and_then(|mut fields| {
            fields.insert("author".to_string(), Value::from(user.user_id));
            validate_new_list(&fields)
        })
        .inspect_err(|errors| warn_list_rejected(user, errors))?;

    let mut outcomes = ElementOutcomes::new(request.on_element_error.unwrap_or(ElementErrorPolicy::Skip));
    for (index, raw) in entries.into_iter().enumerate() {
        let outcome = ElementEntry::parse(&raw).and_then(|entry| match entry {
            ElementEntry::Create(fields) => validate_new_element(&fields),
            ElementEntry::Update { .. } => Err(FieldErrors::single(
                "id",
                "Cannot reference an existing element when creating a list.",
            )),
        });
        outcomes.record(index, raw, outcome)?;
    }

    if outcomes.accepted.is_empty() {
        let errors = outcomes.rejected.into_iter().next().map(|r| r.errors).unwrap_or_default();
        tracing::warn!("No valid element for new list from user {}", user.user_id);
        return Err(BackendError::ValidationFailed(errors));
    }

    let (list, elements) = store.create_list(list, outcomes.accepted).await?;
    tracing::info!(
        "User {} created list {} with {} element(s), {} rejected",
        user.user_id,
        list.id,
        elements.len(),
        outcomes.rejected.len()
    );

    Ok(ListWriteResponse { list, elements, rejected: outcomes.rejected })
}

/// Fetch a list with its elements nested under it
pub async fn get_list_with_elements(store: &dyn ListStore, list_id: i64) -> Result<ListWithElements, BackendError> {
    let list = store
        .get_list(list_id)
        .await?
        .ok_or_else(|| BackendError::not_found("List", list_id))?;
    let elements = store.list_elements(list_id).await?;
    let likes_count = store.count_likes(list_id).await?;

    Ok(ListWithElements { list, likes_count, elements })
}

/// Partially update a list and create or update its elements
///
/// Entries with an `id` patch the element with that ID in this list;
/// entries without one create a new element. Under the default
/// `RejectAll` policy the first invalid entry fails the call with that
/// entry's field errors and nothing is written.
pub async fn update_list(
    store: &dyn ListStore,
    user: &AuthenticatedUser,
    list_id: i64,
    request: ListWriteRequest,
) -> Result<ListWriteResponse, BackendError> {
    let existing = store
        .get_list(list_id)
        .await?
        .ok_or_else(|| BackendError::not_found("List", list_id))?;

    let list = list_fields(request.list)
        .and_then(|patch| validate_list_patch(existing, &patch))
        .inspect_err(|errors| warn_list_rejected(user, errors))?;

    let mut outcomes = ElementOutcomes::new(request.on_element_error.unwrap_or(ElementErrorPolicy::RejectAll));
    for (index, raw) in request.elements.unwrap_or_default().into_iter().enumerate() {
        let outcome = match ElementEntry::parse(&raw) {
            Ok(ElementEntry::Create(fields)) => validate_new_element(&fields).map(ElementWrite::Create),
            Ok(ElementEntry::Update { id, fields }) => match store.get_element(list_id, id).await? {
                Some(element) => validate_element_patch(element, &fields).map(ElementWrite::Update),
                None => Err(FieldErrors::single(
                    "id",
                    format!("Element {} does not exist in list {}.", id, list_id),
                )),
            },
            Err(errors) => Err(errors),
        };
        outcomes.record(index, raw, outcome)?;
    }

    let (list, elements) = store.update_list(list, outcomes.accepted).await?;
    tracing::info!(
        "User {} updated list {}: {} element write(s), {} rejected",
        user.user_id,
        list.id,
        elements.len(),
        outcomes.rejected.len()
    );

    Ok(ListWriteResponse { list, elements, rejected: outcomes.rejected })
}

/// Delete a list; its elements and likes go with it
pub async fn delete_list(store: &dyn ListStore, user: &AuthenticatedUser, list_id: i64) -> Result<(), BackendError> {
    if !store.delete_list(list_id).await? {
        return Err(BackendError::not_found("List", list_id));
    }
    tracing::info!("User {} deleted list {}", user.user_id, list_id);
    Ok(())
}

/// Like the list if the caller does not yet, unlike it otherwise
pub async fn toggle_like(
    store: &dyn ListStore,
    user: &AuthenticatedUser,
    list_id: i64,
) -> Result<ToggleLikeResponse, BackendError> {
    let state = store.toggle_like(list_id, user.user_id).await?;
    tracing::debug!("User {} like on list {}: {}", user.user_id, list_id, state.liked);
    Ok(ToggleLikeResponse { liked: state.liked, likes_count: state.likes_count })
}
