//! Property-based tests for list creation and the like toggle

use std::collections::HashSet;

use proptest::prelude::*;
use serde_json::{json, Value};
use tokio::runtime::Runtime;
use travel_lists::backend::lists::service;
use travel_lists::backend::lists::MemoryListStore;
use travel_lists::backend::middleware::AuthenticatedUser;
use travel_lists::shared::lists::ListWriteRequest;

const USERS: [i64; 4] = [1, 2, 3, 4];

fn runtime() -> Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap()
}

fn element_name() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z ]{0,30}"
}

fn invalid_element() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(json!({})),
        Just(json!({"name": ""})),
        Just(json!({"name": "   "})),
        Just(json!({"name": null})),
        Just(json!({"name": 12})),
        Just(json!("Museum")),
        Just(json!({"name": "x".repeat(256)})),
    ]
}

fn create_request(elements: Vec<Value>) -> ListWriteRequest {
    serde_json::from_value(json!({"list": {"name": "Trip"}, "elements": elements})).unwrap()
}

proptest! {
    #[test]
    fn test_valid_elements_are_all_created(names in prop::collection::vec(element_name(), 1..10)) {
        let store = MemoryListStore::with_users(USERS);
        let user = AuthenticatedUser { user_id: 1 };
        let elements = names.iter().map(|name| json!({"name": name})).collect();

        let created = runtime()
            .block_on(service::create_list_with_elements(&store, &user, create_request(elements)))
            .unwrap();

        prop_assert_eq!(created.elements.len(), names.len());
        prop_assert!(created.elements.iter().all(|e| e.tlist == created.list.id));
        prop_assert!(created.rejected.is_empty());
    }

    #[test]
    fn test_one_invalid_element_is_skipped(
        names in prop::collection::vec(element_name(), 1..10),
        invalid in invalid_element(),
        position in any::<prop::sample::Index>(),
    ) {
        let store = MemoryListStore::with_users(USERS);
        let user = AuthenticatedUser { user_id: 1 };
        let mut elements: Vec<Value> = names.iter().map(|name| json!({"name": name})).collect();
        let index = position.index(elements.len() + 1);
        elements.insert(index, invalid.clone());

        let created = runtime()
            .block_on(service::create_list_with_elements(&store, &user, create_request(elements)))
            .unwrap();

        prop_assert_eq!(created.elements.len(), names.len());
        prop_assert_eq!(created.rejected.len(), 1);
        prop_assert_eq!(created.rejected[0].index, index);
        prop_assert_eq!(&created.rejected[0].input, &invalid);
    }

    #[test]
    fn test_like_count_tracks_odd_toggles(toggles in prop::collection::vec(prop::sample::select(USERS.to_vec()), 0..40)) {
        let store = MemoryListStore::with_users(USERS);
        let author = AuthenticatedUser { user_id: 1 };
        let rt = runtime();

        let list_id = rt
            .block_on(service::create_list_with_elements(
                &store,
                &author,
                create_request(vec![json!({"name": "Museum"})]),
            ))
            .unwrap()
            .list
            .id;

        let mut liked = HashSet::new();
        for user_id in toggles {
            let response = rt
                .block_on(service::toggle_like(&store, &AuthenticatedUser { user_id }, list_id))
                .unwrap();
            let now_liked = liked.insert(user_id) || !liked.remove(&user_id);
            prop_assert_eq!(response.liked, now_liked);
            prop_assert_eq!(response.likes_count, liked.len() as i64);
        }

        let list = rt.block_on(service::get_list_with_elements(&store, list_id)).unwrap();
        prop_assert_eq!(list.likes_count, liked.len() as i64);
    }

    #[test]
    fn test_toggle_twice_is_identity(user_id in prop::sample::select(USERS.to_vec()), prior in prop::collection::vec(prop::sample::select(USERS.to_vec()), 0..10)) {
        let store = MemoryListStore::with_users(USERS);
        let rt = runtime();
        let user = AuthenticatedUser { user_id };

        let list_id = rt
            .block_on(service::create_list_with_elements(
                &store,
                &user,
                create_request(vec![json!({"name": "Museum"})]),
            ))
            .unwrap()
            .list
            .id;
        for other in prior {
            rt.block_on(service::toggle_like(&store, &AuthenticatedUser { user_id: other }, list_id)).unwrap();
        }
        let before = rt.block_on(service::get_list_with_elements(&store, list_id)).unwrap().likes_count;

        let first = rt.block_on(service::toggle_like(&store, &user, list_id)).unwrap();
        let second = rt.block_on(service::toggle_like(&store, &user, list_id)).unwrap();

        prop_assert_eq!(first.liked, !second.liked);
        prop_assert_eq!(second.likes_count, before);
    }
}
