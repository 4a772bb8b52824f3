//! Like toggle integration tests

use axum::http::{Method, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::assert_error_response;
use crate::common::{TestApp, ALICE, BOB};

async fn app_with_list() -> TestApp {
    let app = TestApp::new();
    app.create_list(ALICE, json!({"list": {"name": "Kyoto"}, "elements": [{"name": "Fushimi Inari"}]}))
        .await;
    app
}

#[tokio::test]
async fn test_toggle_like_twice_restores_state() {
    let app = app_with_list().await;
    let token = app.token_for(ALICE);

    let (status, body) = app.send(Method::POST, "/api/lists/1/like", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"liked": true, "likes_count": 1}));

    let (status, body) = app.send(Method::POST, "/api/lists/1/like", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"liked": false, "likes_count": 0}));
}

#[tokio::test]
async fn test_likes_are_per_user() {
    let app = app_with_list().await;
    let alice = app.token_for(ALICE);
    let bob = app.token_for(BOB);

    app.send(Method::POST, "/api/lists/1/like", Some(&alice), None).await;
    let (_, body) = app.send(Method::POST, "/api/lists/1/like", Some(&bob), None).await;
    assert_eq!(body, json!({"liked": true, "likes_count": 2}));

    let (_, body) = app.send(Method::POST, "/api/lists/1/like", Some(&alice), None).await;
    assert_eq!(body, json!({"liked": false, "likes_count": 1}));

    let (_, list) = app.send(Method::GET, "/api/lists/1", None, None).await;
    assert_eq!(list["likes_count"], json!(1));
}

#[tokio::test]
async fn test_toggle_like_with_body() {
    let app = app_with_list().await;
    let token = app.token_for(BOB);

    let (status, body) = app
        .send(Method::POST, "/api/lists/like", Some(&token), Some(json!({"list_id": 1})))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"liked": true, "likes_count": 1}));

    let (status, body) = app
        .send(Method::POST, "/api/lists/like", Some(&token), Some(json!({"list": {"id": 1}})))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"liked": false, "likes_count": 0}));
}

#[tokio::test]
async fn test_toggle_like_body_without_target() {
    let app = app_with_list().await;
    let token = app.token_for(BOB);

    assert_error_response!(
        app.send(Method::POST, "/api/lists/like", Some(&token), Some(json!({}))).await,
        StatusCode::BAD_REQUEST,
        "list_id is required"
    );
}

#[tokio::test]
async fn test_toggle_like_missing_list() {
    let app = TestApp::new();
    let token = app.token_for(ALICE);

    assert_error_response!(
        app.send(Method::POST, "/api/lists/3/like", Some(&token), None).await,
        StatusCode::NOT_FOUND,
        "List not found"
    );
}

#[tokio::test]
async fn test_like_routes_reject_other_methods() {
    let app = app_with_list().await;
    let token = app.token_for(ALICE);

    for method in [Method::GET, Method::PUT, Method::DELETE, Method::PATCH] {
        for uri in ["/api/lists/1/like", "/api/lists/like"] {
            assert_error_response!(
                app.send(method.clone(), uri, Some(&token), None).await,
                StatusCode::BAD_REQUEST,
                "Invalid request"
            );
        }
    }

    let (_, list) = app.send(Method::GET, "/api/lists/1", None, None).await;
    assert_eq!(list["likes_count"], json!(0));
}

#[tokio::test]
async fn test_deleting_list_drops_its_likes() {
    let app = app_with_list().await;
    let token = app.token_for(ALICE);

    app.send(Method::POST, "/api/lists/1/like", Some(&token), None).await;
    app.send(Method::DELETE, "/api/lists/1", Some(&token), None).await;

    assert_eq!(
        app.send(Method::POST, "/api/lists/1/like", Some(&token), None).await.0,
        StatusCode::NOT_FOUND
    );
}
