//! Post endpoints: listing, CRUD, ownership, search, and authors.

use axum::http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_create_requires_login() {
    let app = TestApp::new().await;
    let response = app
        .request(
            "POST",
            "/api/posts",
            Some(json!({ "title": "t", "content": "c" })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_create_and_read_back() {
    let app = TestApp::new().await;
    let token = app.user_token("ada").await;

    let response = app
        .request(
            "POST",
            "/api/posts",
            Some(json!({ "title": "Hello", "content": "World", "tags": ["retro", "html"] })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
    let id = response.body["data"]["id"].as_i64().unwrap();

    let anonymous = app.request("GET", &format!("/api/posts/{id}"), None, None).await;
    assert_eq!(anonymous.status, StatusCode::OK);
    assert_eq!(anonymous.body["data"]["author"], "ada");
    assert_eq!(anonymous.body["data"]["tags"], json!(["retro", "html"]));
    assert_eq!(anonymous.body["data"]["editable"], false);

    let owner = app
        .request("GET", &format!("/api/posts/{id}"), None, Some(&token))
        .await;
    assert_eq!(owner.body["data"]["editable"], true);
}

#[tokio::test]
async fn test_empty_tags_round_trip_as_empty_array() {
    let app = TestApp::new().await;
    let token = app.user_token("ada").await;

    let response = app
        .request(
            "POST",
            "/api/posts",
            Some(json!({ "title": "No tags", "content": "c" })),
            Some(&token),
        )
        .await;
    assert_eq!(response.body["data"]["tags"], json!([]));
}

#[tokio::test]
async fn test_list_is_newest_first_and_editable_per_viewer() {
    let app = TestApp::new().await;
    let ada = app.user_token("ada").await;
    let bob = app.user_token("bob").await;
    let first = app.create_post(&ada, "first", "c").await;
    let second = app.create_post(&bob, "second", "c").await;

    let response = app.request("GET", "/api/posts", None, Some(&ada)).await;
    let posts = response.body["data"].as_array().unwrap();
    assert_eq!(posts[0]["id"], second);
    assert_eq!(posts[0]["editable"], false);
    assert_eq!(posts[1]["id"], first);
    assert_eq!(posts[1]["editable"], true);
}

#[tokio::test]
async fn test_missing_post_and_bad_id() {
    let app = TestApp::new().await;
    let missing = app.request("GET", "/api/posts/999", None, None).await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);

    let bad = app.request("GET", "/api/posts/abc", None, None).await;
    assert_eq!(bad.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_owner_can_update_partially() {
    let app = TestApp::new().await;
    let token = app.user_token("ada").await;
    let id = app.create_post(&token, "Old title", "Body").await;

    let response = app
        .request(
            "PUT",
            &format!("/api/posts/{id}"),
            Some(json!({ "title": "New title", "tags": [] })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["title"], "New title");
    assert_eq!(response.body["data"]["content"], "Body");
    assert_eq!(response.body["data"]["tags"], json!([]));
}

#[tokio::test]
async fn test_non_owner_is_forbidden_and_post_unchanged() {
    let app = TestApp::new().await;
    let ada = app.user_token("ada").await;
    let bob = app.user_token("bob").await;
    let id = app.create_post(&ada, "Mine", "Body").await;
    let path = format!("/api/posts/{id}");

    let update = app
        .request("PUT", &path, Some(json!({ "title": "Hijacked" })), Some(&bob))
        .await;
    assert_eq!(update.status, StatusCode::FORBIDDEN);

    let delete = app.request("DELETE", &path, None, Some(&bob)).await;
    assert_eq!(delete.status, StatusCode::FORBIDDEN);

    let after = app.request("GET", &path, None, None).await;
    assert_eq!(after.body["data"]["title"], "Mine");
}

#[tokio::test]
async fn test_owner_can_clear_content() {
    let app = TestApp::new().await;
    let token = app.user_token("ada").await;
    let id = app.create_post(&token, "Title", "Body").await;
    let path = format!("/api/posts/{id}");

    let response = app
        .request("PUT", &path, Some(json!({ "content": "" })), Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    assert_eq!(response.body["data"]["content"], "");
    assert_eq!(response.body["data"]["title"], "Title");

    let stored = app.request("GET", &path, None, None).await;
    assert_eq!(stored.body["data"]["content"], "");
}

#[tokio::test]
async fn test_non_owner_with_invalid_update_is_forbidden() {
    let app = TestApp::new().await;
    let ada = app.user_token("ada").await;
    let bob = app.user_token("bob").await;
    let id = app.create_post(&ada, "Mine", "Body").await;
    let path = format!("/api/posts/{id}");

    let empty_title = app
        .request("PUT", &path, Some(json!({ "title": "" })), Some(&bob))
        .await;
    assert_eq!(empty_title.status, StatusCode::FORBIDDEN);
    assert_eq!(empty_title.error_code(), "FORBIDDEN");

    let long_title = app
        .request("PUT", &path, Some(json!({ "title": "x".repeat(201) })), Some(&bob))
        .await;
    assert_eq!(long_title.status, StatusCode::FORBIDDEN);

    let by_owner = app
        .request("PUT", &path, Some(json!({ "title": "x".repeat(201) })), Some(&ada))
        .await;
    assert_eq!(by_owner.status, StatusCode::BAD_REQUEST);
    assert_eq!(by_owner.error_code(), "VALIDATION_ERROR");
    assert_eq!(by_owner.body["message"], "Title must be at most 200 characters");
}

#[tokio::test]
async fn test_owner_delete() {
    let app = TestApp::new().await;
    let token = app.user_token("ada").await;
    let id = app.create_post(&token, "t", "c").await;
    let path = format!("/api/posts/{id}");

    let response = app.request("DELETE", &path, None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::OK);

    let gone = app.request("GET", &path, None, None).await;
    assert_eq!(gone.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_title_validation() {
    let app = TestApp::new().await;
    let token = app.user_token("ada").await;

    let response = app
        .request(
            "POST",
            "/api/posts",
            Some(json!({ "title": "x".repeat(201), "content": "c" })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), "VALIDATION_ERROR");
    let message = response.body["message"].as_str().unwrap();
    assert!(message.contains("Title must be 1 to 200 characters"), "{message}");
}

#[tokio::test]
async fn test_search_is_case_sensitive_substring() {
    let app = TestApp::new().await;
    let token = app.user_token("ada").await;
    let a = app.create_post(&token, "My blog", "hello").await;
    app.create_post(&token, "Other", "nothing").await;
    let c = app.create_post(&token, "Notes", "about my blog").await;

    let hits = app.request("GET", "/api/search?q=blog", None, None).await;
    assert_eq!(hits.status, StatusCode::OK);
    let ids: Vec<i64> = hits.body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![c, a]);

    let none = app.request("GET", "/api/search?q=BLOG", None, None).await;
    assert_eq!(none.body["data"], json!([]));

    let missing = app.request("GET", "/api/search", None, None).await;
    assert_eq!(missing.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_posts_by_author() {
    let app = TestApp::new().await;
    let ada = app.user_token("ada").await;
    let bob = app.user_token("bob").await;
    app.create_post(&ada, "a1", "c").await;
    app.create_post(&bob, "b1", "c").await;

    let response = app.request("GET", "/api/authors/ada/posts", None, None).await;
    let posts = response.body["data"].as_array().unwrap();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0]["author"], "ada");

    let nobody = app.request("GET", "/api/authors/nobody/posts", None, None).await;
    assert_eq!(nobody.status, StatusCode::OK);
    assert_eq!(nobody.body["data"], json!([]));
}

#[tokio::test]
async fn test_health() {
    let app = TestApp::new().await;
    let response = app.request("GET", "/api/health", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["status"], "ok");
    assert_eq!(response.body["data"]["database"], "connected");
}
