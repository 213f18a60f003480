//! Comment endpoints and cascade delete.

use axum::http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

async fn comment(app: &TestApp, token: &str, post_id: i64, content: &str) -> i64 {
    let response = app
        .request(
            "POST",
            &format!("/api/posts/{post_id}/comments"),
            Some(json!({ "content": content })),
            Some(token),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
    response.body["data"]["id"].as_i64().unwrap()
}

#[tokio::test]
async fn test_comments_listed_oldest_first() {
    let app = TestApp::new().await;
    let ada = app.user_token("ada").await;
    let bob = app.user_token("bob").await;
    let post = app.create_post(&ada, "p", "c").await;
    let first = comment(&app, &bob, post, "first").await;
    let second = comment(&app, &ada, post, "second").await;

    let response = app
        .request("GET", &format!("/api/posts/{post}/comments"), None, Some(&bob))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let items = response.body["data"].as_array().unwrap();
    assert_eq!(items[0]["id"], first);
    assert_eq!(items[0]["editable"], true);
    assert_eq!(items[1]["id"], second);
    assert_eq!(items[1]["editable"], false);
}

#[tokio::test]
async fn test_comment_requires_login_and_existing_post() {
    let app = TestApp::new().await;
    let token = app.user_token("ada").await;

    let anonymous = app
        .request(
            "POST",
            "/api/posts/1/comments",
            Some(json!({ "content": "hi" })),
            None,
        )
        .await;
    assert_eq!(anonymous.status, StatusCode::UNAUTHORIZED);

    let missing = app
        .request(
            "POST",
            "/api/posts/999/comments",
            Some(json!({ "content": "hi" })),
            Some(&token),
        )
        .await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);

    let list_missing = app.request("GET", "/api/posts/999/comments", None, None).await;
    assert_eq!(list_missing.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_only_comment_author_may_edit_or_delete() {
    let app = TestApp::new().await;
    let ada = app.user_token("ada").await;
    let bob = app.user_token("bob").await;
    let post = app.create_post(&ada, "ada's post", "c").await;
    let id = comment(&app, &bob, post, "bob was here").await;
    let path = format!("/api/comments/{id}");

    let by_post_author = app
        .request("PUT", &path, Some(json!({ "content": "censored" })), Some(&ada))
        .await;
    assert_eq!(by_post_author.status, StatusCode::FORBIDDEN);
    let delete_by_post_author = app.request("DELETE", &path, None, Some(&ada)).await;
    assert_eq!(delete_by_post_author.status, StatusCode::FORBIDDEN);

    let by_author = app
        .request("PUT", &path, Some(json!({ "content": "edited" })), Some(&bob))
        .await;
    assert_eq!(by_author.status, StatusCode::OK);
    assert_eq!(by_author.body["data"]["content"], "edited");

    let deleted = app.request("DELETE", &path, None, Some(&bob)).await;
    assert_eq!(deleted.status, StatusCode::OK);
    let again = app.request("DELETE", &path, None, Some(&bob)).await;
    assert_eq!(again.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_comment_can_be_emptied_by_author_only() {
    let app = TestApp::new().await;
    let ada = app.user_token("ada").await;
    let bob = app.user_token("bob").await;
    let post = app.create_post(&ada, "p", "c").await;
    let id = comment(&app, &bob, post, "regret").await;
    let path = format!("/api/comments/{id}");

    let by_other = app
        .request("PUT", &path, Some(json!({ "content": "" })), Some(&ada))
        .await;
    assert_eq!(by_other.status, StatusCode::FORBIDDEN);

    let by_author = app
        .request("PUT", &path, Some(json!({ "content": "" })), Some(&bob))
        .await;
    assert_eq!(by_author.status, StatusCode::OK, "{:?}", by_author.body);
    assert_eq!(by_author.body["data"]["content"], "");

    let listed = app
        .request("GET", &format!("/api/posts/{post}/comments"), None, None)
        .await;
    assert_eq!(listed.body["data"][0]["content"], "");
}

#[tokio::test]
async fn test_deleting_post_removes_only_its_comments() {
    let app = TestApp::new().await;
    let ada = app.user_token("ada").await;
    let doomed = app.create_post(&ada, "doomed", "c").await;
    let kept = app.create_post(&ada, "kept", "c").await;
    let orphan = comment(&app, &ada, doomed, "a").await;
    comment(&app, &ada, kept, "b").await;

    let response = app
        .request("DELETE", &format!("/api/posts/{doomed}"), None, Some(&ada))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let gone = app
        .request(
            "PUT",
            &format!("/api/comments/{orphan}"),
            Some(json!({ "content": "x" })),
            Some(&ada),
        )
        .await;
    assert_eq!(gone.status, StatusCode::NOT_FOUND);

    let remaining = app
        .request("GET", &format!("/api/posts/{kept}/comments"), None, None)
        .await;
    assert_eq!(remaining.body["data"].as_array().unwrap().len(), 1);
}
