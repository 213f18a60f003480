//! Signup, login, logout, and token handling.

use axum::http::{StatusCode, header};
use chrono::Duration;
use serde_json::json;

use retrolog_auth::jwt::JwtEncoder;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_signup_returns_user_without_hash() {
    let app = TestApp::new().await;
    let response = app
        .request(
            "POST",
            "/api/auth/signup",
            Some(json!({ "username": "ada", "password": "password123" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["success"], true);
    assert_eq!(response.body["data"]["username"], "ada");
    assert!(response.body["data"].get("password_hash").is_none());
}

#[tokio::test]
async fn test_duplicate_signup_is_a_conflict() {
    let app = TestApp::new().await;
    app.signup("ada", "password123").await;

    let response = app
        .request(
            "POST",
            "/api/auth/signup",
            Some(json!({ "username": "ada", "password": "different1" })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), "CONFLICT");
}

#[tokio::test]
async fn test_login_sets_cookie_and_returns_token() {
    let app = TestApp::new().await;
    app.signup("ada", "password123").await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(json!({ "username": "ada", "password": "password123" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["token_type"], "bearer");
    let cookie = response
        .headers
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert!(cookie.starts_with("access_token="));
    assert!(cookie.contains("HttpOnly"));
}

#[tokio::test]
async fn test_login_failures_are_unauthorized() {
    let app = TestApp::new().await;
    app.signup("ada", "password123").await;

    for (username, password) in [("ada", "wrongpass"), ("nobody", "password123")] {
        let response = app
            .request(
                "POST",
                "/api/auth/login",
                Some(json!({ "username": username, "password": password })),
                None,
            )
            .await;
        assert_eq!(response.status, StatusCode::UNAUTHORIZED);
        assert_eq!(response.error_code(), "UNAUTHENTICATED");
    }
}

#[tokio::test]
async fn test_me_with_header_and_cookie() {
    let app = TestApp::new().await;
    let token = app.user_token("ada").await;

    let by_header = app.request("GET", "/api/auth/me", None, Some(&token)).await;
    assert_eq!(by_header.status, StatusCode::OK);
    assert_eq!(by_header.body["data"]["username"], "ada");

    let by_cookie = app.request_with_cookie("GET", "/api/auth/me", &token).await;
    assert_eq!(by_cookie.status, StatusCode::OK);
    assert_eq!(by_cookie.body["data"]["username"], "ada");
}

#[tokio::test]
async fn test_me_rejects_missing_bad_and_expired_tokens() {
    let app = TestApp::new().await;
    app.signup("ada", "password123").await;

    let missing = app.request("GET", "/api/auth/me", None, None).await;
    assert_eq!(missing.status, StatusCode::UNAUTHORIZED);

    let garbage = app
        .request("GET", "/api/auth/me", None, Some("not.a.token"))
        .await;
    assert_eq!(garbage.status, StatusCode::UNAUTHORIZED);

    let expired = JwtEncoder::new(&app.config.auth)
        .issue("ada", Duration::seconds(-60))
        .unwrap()
        .token;
    let response = app.request("GET", "/api/auth/me", None, Some(&expired)).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_token_for_unknown_user_is_rejected() {
    let app = TestApp::new().await;
    let token = JwtEncoder::new(&app.config.auth)
        .issue_default("ghost")
        .unwrap()
        .token;

    let response = app.request("GET", "/api/auth/me", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_logout_clears_cookie() {
    let app = TestApp::new().await;
    let response = app.request("POST", "/api/auth/logout", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    let cookie = response
        .headers
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert!(cookie.starts_with("access_token="));
    assert!(cookie.contains("Max-Age=0") || cookie.contains("Expires="));
}

#[tokio::test]
async fn test_malformed_body_is_a_validation_error() {
    let app = TestApp::new().await;
    let response = app
        .request_raw("POST", "/api/auth/signup", "{ not json")
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), "VALIDATION_ERROR");
}
