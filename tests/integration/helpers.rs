//! Shared test helpers for integration tests.

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode, header};
use serde_json::{Value, json};
use tower::ServiceExt;

use retrolog_api::{AppState, build_app};
use retrolog_core::config::AppConfig;
use retrolog_database::testing::TestDatabase;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Application config
    pub config: AppConfig,
    _db: TestDatabase,
}

impl TestApp {
    /// Create a new test application over a fresh database
    pub async fn new() -> Self {
        let db = TestDatabase::new().await;

        let mut config = AppConfig::default();
        config.auth.jwt_secret = "integration-test-secret".to_string();

        let router = build_app(AppState::new(config.clone(), db.pool()), &config.server.cors);

        Self {
            router,
            config,
            _db: db,
        }
    }

    /// Sign up a user through the API and return its id
    pub async fn signup(&self, username: &str, password: &str) -> i64 {
        let response = self
            .request(
                "POST",
                "/api/auth/signup",
                Some(json!({ "username": username, "password": password })),
                None,
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
        response.body["data"]["id"].as_i64().expect("user id")
    }

    /// Login and return the access token
    pub async fn login(&self, username: &str, password: &str) -> String {
        let response = self
            .request(
                "POST",
                "/api/auth/login",
                Some(json!({ "username": username, "password": password })),
                None,
            )
            .await;
        assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
        response.body["data"]["access_token"]
            .as_str()
            .expect("access token")
            .to_string()
    }

    /// Sign up and log in, returning the token
    pub async fn user_token(&self, username: &str) -> String {
        self.signup(username, "password123").await;
        self.login(username, "password123").await
    }

    /// Create a post and return its id
    pub async fn create_post(&self, token: &str, title: &str, content: &str) -> i64 {
        let response = self
            .request(
                "POST",
                "/api/posts",
                Some(json!({ "title": title, "content": content, "tags": ["retro"] })),
                Some(token),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
        response.body["data"]["id"].as_i64().expect("post id")
    }

    /// Make an HTTP request with an optional bearer token
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let mut req = Request::builder().method(method).uri(path);
        if let Some(token) = token {
            req = req.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        self.send(req, body).await
    }

    /// Make an HTTP request carrying the token as a cookie
    pub async fn request_with_cookie(&self, method: &str, path: &str, token: &str) -> TestResponse {
        let req = Request::builder()
            .method(method)
            .uri(path)
            .header(
                header::COOKIE,
                format!("{}={token}", self.config.auth.cookie_name),
            );
        self.send(req, None).await
    }

    /// Send a raw body with a JSON content type
    pub async fn request_raw(&self, method: &str, path: &str, raw: &'static str) -> TestResponse {
        let req = Request::builder()
            .method(method)
            .uri(path)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(raw))
            .expect("Failed to build request");
        self.dispatch(req).await
    }

    async fn send(&self, req: axum::http::request::Builder, body: Option<Value>) -> TestResponse {
        let req = match body {
            Some(b) => req
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(b.to_string())),
            None => req.body(Body::empty()),
        }
        .expect("Failed to build request");
        self.dispatch(req).await
    }

    async fn dispatch(&self, req: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            headers,
            body,
        }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Parsed JSON body
    pub body: Value,
}

impl TestResponse {
    /// The `error` code of an error body
    pub fn error_code(&self) -> &str {
        self.body["error"].as_str().unwrap_or_default()
    }
}
