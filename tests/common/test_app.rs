//! Test application
//!
//! Builds the full router over an in-memory database and drives it one
//! request at a time with `tower::ServiceExt::oneshot`.

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use goforum::backend::auth::passwords::{PasswordHasher, MIN_BCRYPT_COST};
use goforum::backend::auth::sessions::TokenIssuer;
use goforum::backend::routes::create_router;
use goforum::backend::server::AppState;

use super::auth_helpers::{create_test_user, TestUser, TEST_SECRET};
use super::database::TestDatabase;

/// Captured response
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub body: String,
}

impl TestResponse {
    /// Parse the body as JSON
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.body)
            .unwrap_or_else(|e| panic!("Body is not JSON ({}): {}", e, self.body))
    }
}

/// Full application over a private database
pub struct TestApp {
    pub db: TestDatabase,
    pub state: AppState,
    router: Router,
}

impl TestApp {
    pub async fn new() -> Self {
        let db = TestDatabase::new().await;
        let state = AppState::new(
            db.pool().clone(),
            TokenIssuer::new(TEST_SECRET),
            PasswordHasher::new(MIN_BCRYPT_COST),
        );
        let router = create_router(state.clone());
        Self { db, state, router }
    }

    /// Insert a user without going through `/register`
    pub async fn user(&self, username: &str, email: &str, password: &str) -> TestUser {
        create_test_user(self.db.pool(), self.state.passwords, username, email, password).await
    }

    /// Send a request; `body` is sent as `application/json` when present
    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        body: Option<&str>,
        authorization: Option<&str>,
    ) -> TestResponse {
        let content_type = body.map(|_| "application/json");
        self.send(method, uri, body, content_type, authorization).await
    }

    /// POST `body` with the given `Content-Type`, or none at all
    pub async fn post_with_content_type(
        &self,
        uri: &str,
        body: &str,
        content_type: Option<&str>,
    ) -> TestResponse {
        self.send(Method::POST, uri, Some(body), content_type, None).await
    }

    async fn send(
        &self,
        method: Method,
        uri: &str,
        body: Option<&str>,
        content_type: Option<&str>,
        authorization: Option<&str>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(value) = content_type {
            builder = builder.header(header::CONTENT_TYPE, value);
        }
        if let Some(value) = authorization {
            builder = builder.header(header::AUTHORIZATION, value);
        }
        let request = builder
            .body(body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Router is infallible");

        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read body");

        TestResponse {
            status,
            content_type,
            body: String::from_utf8(bytes.to_vec()).expect("Body is not UTF-8"),
        }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.request(Method::GET, uri, None, None).await
    }

    pub async fn get_with_auth(&self, uri: &str, authorization: &str) -> TestResponse {
        self.request(Method::GET, uri, None, Some(authorization)).await
    }

    pub async fn post(&self, uri: &str, body: &str) -> TestResponse {
        self.request(Method::POST, uri, Some(body), None).await
    }

    pub async fn put(&self, uri: &str, body: &str) -> TestResponse {
        self.request(Method::PUT, uri, Some(body), None).await
    }

    pub async fn delete(&self, uri: &str) -> TestResponse {
        self.request(Method::DELETE, uri, None, None).await
    }
}
