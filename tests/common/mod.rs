//! Common test utilities and helpers
//!
//! This module provides shared utilities for all tests including:
//! - Database test fixtures
//! - Authentication test helpers
//! - A `TestApp` that drives the full router in-process
//! - Response assertions

#![allow(dead_code)]

pub mod assertions;
pub mod auth_helpers;
pub mod database;

use axum::{
    body::Body,
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use restaurant_orders::backend::server::create_app_with_pool;
use serde_json::Value;
use sqlx::SqlitePool;
use tower::ServiceExt;

// Re-export commonly used utilities
pub use assertions::*;
pub use auth_helpers::*;
pub use database::*;

/// The full application over a private in-memory database
pub struct TestApp {
    router: Router,
    pub db: TestDatabase,
}

/// Status, headers and JSON body of one response
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

impl TestResponse {
    /// The `Set-Cookie` header, if the response has one
    pub fn set_cookie(&self) -> Option<&str> {
        self.headers
            .get(header::SET_COOKIE)
            .and_then(|value| value.to_str().ok())
    }
}

impl TestApp {
    pub async fn new() -> Self {
        let db = TestDatabase::new().await;
        let router = create_app_with_pool(test_config(), db.pool().clone());
        Self { router, db }
    }

    pub fn pool(&self) -> &SqlitePool {
        self.db.pool()
    }

    /// Send one request through the router
    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        body: Option<Value>,
        cookie: Option<&str>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("valid request");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("readable body");
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or_else(|_| {
                Value::String(String::from_utf8_lossy(&bytes).into_owned())
            })
        };

        TestResponse {
            status,
            headers,
            body,
        }
    }

    pub async fn get(&self, uri: &str, cookie: Option<&str>) -> TestResponse {
        self.send(Method::GET, uri, None, cookie).await
    }

    pub async fn post(&self, uri: &str, body: Value, cookie: Option<&str>) -> TestResponse {
        self.send(Method::POST, uri, Some(body), cookie).await
    }

    pub async fn patch(&self, uri: &str, body: Value, cookie: Option<&str>) -> TestResponse {
        self.send(Method::PATCH, uri, Some(body), cookie).await
    }

    pub async fn delete(&self, uri: &str, cookie: Option<&str>) -> TestResponse {
        self.send(Method::DELETE, uri, None, cookie).await
    }

    /// Register through the API and return the session cookie
    pub async fn register(&self, email: &str, password: &str) -> (TestResponse, String) {
        let response = self
            .post(
                "/auth/register",
                serde_json::json!({ "email": email, "password": password }),
                None,
            )
            .await;
        let token = response
            .set_cookie()
            .and_then(token_from_set_cookie)
            .expect("register sets the session cookie")
            .to_string();
        (response, format!("Authorization={}", token))
    }

    /// Create a restaurant through the API
    pub async fn create_restaurant(&self, cookie: &str, email: &str, street: &str) -> TestResponse {
        self.post(
            "/restaurants",
            serde_json::json!({
                "name": "Trattoria",
                "email": email,
                "phone": "555-0100",
                "address": { "street": street, "city": "Rome", "region": "Lazio" }
            }),
            Some(cookie),
        )
        .await
    }
}
