//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use couponlab_api::AppState;
use couponlab_core::config::AppConfig;
use couponlab_core::types::RemainingUses;
use couponlab_engine::pacer::GatePacer;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Shared state, for inspecting the inventory directly
    pub state: AppState,
}

impl TestApp {
    /// Default catalog; suspension points only yield.
    pub fn new() -> Self {
        Self::with_pacer(GatePacer::new())
    }

    /// Default catalog with a custom pacer.
    pub fn with_pacer(pacer: GatePacer) -> Self {
        let (router, state) = couponlab_api::build_app(AppConfig::default(), Arc::new(pacer))
            .expect("Failed to build app");
        Self { router, state }
    }

    /// Live remaining uses of `code`
    pub fn remaining(&self, code: &str) -> RemainingUses {
        self.state
            .engine
            .inventory()
            .get(code)
            .expect("Unknown coupon")
            .uses
    }

    /// POST a coupon code to `path` as `client`
    pub async fn apply(&self, path: &str, code: &str, client: &str) -> TestResponse {
        self.request(
            "POST",
            path,
            Some(serde_json::json!({ "code": code })),
            Some(client),
        )
        .await
    }

    /// Make a JSON request against the router
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        client: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        self.raw_request(method, path, Some("application/json"), body_str, client)
            .await
    }

    /// Make a request with an arbitrary body and optional Content-Type
    pub async fn raw_request(
        &self,
        method: &str,
        path: &str,
        content_type: Option<&str>,
        body: impl Into<Body>,
        client: Option<&str>,
    ) -> TestResponse {
        let mut req = Request::builder().method(method).uri(path);

        if let Some(content_type) = content_type {
            req = req.header("Content-Type", content_type);
        }
        if let Some(client) = client {
            req = req.header("X-Forwarded-For", client);
        }

        let req = req.body(body.into()).expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}
