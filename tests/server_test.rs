// ABOUTME: Integration tests for router assembly, health endpoints, and middleware
// ABOUTME: Verifies request-id propagation and that CORS exposes the offline marker header
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;
mod helpers;

use axum::http::StatusCode;
use common::{create_test_router, create_test_router_for_env, unreachable_backend_url};
use helpers::axum_test::AxumTestRequest;
use serde_json::Value;

#[tokio::test]
async fn test_health_reports_configuration_without_backend() {
    let backend_url = unreachable_backend_url();
    let response = AxumTestRequest::get("/health")
        .send(create_test_router_for_env(&backend_url, "testing"))
        .await
        .assert_status(StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "rag-chatkit-proxy");
    assert_eq!(body["environment"], "testing");
    assert_eq!(body["backend_url"], backend_url);
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn test_ready_endpoint() {
    let response = AxumTestRequest::get("/ready")
        .send(create_test_router(&unreachable_backend_url()))
        .await
        .assert_status(StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["status"], "ready");
}

#[tokio::test]
async fn test_request_id_is_generated_and_echoed() {
    let router = create_test_router(&unreachable_backend_url());
    let response = AxumTestRequest::get("/health").send(router).await;
    assert!(response.header("x-request-id").is_some_and(|id| !id.is_empty()));

    let router = create_test_router(&unreachable_backend_url());
    let response = AxumTestRequest::get("/health")
        .header("x-request-id", "req-123")
        .send(router)
        .await;
    assert_eq!(response.header("x-request-id"), Some("req-123"));
}

#[tokio::test]
async fn test_cors_exposes_backend_status_header() {
    let response = AxumTestRequest::get("/health")
        .header("origin", "http://localhost:3001")
        .send(create_test_router(&unreachable_backend_url()))
        .await
        .assert_status(StatusCode::OK);

    assert_eq!(response.header("access-control-allow-origin"), Some("*"));
    let exposed = response
        .header("access-control-expose-headers")
        .unwrap()
        .to_lowercase();
    assert!(exposed.contains("x-rag-backend-status"));
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    AxumTestRequest::get("/api/unknown")
        .send(create_test_router(&unreachable_backend_url()))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}
