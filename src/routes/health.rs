// ABOUTME: Health check route handlers for service monitoring and status endpoints
// ABOUTME: Reports proxy liveness and configuration without contacting the RAG backend
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Health check routes for service monitoring
//!
//! These describe the proxy process only. Backend reachability is observable
//! through the `x-rag-backend-status` header on the chat endpoints.

use crate::constants::service_names;
use crate::resources::ProxyResources;
use axum::{extract::State, routing::get, Json, Router};
use std::sync::Arc;

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create all health check routes
    pub fn routes(resources: Arc<ProxyResources>) -> Router {
        async fn health_handler(
            State(resources): State<Arc<ProxyResources>>,
        ) -> Json<serde_json::Value> {
            Json(serde_json::json!({
                "status": "healthy",
                "service": service_names::RAG_CHATKIT_PROXY,
                "version": env!("CARGO_PKG_VERSION"),
                "environment": resources.environment.to_string(),
                "backend_url": resources.backend.base_url(),
                "timestamp": chrono::Utc::now().to_rfc3339()
            }))
        }

        async fn ready_handler() -> Json<serde_json::Value> {
            Json(serde_json::json!({
                "status": "ready",
                "timestamp": chrono::Utc::now().to_rfc3339()
            }))
        }

        Router::new()
            .route("/health", get(health_handler))
            .route("/ready", get(ready_handler))
            .with_state(resources)
    }
}
