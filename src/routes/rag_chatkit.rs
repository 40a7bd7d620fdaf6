// ABOUTME: ChatKit proxy route handlers for the generic, bootstrap, and session-state endpoints
// ABOUTME: Bootstrap and state degrade to offline payloads; the generic route surfaces raw errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! ChatKit routes
//!
//! - `POST /api/rag-chatkit` and `GET /api/rag-chatkit[/*]` forward verbatim
//!   and report backend failures as structured errors (no fallback).
//! - `GET /api/rag-chatkit/bootstrap` and `GET /api/rag-chatkit/state` always
//!   answer 200 when the backend is down or erroring, with an offline payload.

use super::relay::{parse_json_body, parse_query, resolve_passthrough, resolve_with_fallback};
use crate::chatkit::{build_offline_bootstrap_state, build_offline_state_response, StateQuery};
use crate::constants::backend_paths;
use crate::errors::AppResult;
use crate::resources::ProxyResources;
use axum::{
    body::Bytes,
    extract::{RawQuery, State},
    http::Uri,
    response::Response,
    routing::{get, post},
    Router,
};
use serde_json::Value;
use std::sync::Arc;
use tracing::info;

/// Path prefix of the generic ChatKit routes on this proxy
const ROUTE_PREFIX: &str = "/api/rag-chatkit";

/// ChatKit routes handler
pub struct RagChatKitRoutes;

impl RagChatKitRoutes {
    /// Create all ChatKit proxy routes
    pub fn routes(resources: Arc<ProxyResources>) -> Router {
        Router::new()
            .route(
                ROUTE_PREFIX,
                post(Self::handle_chatkit_post).get(Self::handle_chatkit_get),
            )
            .route("/api/rag-chatkit/bootstrap", get(Self::handle_bootstrap))
            .route("/api/rag-chatkit/state", get(Self::handle_state))
            .route("/api/rag-chatkit/*path", get(Self::handle_chatkit_get))
            .with_state(resources)
    }

    /// Forward an arbitrary JSON body to the backend ChatKit endpoint
    async fn handle_chatkit_post(
        State(resources): State<Arc<ProxyResources>>,
        body: Bytes,
    ) -> AppResult<Response> {
        let payload: Value = parse_json_body(&body)?;
        info!("Forwarding ChatKit request to RAG backend");

        let result = resources
            .backend
            .post_json(backend_paths::RAG_CHATKIT, &payload)
            .await;
        Ok(resolve_passthrough(&resources, "rag-chatkit", result))
    }

    /// Forward a GET under `/api/rag-chatkit`, preserving subpath and query
    async fn handle_chatkit_get(
        State(resources): State<Arc<ProxyResources>>,
        uri: Uri,
        RawQuery(query): RawQuery,
    ) -> Response {
        let subpath = uri.path().strip_prefix(ROUTE_PREFIX).unwrap_or_default();
        let backend_path = format!("{}{subpath}", backend_paths::RAG_CHATKIT);
        info!(backend_path = %backend_path, "Forwarding ChatKit GET to RAG backend");

        let result = resources
            .backend
            .get(&backend_path, query.as_deref())
            .await;
        resolve_passthrough(&resources, "rag-chatkit", result)
    }

    /// Fetch bootstrap state, degrading to the offline bootstrap payload
    async fn handle_bootstrap(State(resources): State<Arc<ProxyResources>>) -> Response {
        let result = resources
            .backend
            .get(backend_paths::RAG_CHATKIT_BOOTSTRAP, None)
            .await;
        resolve_with_fallback(
            &resources,
            "rag-chatkit/bootstrap",
            result,
            build_offline_bootstrap_state,
            |live| live,
        )
    }

    /// Fetch session state for a thread, degrading to the offline state payload
    async fn handle_state(
        State(resources): State<Arc<ProxyResources>>,
        uri: Uri,
    ) -> AppResult<Response> {
        let query: StateQuery = parse_query(&uri)?;
        let thread_id = query.required_thread_id()?;

        let result = resources
            .backend
            .get_with_params(backend_paths::RAG_CHATKIT_STATE, &[("thread_id", thread_id)])
            .await;
        Ok(resolve_with_fallback(
            &resources,
            "rag-chatkit/state",
            result,
            || build_offline_state_response(thread_id),
            |live| live,
        ))
    }
}
