// ABOUTME: Simple (non-streaming) RAG chat route with offline demo-mode fallback
// ABOUTME: Validates the message, forwards to the backend once, and never surfaces backend outages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Simple chat routes
//!
//! `POST /api/rag-chat` (also mounted at `/api/rag-chat-simple`) accepts
//! `{message, thread_id?, history?}`. Empty messages are rejected before any
//! backend call. Backend outages and error statuses yield the demo-mode reply
//! with status 200.

use super::relay::{parse_json_body, resolve_with_fallback};
use crate::chatkit::{build_offline_simple_chat_response, ChatRequest, ChatResponse};
use crate::constants::backend_paths;
use crate::errors::AppResult;
use crate::resources::ProxyResources;
use axum::{body::Bytes, extract::State, response::Response, routing::post, Router};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::info;

/// Chat routes handler
pub struct RagChatRoutes;

impl RagChatRoutes {
    /// Create all simple-chat routes
    pub fn routes(resources: Arc<ProxyResources>) -> Router {
        Router::new()
            .route("/api/rag-chat", post(Self::handle_chat))
            .route("/api/rag-chat-simple", post(Self::handle_chat))
            .with_state(resources)
    }

    async fn handle_chat(
        State(resources): State<Arc<ProxyResources>>,
        body: Bytes,
    ) -> AppResult<Response> {
        let request: ChatRequest = if body.iter().all(u8::is_ascii_whitespace) {
            ChatRequest::default()
        } else {
            parse_json_body(&body)?
        };
        let message = request.validated_message()?;
        let thread_id = request.thread_id.as_deref();

        info!(
            thread_id = thread_id.unwrap_or("none"),
            history_len = request.history.len(),
            "Forwarding chat message to RAG backend"
        );

        let result = resources
            .backend
            .post_json(
                backend_paths::RAG_CHAT_SIMPLE,
                &request.backend_payload(message),
            )
            .await;

        Ok(resolve_with_fallback(
            &resources,
            "rag-chat",
            result,
            || chat_response_value(build_offline_simple_chat_response(message, thread_id)),
            |live| with_thread_id(live, thread_id),
        ))
    }
}

fn chat_response_value(reply: ChatResponse) -> Value {
    json!({
        "response": reply.response,
        "retrieved": reply.retrieved,
        "thread_id": reply.thread_id,
    })
}

/// Echo the request thread id into a live reply that did not set one
fn with_thread_id(mut live: Value, thread_id: Option<&str>) -> Value {
    if let Value::Object(map) = &mut live {
        map.entry("thread_id")
            .or_insert_with(|| thread_id.map_or(Value::Null, |t| Value::String(t.to_owned())));
    }
    live
}
