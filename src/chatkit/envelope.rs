// ABOUTME: Wraps offline payloads with a fallback diagnostic and the offline marker header
// ABOUTME: Merges fallback_reason into context and answers 200 so clients degrade gracefully
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Offline response envelope

use super::models::{FallbackReason, OfflineDiagnostic};
use crate::constants::headers::{BACKEND_STATUS_OFFLINE, RAG_BACKEND_STATUS};
use axum::{
    http::{HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{Map, Value};

/// Merge the diagnostic into `payload.context`, keeping existing context keys
///
/// A missing or non-object `context` is replaced by a fresh object. A
/// non-object payload is wrapped as `{"data": payload}` so the marker always
/// has somewhere to live.
#[must_use]
pub fn attach_fallback_reason(payload: Value, reason: FallbackReason) -> Value {
    let diagnostic = OfflineDiagnostic::from(reason);

    let mut object = match payload {
        Value::Object(map) => map,
        Value::Null => Map::new(),
        other => {
            let mut map = Map::new();
            map.insert("data".to_owned(), other);
            map
        }
    };

    let context = object
        .entry("context")
        .or_insert_with(|| Value::Object(Map::new()));
    if !context.is_object() {
        *context = Value::Object(Map::new());
    }
    if let Value::Object(context) = context {
        context.insert(
            "fallback_reason".to_owned(),
            Value::String(diagnostic.fallback_reason),
        );
    }

    Value::Object(object)
}

/// Render an offline payload as a successful, marked response
#[must_use]
pub fn respond_with_offline_payload(payload: Value, reason: FallbackReason) -> Response {
    let body = attach_fallback_reason(payload, reason);
    (
        StatusCode::OK,
        [(
            HeaderName::from_static(RAG_BACKEND_STATUS),
            HeaderValue::from_static(BACKEND_STATUS_OFFLINE),
        )],
        Json(body),
    )
        .into_response()
}
