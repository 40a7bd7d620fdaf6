// ABOUTME: Resolves one backend call into one HTTP response for the proxy handlers
// ABOUTME: Implements the success / upstream-error / network-failure branches with or without fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Backend reply resolution
//!
//! Every handler makes exactly one backend call and hands the result here.
//! Two policies exist:
//!
//! - [`resolve_with_fallback`]: upstream error statuses and refused
//!   connections are replaced by an offline payload (status 200).
//! - [`resolve_passthrough`]: upstream error bodies are surfaced with their
//!   original status and a refused connection becomes 503.
//!
//! Under both policies an unparseable body is a 502 and any other transport
//! failure is a 500.

use crate::chatkit::{is_backend_offline_error, respond_with_offline_payload, FallbackReason};
use crate::errors::{AppError, AppResult};
use crate::external::{BackendBody, BackendError, BackendReply};
use crate::resources::ProxyResources;
use axum::{
    extract::Query,
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use tracing::{debug, error, warn};

/// Resolve a backend result for an endpoint that degrades to offline payloads
pub fn resolve_with_fallback<O, L>(
    resources: &ProxyResources,
    endpoint: &str,
    result: Result<BackendReply, BackendError>,
    offline: O,
    on_live: L,
) -> Response
where
    O: FnOnce() -> Value,
    L: FnOnce(Value) -> Value,
{
    match result {
        Ok(BackendReply {
            status,
            body: BackendBody::Malformed { snippet, reason },
        }) => invalid_backend_response(resources, endpoint, status, &snippet, &reason)
            .into_response(),
        Ok(BackendReply {
            status,
            body: BackendBody::Json(value),
        }) if status.is_success() => {
            debug!(endpoint, %status, "Relaying live RAG backend response");
            (status, Json(on_live(value))).into_response()
        }
        Ok(BackendReply {
            status,
            body: BackendBody::Json(value),
        }) => {
            warn!(
                endpoint,
                %status,
                backend_body = %value,
                "RAG backend returned an error status, serving offline payload"
            );
            respond_with_offline_payload(offline(), FallbackReason::BackendStatus(status.as_u16()))
        }
        Err(e) if is_backend_offline_error(&e) => {
            warn!(endpoint, error = %e, "RAG backend is offline, serving offline payload");
            respond_with_offline_payload(offline(), FallbackReason::BackendOffline)
        }
        Err(e) => internal_error(resources, endpoint, &e).into_response(),
    }
}

/// Resolve a backend result for the generic endpoint, surfacing raw errors
pub fn resolve_passthrough(
    resources: &ProxyResources,
    endpoint: &str,
    result: Result<BackendReply, BackendError>,
) -> Response {
    match result {
        Ok(BackendReply {
            status,
            body: BackendBody::Malformed { snippet, reason },
        }) => invalid_backend_response(resources, endpoint, status, &snippet, &reason)
            .into_response(),
        Ok(BackendReply {
            status,
            body: BackendBody::Json(value),
        }) => {
            if status.is_success() {
                debug!(endpoint, %status, "Relaying live RAG backend response");
            } else {
                warn!(endpoint, %status, "Surfacing RAG backend error response");
            }
            (status, Json(value)).into_response()
        }
        Err(e) if is_backend_offline_error(&e) => {
            warn!(endpoint, error = %e, "RAG backend is offline");
            backend_not_running(resources).into_response()
        }
        Err(e) => internal_error(resources, endpoint, &e).into_response(),
    }
}

/// Parse an inbound JSON body
///
/// # Errors
///
/// Returns a 400 error when the body is not valid JSON for `T`
pub fn parse_json_body<T: DeserializeOwned>(body: &[u8]) -> AppResult<T> {
    serde_json::from_slice(body).map_err(|e| {
        AppError::invalid_input("Invalid JSON body").with_details(json!({ "reason": e.to_string() }))
    })
}

/// Parse an inbound query string
///
/// # Errors
///
/// Returns a 400 error when the query cannot be decoded into `T`, for
/// example when a single-valued parameter is repeated
pub fn parse_query<T: DeserializeOwned>(uri: &Uri) -> AppResult<T> {
    Query::try_from_uri(uri).map(|Query(value)| value).map_err(|e| {
        AppError::invalid_input("Invalid query string")
            .with_details(json!({ "reason": e.body_text() }))
    })
}

fn invalid_backend_response(
    resources: &ProxyResources,
    endpoint: &str,
    status: StatusCode,
    snippet: &str,
    reason: &str,
) -> AppError {
    error!(
        endpoint,
        %status,
        reason,
        body_preview = snippet,
        "RAG backend returned a body that is not valid JSON"
    );
    let details = if resources.expose_internal_errors() {
        json!({ "status": status.as_u16(), "reason": reason, "body_preview": snippet })
    } else {
        json!({ "status": status.as_u16() })
    };
    AppError::invalid_backend_response(format!(
        "The RAG backend returned a response that is not valid JSON (status {})",
        status.as_u16()
    ))
    .with_details(details)
}

fn backend_not_running(resources: &ProxyResources) -> AppError {
    let base_url = resources.backend.base_url();
    AppError::backend_not_running(format!(
        "The RAG backend is not running at {base_url}. Start the Python backend and try again."
    ))
    .with_details(json!({ "backend_url": base_url }))
}

fn internal_error(resources: &ProxyResources, endpoint: &str, e: &BackendError) -> AppError {
    error!(endpoint, error = %e, "RAG backend request failed");
    AppError::internal(format!("Failed to reach RAG backend: {e}"))
        .with_details(json!({ "type": error_kind(e) }))
        .redact_internal(resources.expose_internal_errors())
}

const fn error_kind(e: &BackendError) -> &'static str {
    match e {
        BackendError::ConnectionRefused { .. } => "connection_refused",
        BackendError::Timeout { .. } => "timeout",
        BackendError::Request { .. } => "request",
        BackendError::InvalidUrl { .. } => "invalid_url",
        BackendError::Build(_) => "client_build",
    }
}
