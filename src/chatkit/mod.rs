// ABOUTME: RAG ChatKit fallback protocol: models, offline classification, payloads, and envelope
// ABOUTME: Keeps the chat UI usable when the Python RAG backend is unreachable or erroring
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # RAG ChatKit Fallback Protocol
//!
//! - **Models**: chat request/response shapes and fallback reason codes
//! - **Classifier**: decides whether a failure means the backend is not running
//! - **Offline**: canned payloads shaped like live backend replies
//! - **Envelope**: marks synthesized payloads with `context.fallback_reason`
//!   and the `x-rag-backend-status: offline` header

/// Backend-offline classification
pub mod classifier;
/// Offline response envelope
pub mod envelope;
/// Request and response models
pub mod models;
/// Offline payload builders
pub mod offline;

pub use classifier::{is_backend_offline_error, is_backend_offline_value};
pub use envelope::{attach_fallback_reason, respond_with_offline_payload};
pub use models::{
    ChatRequest, ChatResponse, FallbackReason, HistoryEntry, OfflineDiagnostic, Role, StateQuery,
};
pub use offline::{
    build_offline_bootstrap_state, build_offline_simple_chat_response,
    build_offline_state_response,
};
