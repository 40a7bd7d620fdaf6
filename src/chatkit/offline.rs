// ABOUTME: Canned payloads substituted when the RAG backend cannot serve a request
// ABOUTME: Builds bootstrap, session-state, and simple-chat bodies shaped like live backend replies
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Offline payload builders
//!
//! Each builder returns the same shape the backend would, so the UI renders
//! live and simulated data through one code path. Outputs are deterministic:
//! no timestamps and no generated ids.

use super::models::ChatResponse;
use crate::constants::fallback::{DEMO_MODE_RESPONSE, OFFLINE_AGENT, OFFLINE_THREAD_ID};
use serde_json::{json, Value};

/// Agent roster advertised while offline
fn offline_agents() -> Value {
    json!([
        {
            "name": OFFLINE_AGENT,
            "description": "Classifies user queries into project, policy, or strategic categories",
            "active": true,
            "handoffs": [],
        }
    ])
}

/// Bootstrap document for a new conversation
#[must_use]
pub fn build_offline_bootstrap_state() -> Value {
    json!({
        "thread_id": OFFLINE_THREAD_ID,
        "current_agent": OFFLINE_AGENT,
        "agents": offline_agents(),
        "events": [],
        "guardrails": [],
        "context": {},
    })
}

/// Session-state document for an existing conversation
#[must_use]
pub fn build_offline_state_response(thread_id: &str) -> Value {
    json!({
        "thread_id": thread_id,
        "current_agent": OFFLINE_AGENT,
        "agents": offline_agents(),
        "events": [],
        "guardrails": [],
        "context": {},
    })
}

/// Simple-chat reply explaining that the assistant is in demo mode
///
/// The user's message is accepted for signature parity with the live endpoint
/// but does not influence the reply.
#[must_use]
pub fn build_offline_simple_chat_response(_message: &str, thread_id: Option<&str>) -> ChatResponse {
    ChatResponse {
        response: DEMO_MODE_RESPONSE.to_owned(),
        retrieved: Vec::new(),
        thread_id: thread_id.map(str::to_owned),
    }
}
