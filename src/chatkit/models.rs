// ABOUTME: Request and response shapes exchanged between the browser, the proxy, and the RAG backend
// ABOUTME: Defines chat requests, chat responses, fallback reasons, and the offline diagnostic
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Transient request/response models
//!
//! Bootstrap and session-state documents are owned by the backend and handled
//! as opaque `serde_json::Value` blobs; only the chat shapes are typed here.

use crate::constants::fallback;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Speaker of a history entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One prior turn of the conversation, preserved in caller order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Who spoke
    pub role: Role,
    /// What was said
    pub text: String,
}

/// Inbound chat request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    /// User message; must be non-empty after trimming
    #[serde(default)]
    pub message: String,
    /// Conversation correlation id
    #[serde(default)]
    pub thread_id: Option<String>,
    /// Prior turns
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
}

impl ChatRequest {
    /// Trimmed message, rejecting empty input
    ///
    /// # Errors
    ///
    /// Returns a 400 error when the message is empty or whitespace
    pub fn validated_message(&self) -> AppResult<&str> {
        let trimmed = self.message.trim();
        if trimmed.is_empty() {
            return Err(AppError::missing_field("message is required"));
        }
        Ok(trimmed)
    }

    /// Body forwarded to the backend simple-chat endpoint
    #[must_use]
    pub fn backend_payload(&self, message: &str) -> Value {
        serde_json::json!({
            "message": message,
            "history": self.history,
        })
    }
}

/// Chat reply returned to the browser
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    /// Assistant text
    pub response: String,
    /// Retrieval records backing the answer; possibly empty
    #[serde(default)]
    pub retrieved: Vec<Value>,
    /// Conversation correlation id
    #[serde(default)]
    pub thread_id: Option<String>,
}

/// Query string of the session-state endpoint
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StateQuery {
    /// Conversation to fetch
    pub thread_id: Option<String>,
}

impl StateQuery {
    /// Non-empty thread id
    ///
    /// # Errors
    ///
    /// Returns a 400 error when the parameter is missing or blank
    pub fn required_thread_id(&self) -> AppResult<&str> {
        self.thread_id
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| AppError::missing_field("thread_id is required"))
    }
}

/// Why a response was synthesized instead of relayed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackReason {
    /// The backend process could not be reached
    BackendOffline,
    /// The backend answered with a non-success status
    BackendStatus(u16),
}

impl fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BackendOffline => f.write_str(fallback::BACKEND_OFFLINE),
            Self::BackendStatus(status) => {
                write!(f, "{}{status}", fallback::BACKEND_STATUS_PREFIX)
            }
        }
    }
}

/// Diagnostic merged into `context` of every fallback payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfflineDiagnostic {
    /// Reason code, e.g. `backend-offline` or `backend-status-500`
    pub fallback_reason: String,
}

impl From<FallbackReason> for OfflineDiagnostic {
    fn from(reason: FallbackReason) -> Self {
        Self {
            fallback_reason: reason.to_string(),
        }
    }
}
