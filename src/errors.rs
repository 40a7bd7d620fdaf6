// ABOUTME: Unified error handling for the proxy with error codes and HTTP response rendering
// ABOUTME: Maps validation, backend, and internal failures to structured JSON error bodies
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! Every failure is caught at the handler boundary and rendered as a JSON body
//! of the form `{error, message?, details?}`. Validation errors carry their
//! message directly in `error` (`{"error": "thread_id is required"}`); all
//! other codes put a short title in `error` and the explanation in `message`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// Message returned in place of internal details outside development builds
const REDACTED_INTERNAL_MESSAGE: &str = "An unexpected error occurred";

/// Standard error codes used throughout the proxy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput,
    #[serde(rename = "MISSING_REQUIRED_FIELD")]
    MissingRequiredField,

    // Backend
    #[serde(rename = "BACKEND_NOT_RUNNING")]
    BackendNotRunning,
    #[serde(rename = "INVALID_BACKEND_RESPONSE")]
    InvalidBackendResponse,

    // Internal
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError,
}

impl ErrorCode {
    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(self) -> StatusCode {
        match self {
            Self::InvalidInput | Self::MissingRequiredField => StatusCode::BAD_REQUEST,
            Self::InvalidBackendResponse => StatusCode::BAD_GATEWAY,
            Self::BackendNotRunning => StatusCode::SERVICE_UNAVAILABLE,
            Self::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Short title rendered in the `error` field
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::InvalidInput => "Invalid Input",
            Self::MissingRequiredField => "Missing Required Field",
            Self::BackendNotRunning => "Backend Not Running",
            Self::InvalidBackendResponse => "Invalid Backend Response",
            Self::InternalError => "Internal Server Error",
        }
    }

    /// Whether the caller caused this error
    #[must_use]
    pub const fn is_client_error(self) -> bool {
        matches!(self, Self::InvalidInput | Self::MissingRequiredField)
    }
}

/// Unified error type for the proxy
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Optional structured details
    pub details: Option<Value>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Attach structured details
    #[must_use]
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(&self) -> StatusCode {
        self.code.http_status()
    }

    /// Hide internal messages and details unless `expose` is set
    #[must_use]
    pub fn redact_internal(mut self, expose: bool) -> Self {
        if !expose && self.code == ErrorCode::InternalError {
            REDACTED_INTERNAL_MESSAGE.clone_into(&mut self.message);
            self.details = None;
        }
        self
    }

    /// Invalid input
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// A required field or query parameter is missing
    pub fn missing_field(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::MissingRequiredField, message)
    }

    /// The backend process is not listening
    pub fn backend_not_running(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::BackendNotRunning, message)
    }

    /// The backend answered with a body that is not JSON
    pub fn invalid_backend_response(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidBackendResponse, message)
    }

    /// Internal server error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.title(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// HTTP error response body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error title, or the validation message for client errors
    pub error: String,
    /// Explanation for non-validation errors
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Structured diagnostic details
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl From<AppError> for ErrorResponse {
    fn from(error: AppError) -> Self {
        if error.code.is_client_error() {
            Self {
                error: error.message,
                message: None,
                details: error.details,
            }
        } else {
            Self {
                error: error.code.title().to_owned(),
                message: Some(error.message),
                details: error.details,
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.http_status();
        (status, Json(ErrorResponse::from(self))).into_response()
    }
}
