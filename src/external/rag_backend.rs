// ABOUTME: HTTP client for the Python RAG backend with typed transport failures
// ABOUTME: Sends one request per call and decodes the reply body as JSON, null, or malformed
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Python RAG Backend Client
//!
//! Thin wrapper over a pooled `reqwest::Client`. Each call performs exactly one
//! outbound request with no retry. Transport failures are classified here, at
//! the HTTP layer, into [`BackendError`] variants so callers never inspect
//! error strings to decide whether the backend is running.

use crate::config::BackendConfig;
use crate::constants::limits;
use reqwest::{Client, ClientBuilder, StatusCode};
use serde_json::Value;
use std::error::Error as StdError;
use std::io;
use thiserror::Error;
use tracing::{debug, instrument};

/// Transport-level failure talking to the backend
#[derive(Debug, Error)]
pub enum BackendError {
    /// Nothing is listening at the configured address
    #[error("connection refused by RAG backend at {url}")]
    ConnectionRefused {
        /// Target URL of the failed request
        url: String,
        /// Underlying client error
        #[source]
        source: reqwest::Error,
    },

    /// The request exceeded the configured timeout
    #[error("request to RAG backend at {url} timed out")]
    Timeout {
        /// Target URL of the failed request
        url: String,
    },

    /// Any other failure while sending or reading the response
    #[error("request to RAG backend at {url} failed: {source}")]
    Request {
        /// Target URL of the failed request
        url: String,
        /// Underlying client error
        #[source]
        source: reqwest::Error,
    },

    /// The target URL could not be constructed
    #[error("invalid RAG backend URL {url}: {reason}")]
    InvalidUrl {
        /// The URL that failed to parse
        url: String,
        /// Parser message
        reason: String,
    },

    /// The underlying HTTP client could not be created
    #[error("failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),
}

impl BackendError {
    /// Classify a `reqwest` failure for the given target URL
    #[must_use]
    pub fn from_reqwest(url: &str, source: reqwest::Error) -> Self {
        if source.is_timeout() {
            Self::Timeout {
                url: url.to_owned(),
            }
        } else if is_connection_refused(&source) {
            Self::ConnectionRefused {
                url: url.to_owned(),
                source,
            }
        } else {
            Self::Request {
                url: url.to_owned(),
                source,
            }
        }
    }
}

/// Whether a client error means nothing accepted the TCP connection
///
/// A connect timeout also reports `is_connect()`; it is not a refusal.
fn is_connection_refused(error: &reqwest::Error) -> bool {
    if error.is_timeout() {
        return false;
    }
    if error.is_connect() {
        return true;
    }
    let mut source = error.source();
    while let Some(cause) = source {
        if let Some(io_error) = cause.downcast_ref::<io::Error>() {
            if io_error.kind() == io::ErrorKind::ConnectionRefused {
                return true;
            }
        }
        source = cause.source();
    }
    false
}

/// Decoded response body
#[derive(Debug, Clone, PartialEq)]
pub enum BackendBody {
    /// Body parsed as JSON; an empty body decodes to `Value::Null`
    Json(Value),
    /// Body was present but not JSON
    Malformed {
        /// Leading characters of the body for diagnostics
        snippet: String,
        /// Parser message
        reason: String,
    },
}

impl BackendBody {
    /// Decode raw body text
    #[must_use]
    pub fn decode(text: &str) -> Self {
        if text.trim().is_empty() {
            return Self::Json(Value::Null);
        }
        match serde_json::from_str(text) {
            Ok(value) => Self::Json(value),
            Err(e) => Self::Malformed {
                snippet: text
                    .chars()
                    .take(limits::MALFORMED_BODY_SNIPPET_CHARS)
                    .collect(),
                reason: e.to_string(),
            },
        }
    }
}

/// One backend response: status plus decoded body
#[derive(Debug, Clone)]
pub struct BackendReply {
    /// Upstream HTTP status
    pub status: StatusCode,
    /// Decoded body
    pub body: BackendBody,
}

/// Client for the Python RAG backend
#[derive(Debug, Clone)]
pub struct RagBackendClient {
    client: Client,
    base_url: String,
}

impl RagBackendClient {
    /// Create a client from backend configuration
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::Build`] if the TLS backend cannot initialize
    pub fn new(config: &BackendConfig) -> Result<Self, BackendError> {
        let mut builder = ClientBuilder::new();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(connect_timeout) = config.connect_timeout {
            builder = builder.connect_timeout(connect_timeout);
        }
        let client = builder.build().map_err(BackendError::Build)?;

        Ok(Self {
            client,
            base_url: config.base_url_str().to_owned(),
        })
    }

    /// Configured base URL without trailing slash
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the full target URL for a backend path and optional raw query string
    #[must_use]
    pub fn url_for(&self, path: &str, query: Option<&str>) -> String {
        match query.filter(|q| !q.is_empty()) {
            Some(q) => format!("{}{path}?{q}", self.base_url),
            None => format!("{}{path}", self.base_url),
        }
    }

    /// Send a GET request
    ///
    /// # Errors
    ///
    /// Returns a [`BackendError`] when the request cannot be completed
    #[instrument(skip(self), fields(backend.url = %self.base_url))]
    pub async fn get(&self, path: &str, query: Option<&str>) -> Result<BackendReply, BackendError> {
        let url = self.url_for(path, query);
        let response = self
            .client
            .get(&url)
            .header(http::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| BackendError::from_reqwest(&url, e))?;
        Self::read_reply(&url, response).await
    }

    /// Send a GET request with typed query parameters
    ///
    /// # Errors
    ///
    /// Returns a [`BackendError`] when the request cannot be completed
    #[instrument(skip(self, params), fields(backend.url = %self.base_url))]
    pub async fn get_with_params(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<BackendReply, BackendError> {
        let raw = self.url_for(path, None);
        let url = reqwest::Url::parse_with_params(&raw, params).map_err(|e| {
            BackendError::InvalidUrl {
                url: raw.clone(),
                reason: e.to_string(),
            }
        })?;
        let response = self
            .client
            .get(url.clone())
            .header(http::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| BackendError::from_reqwest(url.as_str(), e))?;
        Self::read_reply(url.as_str(), response).await
    }

    /// Send a POST request with a JSON body
    ///
    /// # Errors
    ///
    /// Returns a [`BackendError`] when the request cannot be completed
    #[instrument(skip(self, body), fields(backend.url = %self.base_url))]
    pub async fn post_json(&self, path: &str, body: &Value) -> Result<BackendReply, BackendError> {
        let url = self.url_for(path, None);
        let response = self
            .client
            .post(&url)
            .header(http::header::ACCEPT, "application/json")
            .json(body)
            .send()
            .await
            .map_err(|e| BackendError::from_reqwest(&url, e))?;
        Self::read_reply(&url, response).await
    }

    async fn read_reply(
        url: &str,
        response: reqwest::Response,
    ) -> Result<BackendReply, BackendError> {
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| BackendError::from_reqwest(url, e))?;
        debug!(%status, bytes = text.len(), "RAG backend replied");
        Ok(BackendReply {
            status,
            body: BackendBody::decode(&text),
        })
    }
}
