// ABOUTME: System-wide constants for the RAG ChatKit proxy
// ABOUTME: Environment variable names, defaults, wire header names, and backend route paths
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Constants Module
//!
//! Hardcoded values shared by the configuration layer, the backend client,
//! and the route handlers.

/// Environment variable names read at startup
pub mod env_config {
    /// Base URL of the Python RAG backend
    pub const PYTHON_BACKEND_URL: &str = "PYTHON_BACKEND_URL";
    /// Proxy listen port
    pub const HTTP_PORT: &str = "HTTP_PORT";
    /// Alternate port variable used by most hosting platforms
    pub const PORT: &str = "PORT";
    /// Proxy bind address
    pub const HOST: &str = "HOST";
    /// Deployment environment (development, production, testing)
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
    /// Node-style deployment environment, consulted when `ENVIRONMENT` is unset
    pub const NODE_ENV: &str = "NODE_ENV";
    /// Comma-separated CORS origins or `*`
    pub const CORS_ALLOWED_ORIGINS: &str = "CORS_ALLOWED_ORIGINS";
    /// Optional whole-request timeout for backend calls, in seconds
    pub const BACKEND_TIMEOUT_SECS: &str = "BACKEND_TIMEOUT_SECS";
    /// Optional connect timeout for backend calls, in seconds
    pub const BACKEND_CONNECT_TIMEOUT_SECS: &str = "BACKEND_CONNECT_TIMEOUT_SECS";
}

/// Default configuration values
pub mod defaults {
    /// Loopback address of the Python backend during local development
    pub const PYTHON_BACKEND_URL: &str = "http://127.0.0.1:8000";
    /// Default bind address
    pub const HOST: &str = "127.0.0.1";
    /// Default listen port
    pub const HTTP_PORT: u16 = 3000;
}

/// Service identification used in logs and health responses
pub mod service_names {
    /// Service name reported by logging and `/health`
    pub const RAG_CHATKIT_PROXY: &str = "rag-chatkit-proxy";
}

/// Header names and values exchanged with the browser client
pub mod headers {
    /// Marks a response body as synthesized rather than sourced from the backend
    pub const RAG_BACKEND_STATUS: &str = "x-rag-backend-status";
    /// Value of [`RAG_BACKEND_STATUS`] on every fallback response
    pub const BACKEND_STATUS_OFFLINE: &str = "offline";
    /// Request correlation header
    pub const REQUEST_ID: &str = "x-request-id";
}

/// Fallback reason codes attached to `context.fallback_reason`
pub mod fallback {
    /// The backend process could not be reached at all
    pub const BACKEND_OFFLINE: &str = "backend-offline";
    /// Prefix for reasons derived from an upstream HTTP status
    pub const BACKEND_STATUS_PREFIX: &str = "backend-status-";
    /// Agent reported by offline bootstrap and state payloads
    pub const OFFLINE_AGENT: &str = "classification";
    /// Thread identifier used by the offline bootstrap payload
    pub const OFFLINE_THREAD_ID: &str = "offline-thread";
    /// Reply used by the offline simple-chat payload
    pub const DEMO_MODE_RESPONSE: &str = "The AI assistant is running in demo mode because the RAG backend is offline. \
Start the Python backend to get answers grounded in your project data.";
}

/// Paths on the Python backend
pub mod backend_paths {
    /// Generic ChatKit endpoint
    pub const RAG_CHATKIT: &str = "/rag-chatkit";
    /// Conversation bootstrap endpoint
    pub const RAG_CHATKIT_BOOTSTRAP: &str = "/rag-chatkit/bootstrap";
    /// Conversation state endpoint
    pub const RAG_CHATKIT_STATE: &str = "/rag-chatkit/state";
    /// Non-streaming chat endpoint
    pub const RAG_CHAT_SIMPLE: &str = "/api/rag-chat-simple";
}

/// Error-code substrings recognized on loosely typed error values
pub mod error_markers {
    /// Platform code for a refused TCP connection
    pub const CONNECTION_REFUSED_CODE: &str = "ECONNREFUSED";
    /// Message fragment produced by fetch-style clients on connect failure
    pub const FETCH_FAILED: &str = "fetch failed";
}

/// Response-shaping limits
pub mod limits {
    /// Characters of an unparseable backend body kept for diagnostics
    pub const MALFORMED_BODY_SNIPPET_CHARS: usize = 200;
}
