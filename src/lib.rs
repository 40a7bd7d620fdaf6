// ABOUTME: Main library entry point for the RAG ChatKit proxy
// ABOUTME: Relays chat traffic to the Python RAG backend and serves offline payloads when it is down
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

// Crate-level attributes:
// - deny(unsafe_code): Zero-tolerance unsafe policy
#![deny(unsafe_code)]

//! # RAG ChatKit Proxy
//!
//! An HTTP proxy that sits between a chat front-end and the Python RAG
//! backend. When the backend is unreachable, or answers a bootstrap, state, or
//! simple-chat request with a non-success status, the proxy answers with a
//! deterministic offline payload instead of an error so the UI keeps working.
//!
//! ## Features
//!
//! - **Offline payloads**: Bootstrap, state, and simple-chat shapes that mirror
//!   the live backend contract
//! - **Offline classification**: Connection-refused failures are told apart from
//!   every other transport error
//! - **Response envelope**: Offline answers carry `context.fallback_reason` and
//!   the `x-rag-backend-status: offline` header
//! - **Passthrough**: Other ChatKit calls are relayed verbatim with their status
//!
//! ## Architecture
//!
//! - **`chatkit`**: Pure fallback protocol (payloads, classifier, envelope, models)
//! - **`external`**: HTTP client for the RAG backend
//! - **`routes`**: Axum handlers wiring the protocol to the client
//! - **`server`**: Router assembly, middleware, and lifecycle
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use rag_chatkit_proxy::config::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     rag_chatkit_proxy::server::run(config).await
//! }
//! ```

/// Fallback protocol: offline payloads, classifier, envelope, and wire models
pub mod chatkit;

/// Configuration management
pub mod config;

/// Application constants and configuration values
pub mod constants;

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Clients for services the proxy talks to
pub mod external;

/// Production logging with structured output
pub mod logging;

/// HTTP middleware for request tracing and CORS
pub mod middleware;

/// Shared resources injected into route handlers
pub mod resources;

/// HTTP route handlers
pub mod routes;

/// Router assembly and server lifecycle
pub mod server;
