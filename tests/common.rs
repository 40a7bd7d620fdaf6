// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Builds proxy routers pointed at mock or unreachable RAG backends
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `rag_chatkit_proxy`

use axum::Router;
use rag_chatkit_proxy::{
    config::ServerConfig, constants::env_config, resources::ProxyResources, server,
};
use std::collections::HashMap;
use std::net::TcpListener;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::{TcpSocket, TcpStream};

/// Build a server config from explicit key/value pairs instead of the process environment
pub fn config_with(pairs: &[(&str, &str)]) -> ServerConfig {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    ServerConfig::from_lookup(|key| map.get(key).cloned()).expect("valid test config")
}

/// Build the full application router for a backend at `backend_url`
pub fn create_test_router(backend_url: &str) -> Router {
    create_test_router_for_env(backend_url, "development")
}

/// Build the full application router with an explicit deployment environment
pub fn create_test_router_for_env(backend_url: &str, environment: &str) -> Router {
    let config = config_with(&[
        (env_config::PYTHON_BACKEND_URL, backend_url),
        (env_config::ENVIRONMENT, environment),
    ]);
    let resources = Arc::new(ProxyResources::new(&config).expect("backend client"));
    server::build_router(&resources, &config)
}

/// Build the full application router from explicit configuration pairs
pub fn create_test_router_with(pairs: &[(&str, &str)]) -> Router {
    let config = config_with(pairs);
    let resources = Arc::new(ProxyResources::new(&config).expect("backend client"));
    server::build_router(&resources, &config)
}

/// Base URL of a local port that refuses connections
///
/// The port is bound and released immediately so nothing is listening on it.
pub fn unreachable_backend_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let port = listener.local_addr().expect("local addr").port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}

/// A listener whose accept queue is full, so new connections hang until timeout
pub struct SaturatedBackend {
    listener: tokio::net::TcpListener,
    _pending: Vec<TcpStream>,
}

impl SaturatedBackend {
    /// Base URL of the saturated listener
    pub fn url(&self) -> String {
        format!("http://{}", self.listener.local_addr().expect("local addr"))
    }
}

/// Bind a listener with a zero backlog and fill its accept queue without accepting
pub async fn saturated_backend() -> SaturatedBackend {
    let socket = TcpSocket::new_v4().expect("create socket");
    socket
        .bind("127.0.0.1:0".parse().expect("loopback addr"))
        .expect("bind loopback");
    let listener = socket.listen(0).expect("listen");
    let addr = listener.local_addr().expect("local addr");

    let mut pending = Vec::new();
    for _ in 0..8 {
        match tokio::time::timeout(Duration::from_millis(200), TcpStream::connect(addr)).await {
            Ok(Ok(stream)) => pending.push(stream),
            _ => break,
        }
    }

    SaturatedBackend {
        listener,
        _pending: pending,
    }
}
