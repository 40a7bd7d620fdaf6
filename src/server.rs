// ABOUTME: HTTP server assembly and lifecycle for the RAG ChatKit proxy
// ABOUTME: Merges route groups, applies tracing/request-id/CORS layers, and serves with graceful shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Proxy server
//!
//! [`build_router`] is separate from [`run`] so integration tests can drive the
//! full middleware stack with `tower::ServiceExt::oneshot` without binding a
//! socket.

use crate::config::ServerConfig;
use crate::middleware::{
    make_request_span, propagate_request_id_layer, set_request_id_layer, setup_cors,
};
use crate::resources::ProxyResources;
use crate::routes::{HealthRoutes, RagChatKitRoutes, RagChatRoutes};
use anyhow::{Context, Result};
use axum::{body::Body, Router};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// Build the complete application router
///
/// Layers are applied outermost-last: request ids are assigned before the
/// trace span is created, and propagated back onto every response.
pub fn build_router(resources: &Arc<ProxyResources>, config: &ServerConfig) -> Router {
    Router::new()
        .merge(HealthRoutes::routes(Arc::clone(resources)))
        .merge(RagChatKitRoutes::routes(Arc::clone(resources)))
        .merge(RagChatRoutes::routes(Arc::clone(resources)))
        .layer(propagate_request_id_layer())
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span::<Body>))
        .layer(set_request_id_layer())
        .layer(setup_cors(&config.cors))
}

/// Bind the configured address and serve until a shutdown signal arrives
///
/// # Errors
///
/// Returns an error if the backend client cannot be built, the address cannot
/// be bound, or the server fails while running
pub async fn run(config: ServerConfig) -> Result<()> {
    let resources = Arc::new(
        ProxyResources::new(&config).context("Failed to initialize RAG backend client")?,
    );
    let app = build_router(&resources, &config);

    let listener = TcpListener::bind((config.host.as_str(), config.http_port))
        .await
        .with_context(|| format!("Failed to bind {}:{}", config.host, config.http_port))?;
    let local_addr = listener
        .local_addr()
        .context("Failed to read bound listener address")?;

    info!(
        address = %local_addr,
        backend_url = %config.backend.base_url_str(),
        "RAG ChatKit proxy listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server terminated unexpectedly")?;

    info!("RAG ChatKit proxy stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl+C, shutting down"),
        () = terminate => info!("Received SIGTERM, shutting down"),
    }
}
