// ABOUTME: Server binary for the RAG ChatKit proxy
// ABOUTME: Loads configuration, initializes logging, and serves the proxy routes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # RAG ChatKit Proxy Binary
//!
//! Starts the HTTP proxy in front of the Python RAG backend.

use anyhow::Result;
use clap::Parser;
use rag_chatkit_proxy::{config::ServerConfig, logging, server};
use tracing::{error, info};

/// Command-line arguments
#[derive(Parser)]
#[command(name = "rag-chatkit-proxy")]
#[command(about = "RAG ChatKit proxy - relays chat traffic and serves offline fallbacks")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override the Python RAG backend base URL
    #[arg(long)]
    backend_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    logging::init_from_env()?;

    let mut config = ServerConfig::from_env()?;

    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(backend_url) = args.backend_url.as_deref() {
        config.set_backend_url(backend_url)?;
    }

    info!("Starting RAG ChatKit proxy");
    info!("{}", config.summary());
    display_available_endpoints(&config);

    if let Err(e) = server::run(config).await {
        error!("Server error: {e:#}");
        return Err(e);
    }

    Ok(())
}

fn display_available_endpoints(config: &ServerConfig) {
    let host = config.host.as_str();
    let port = config.http_port;

    info!("=== Available API Endpoints ===");
    display_chatkit_endpoints(host, port);
    display_chat_endpoints(host, port);
    display_health_endpoints(host, port);
    info!("=== End of Endpoint List ===");
}

#[allow(clippy::cognitive_complexity)]
fn display_chatkit_endpoints(host: &str, port: u16) {
    info!("ChatKit:");
    info!("   Bootstrap:         GET  http://{host}:{port}/api/rag-chatkit/bootstrap");
    info!("   Thread State:      GET  http://{host}:{port}/api/rag-chatkit/state?thread_id={{id}}");
    info!("   Passthrough:       POST http://{host}:{port}/api/rag-chatkit");
    info!("   Passthrough:       GET  http://{host}:{port}/api/rag-chatkit/{{path}}");
}

fn display_chat_endpoints(host: &str, port: u16) {
    info!("Simple Chat:");
    info!("   Chat:              POST http://{host}:{port}/api/rag-chat");
    info!("   Chat (alias):      POST http://{host}:{port}/api/rag-chat-simple");
}

fn display_health_endpoints(host: &str, port: u16) {
    info!("Health:");
    info!("   Health:            GET  http://{host}:{port}/health");
    info!("   Readiness:         GET  http://{host}:{port}/ready");
}
