// ABOUTME: Shared, immutable per-process resources injected into every route handler
// ABOUTME: Holds the backend client and deployment environment built once from ServerConfig
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Server resources
//!
//! Built once at startup and shared behind an `Arc`. Nothing here is mutated
//! after construction, so handlers need no locking.

use crate::config::{Environment, ServerConfig};
use crate::external::{BackendError, RagBackendClient};

/// Resources shared by all handlers
#[derive(Debug, Clone)]
pub struct ProxyResources {
    /// Client for the Python RAG backend
    pub backend: RagBackendClient,
    /// Deployment environment
    pub environment: Environment,
}

impl ProxyResources {
    /// Build resources from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created
    pub fn new(config: &ServerConfig) -> Result<Self, BackendError> {
        Ok(Self {
            backend: RagBackendClient::new(&config.backend)?,
            environment: config.environment,
        })
    }

    /// Whether 500 responses may carry internal error messages
    #[must_use]
    pub const fn expose_internal_errors(&self) -> bool {
        self.environment.exposes_internal_errors()
    }
}
