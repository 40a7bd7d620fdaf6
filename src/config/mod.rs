// ABOUTME: Configuration management module for centralized proxy settings
// ABOUTME: Re-exports the environment-driven server and backend configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module for the RAG ChatKit proxy

/// Environment and server configuration
pub mod environment;

pub use environment::{BackendConfig, CorsConfig, Environment, ServerConfig};
