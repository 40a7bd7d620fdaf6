// ABOUTME: External service client modules (Python RAG backend)
// ABOUTME: Provides the typed HTTP layer the proxy handlers forward through
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! External Service Clients

pub mod rag_backend;

pub use rag_backend::{BackendBody, BackendError, BackendReply, RagBackendClient};
