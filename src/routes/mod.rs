// ABOUTME: Route module organization for the RAG ChatKit proxy HTTP endpoints
// ABOUTME: Groups health, ChatKit passthrough/fallback, and simple-chat routes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Route module for the RAG ChatKit proxy
//!
//! Each domain module contains route definitions and thin handlers. Shared
//! reply resolution lives in [`relay`].

/// Health check and system status routes
pub mod health;
/// Simple (non-streaming) chat routes
pub mod rag_chat;
/// ChatKit passthrough, bootstrap, and state routes
pub mod rag_chatkit;
/// Backend reply resolution shared by the proxy handlers
pub mod relay;

/// Health check route handlers
pub use health::HealthRoutes;
/// Simple-chat route handlers
pub use rag_chat::RagChatRoutes;
/// ChatKit route handlers
pub use rag_chatkit::RagChatKitRoutes;
