// ABOUTME: HTTP middleware for request tracing, request IDs, and CORS
// ABOUTME: Provides request ID generation, span creation, and browser access configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod cors;
pub mod request_id;

// CORS configuration
pub use cors::setup_cors;

// Request ID propagation and tracing spans
pub use request_id::{make_request_span, propagate_request_id_layer, set_request_id_layer};
