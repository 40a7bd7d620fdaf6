// ABOUTME: Integration tests for loading proxy configuration from process environment variables
// ABOUTME: Serialized because every test mutates shared process environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use rag_chatkit_proxy::config::{Environment, ServerConfig};
use rag_chatkit_proxy::constants::env_config;
use serial_test::serial;
use std::env;
use std::time::Duration;

const ALL_KEYS: &[&str] = &[
    env_config::PYTHON_BACKEND_URL,
    env_config::HTTP_PORT,
    env_config::PORT,
    env_config::HOST,
    env_config::ENVIRONMENT,
    env_config::NODE_ENV,
    env_config::CORS_ALLOWED_ORIGINS,
    env_config::BACKEND_TIMEOUT_SECS,
    env_config::BACKEND_CONNECT_TIMEOUT_SECS,
];

fn clear_env() {
    for key in ALL_KEYS {
        env::remove_var(key);
    }
}

#[test]
#[serial]
fn test_from_env_defaults() {
    clear_env();

    let config = ServerConfig::from_env().unwrap();
    assert_eq!(config.backend.base_url_str(), "http://127.0.0.1:8000");
    assert_eq!(config.http_port, 3000);
    assert_eq!(config.host, "127.0.0.1");
    assert_eq!(config.environment, Environment::Development);
    assert_eq!(config.cors.allowed_origins, "*");
    assert!(config.backend.request_timeout.is_none());
}

#[test]
#[serial]
fn test_from_env_reads_overrides() {
    clear_env();
    env::set_var(env_config::PYTHON_BACKEND_URL, "http://rag.internal:9000/");
    env::set_var(env_config::HTTP_PORT, "8088");
    env::set_var(env_config::ENVIRONMENT, "production");
    env::set_var(env_config::BACKEND_TIMEOUT_SECS, "30");

    let config = ServerConfig::from_env().unwrap();
    assert_eq!(config.backend.base_url_str(), "http://rag.internal:9000");
    assert_eq!(config.http_port, 8088);
    assert!(config.environment.is_production());
    assert_eq!(config.backend.request_timeout, Some(Duration::from_secs(30)));

    clear_env();
}

#[test]
#[serial]
fn test_from_env_rejects_non_http_backend() {
    clear_env();
    env::set_var(env_config::PYTHON_BACKEND_URL, "ftp://rag.internal");

    assert!(ServerConfig::from_env().is_err());

    clear_env();
}

#[test]
#[serial]
fn test_cli_backend_override_replaces_env_value() {
    clear_env();
    env::set_var(env_config::PYTHON_BACKEND_URL, "http://from-env:8000");

    let mut config = ServerConfig::from_env().unwrap();
    config.set_backend_url("http://from-flag:8001/").unwrap();
    assert_eq!(config.backend.base_url_str(), "http://from-flag:8001");
    assert!(config.summary().contains("http://from-flag:8001"));

    clear_env();
}
