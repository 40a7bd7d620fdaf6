// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Parses the backend URL, listen address, CORS origins, and deployment mode once at startup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration management for production deployment
//!
//! All values are read once when the process starts and then handed to the
//! router as immutable state. Handlers never consult the environment.

use crate::constants::{defaults, env_config};
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;
use tracing::info;
use url::Url;

/// Environment type for error exposure and other deployment-specific behavior
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }

    /// Whether internal error messages may be returned to clients
    #[must_use]
    pub const fn exposes_internal_errors(self) -> bool {
        !self.is_production()
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Connection settings for the Python RAG backend
#[derive(Debug, Clone)]
pub struct BackendConfig {
    /// Base URL without a trailing slash
    pub base_url: Url,
    /// Whole-request timeout; `None` leaves the call unbounded
    pub request_timeout: Option<Duration>,
    /// Connect timeout; `None` uses the client default
    pub connect_timeout: Option<Duration>,
}

impl BackendConfig {
    /// Build a backend configuration from a base URL string
    ///
    /// # Errors
    ///
    /// Returns an error if the URL does not parse or is not http(s)
    pub fn from_base_url(raw: &str) -> Result<Self> {
        Ok(Self {
            base_url: parse_backend_url(raw)?,
            request_timeout: None,
            connect_timeout: None,
        })
    }

    /// Base URL as a string without the trailing slash `Url` normalizes to
    #[must_use]
    pub fn base_url_str(&self) -> &str {
        self.base_url.as_str().trim_end_matches('/')
    }
}

/// CORS configuration
#[derive(Debug, Clone)]
pub struct CorsConfig {
    /// `*` or a comma-separated origin list
    pub allowed_origins: String,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: "*".into(),
        }
    }
}

/// Complete proxy configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address
    pub host: String,
    /// Listen port
    pub http_port: u16,
    /// Deployment environment
    pub environment: Environment,
    /// Python backend connection settings
    pub backend: BackendConfig,
    /// CORS settings
    pub cors: CorsConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is present but malformed
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    ///
    /// # Errors
    ///
    /// Returns an error if a value is present but malformed
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let http_port = match get(env_config::HTTP_PORT).or_else(|| get(env_config::PORT)) {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("Invalid HTTP port value: {raw}"))?,
            None => defaults::HTTP_PORT,
        };

        let environment = get(env_config::ENVIRONMENT)
            .or_else(|| get(env_config::NODE_ENV))
            .map_or_else(Environment::default, |v| {
                Environment::from_str_or_default(&v)
            });

        let backend_url = get(env_config::PYTHON_BACKEND_URL)
            .unwrap_or_else(|| defaults::PYTHON_BACKEND_URL.to_owned());

        let backend = BackendConfig {
            base_url: parse_backend_url(&backend_url)?,
            request_timeout: parse_optional_secs(
                env_config::BACKEND_TIMEOUT_SECS,
                get(env_config::BACKEND_TIMEOUT_SECS),
            )?,
            connect_timeout: parse_optional_secs(
                env_config::BACKEND_CONNECT_TIMEOUT_SECS,
                get(env_config::BACKEND_CONNECT_TIMEOUT_SECS),
            )?,
        };

        Ok(Self {
            host: get(env_config::HOST).unwrap_or_else(|| defaults::HOST.to_owned()),
            http_port,
            environment,
            backend,
            cors: CorsConfig {
                allowed_origins: get(env_config::CORS_ALLOWED_ORIGINS)
                    .unwrap_or_else(|| "*".into()),
            },
        })
    }

    /// Override the backend base URL (used by the `--backend-url` flag)
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid
    pub fn set_backend_url(&mut self, raw: &str) -> Result<()> {
        self.backend.base_url = parse_backend_url(raw)?;
        Ok(())
    }

    /// One-line-per-setting description for startup logs
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "RAG ChatKit Proxy Configuration:\n\
             - Listen: {}:{}\n\
             - Environment: {}\n\
             - Python Backend: {}\n\
             - Backend Timeout: {}\n\
             - CORS Origins: {}",
            self.host,
            self.http_port,
            self.environment,
            self.backend.base_url_str(),
            self.backend
                .request_timeout
                .map_or_else(|| "none".to_owned(), |t| format!("{}s", t.as_secs())),
            self.cors.allowed_origins,
        )
    }
}

/// Parse and validate the backend base URL
fn parse_backend_url(raw: &str) -> Result<Url> {
    let trimmed = raw.trim().trim_end_matches('/');
    let url = Url::parse(trimmed).with_context(|| format!("Invalid backend URL: {raw}"))?;
    if !matches!(url.scheme(), "http" | "https") {
        bail!("Backend URL must use http or https: {raw}");
    }
    Ok(url)
}

/// Parse an optional whole-second duration
fn parse_optional_secs(key: &str, raw: Option<String>) -> Result<Option<Duration>> {
    raw.map(|value| {
        value
            .trim()
            .parse::<u64>()
            .map(Duration::from_secs)
            .with_context(|| format!("Invalid {key} value: {value}"))
    })
    .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_is_set() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.http_port, defaults::HTTP_PORT);
        assert_eq!(config.host, defaults::HOST);
        assert_eq!(config.environment, Environment::Development);
        assert_eq!(config.backend.base_url_str(), "http://127.0.0.1:8000");
        assert!(config.backend.request_timeout.is_none());
        assert_eq!(config.cors.allowed_origins, "*");
    }

    #[test]
    fn test_backend_url_trailing_slash_removed() {
        let config = ServerConfig::from_lookup(lookup(&[(
            "PYTHON_BACKEND_URL",
            "http://rag.internal:9000/",
        )]))
        .unwrap();
        assert_eq!(config.backend.base_url_str(), "http://rag.internal:9000");
    }

    #[test]
    fn test_port_falls_back_to_port_variable() {
        let config = ServerConfig::from_lookup(lookup(&[("PORT", "8080")])).unwrap();
        assert_eq!(config.http_port, 8080);

        let config =
            ServerConfig::from_lookup(lookup(&[("PORT", "8080"), ("HTTP_PORT", "9090")])).unwrap();
        assert_eq!(config.http_port, 9090);
    }

    #[test]
    fn test_node_env_consulted_when_environment_missing() {
        let config = ServerConfig::from_lookup(lookup(&[("NODE_ENV", "production")])).unwrap();
        assert!(config.environment.is_production());
        assert!(!config.environment.exposes_internal_errors());
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(ServerConfig::from_lookup(lookup(&[("HTTP_PORT", "not-a-port")])).is_err());
        assert!(ServerConfig::from_lookup(lookup(&[("PYTHON_BACKEND_URL", "ftp://x")])).is_err());
        assert!(ServerConfig::from_lookup(lookup(&[("BACKEND_TIMEOUT_SECS", "soon")])).is_err());
    }

    #[test]
    fn test_timeouts_parsed() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("BACKEND_TIMEOUT_SECS", "30"),
            ("BACKEND_CONNECT_TIMEOUT_SECS", "5"),
        ]))
        .unwrap();
        assert_eq!(config.backend.request_timeout, Some(Duration::from_secs(30)));
        assert_eq!(config.backend.connect_timeout, Some(Duration::from_secs(5)));
    }
}
