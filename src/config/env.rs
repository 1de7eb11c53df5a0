// src/config/env.rs
// Environment-based configuration - single source of truth for all env vars

use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, warn};

/// Webhook used when N8N_WEBHOOK_URL is not set
pub const DEFAULT_WEBHOOK_URL: &str = "http://localhost:5678/webhook/legal-assistant";
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3100;
pub const DEFAULT_TIMEOUT_SECS: u64 = crate::http::DEFAULT_TIMEOUT.as_secs();
/// Largest webhook response body the relay buffers (10 MiB)
pub const DEFAULT_MAX_RESPONSE_BYTES: usize = 10 * 1024 * 1024;

/// Relay configuration loaded from environment variables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    /// Automation webhook the relay forwards to (N8N_WEBHOOK_URL)
    pub webhook_url: String,
    /// Bind host (COUNSEL_HOST)
    pub host: String,
    /// Bind port (COUNSEL_PORT)
    pub port: u16,
    /// Upstream request timeout (WEBHOOK_TIMEOUT_SECS)
    pub timeout: Duration,
    /// Upstream response body limit in bytes (WEBHOOK_MAX_RESPONSE_BYTES)
    pub max_response_bytes: usize,
    /// Browser origin allowed to call the relay (CORS_ORIGIN)
    pub cors_origin: Option<String>,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            webhook_url: DEFAULT_WEBHOOK_URL.to_string(),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_response_bytes: DEFAULT_MAX_RESPONSE_BYTES,
            cors_origin: None,
        }
    }
}

impl RelayConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let config = Self {
            webhook_url: read("N8N_WEBHOOK_URL").unwrap_or_else(|| DEFAULT_WEBHOOK_URL.to_string()),
            host: read("COUNSEL_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: parse_or("COUNSEL_PORT", read("COUNSEL_PORT"), DEFAULT_PORT),
            timeout: Duration::from_secs(parse_or(
                "WEBHOOK_TIMEOUT_SECS",
                read("WEBHOOK_TIMEOUT_SECS"),
                DEFAULT_TIMEOUT_SECS,
            )),
            max_response_bytes: parse_or(
                "WEBHOOK_MAX_RESPONSE_BYTES",
                read("WEBHOOK_MAX_RESPONSE_BYTES"),
                DEFAULT_MAX_RESPONSE_BYTES,
            ),
            cors_origin: read("CORS_ORIGIN"),
        };
        debug!(
            webhook_url = %config.webhook_url,
            host = %config.host,
            port = config.port,
            timeout_secs = config.timeout.as_secs(),
            max_response_bytes = config.max_response_bytes,
            "Relay configuration loaded"
        );
        config
    }

    /// Socket address string the server binds to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Check the configuration for values that cannot work
    pub fn validate(&self) -> ConfigValidation {
        let mut validation = ConfigValidation::new();

        if !(self.webhook_url.starts_with("http://") || self.webhook_url.starts_with("https://")) {
            validation.add_error(format!(
                "N8N_WEBHOOK_URL must be an http(s) URL, got '{}'",
                self.webhook_url
            ));
        }
        if self.port == 0 {
            validation.add_error("COUNSEL_PORT must not be 0");
        }
        if self.timeout.is_zero() {
            validation.add_warning("WEBHOOK_TIMEOUT_SECS is 0 - every webhook call will time out");
        }
        if self.max_response_bytes == 0 {
            validation.add_error("WEBHOOK_MAX_RESPONSE_BYTES must not be 0");
        }
        if let Some(origin) = &self.cors_origin
            && axum::http::HeaderValue::from_str(origin).is_err()
        {
            validation.add_error(format!("CORS_ORIGIN is not a valid header value: '{}'", origin));
        }

        validation
    }
}

fn parse_or<T: FromStr>(key: &str, value: Option<String>, default: T) -> T {
    match value {
        Some(raw) => match raw.parse::<T>() {
            Ok(parsed) => parsed,
            Err(_) => {
                warn!(key, value = %raw, "Could not parse config value, using default");
                default
            }
        },
        None => default,
    }
}

/// Configuration validation result
#[derive(Debug, Default)]
pub struct ConfigValidation {
    pub warnings: Vec<String>,
    pub errors: Vec<String>,
}

impl ConfigValidation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_warning(&mut self, msg: impl Into<String>) {
        self.warnings.push(msg.into());
    }

    pub fn add_error(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    /// Format as a human-readable report
    pub fn report(&self) -> String {
        let mut lines = Vec::new();

        if !self.errors.is_empty() {
            lines.push("Errors:".to_string());
            for err in &self.errors {
                lines.push(format!("  - {}", err));
            }
        }

        if !self.warnings.is_empty() {
            lines.push("Warnings:".to_string());
            for warning in &self.warnings {
                lines.push(format!("  - {}", warning));
            }
        }

        lines.join("\n")
    }
}
