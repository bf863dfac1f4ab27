//! Configuration module for the mock gateway
//!
//! Configuration is layered:
//! - built-in defaults
//! - an optional YAML/TOML/JSON file
//! - environment variables (`RESPONSE_DELAY_MS`, `PORT`, `HOST`, ...)
//! - command-line flags

mod latency;

pub use latency::*;

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;
use crate::error::{GatewayError, GatewayResult};

/// Default listening port
pub const DEFAULT_PORT: u16 = 3000;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    /// Seed for reproducible randomized fields (None = entropy)
    pub seed: Option<u64>,
    /// Server configuration
    pub server: ServerConfig,
    /// Latency injection settings
    pub latency: LatencyConfig,
    /// Telemetry settings
    pub telemetry: TelemetryConfig,
}

impl GatewayConfig {
    /// Load configuration from a file
    pub fn from_file<P: AsRef<Path>>(path: P) -> GatewayResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| GatewayError::Config(format!("Failed to read config file: {}", e)))?;

        let config: Self = match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => serde_yaml::from_str(&content)
                .map_err(|e| GatewayError::Config(format!("YAML parse error: {}", e)))?,
            Some("toml") => toml::from_str(&content)
                .map_err(|e| GatewayError::Config(format!("TOML parse error: {}", e)))?,
            Some("json") => serde_json::from_str(&content)?,
            _ => return Err(GatewayError::Config(
                "Unsupported config file format. Use .yaml, .toml, or .json".to_string()
            )),
        };

        config.validate()?;
        Ok(config)
    }

    /// Defaults with environment variable overrides
    pub fn from_env() -> GatewayResult<Self> {
        Self::default().with_env_overrides()
    }

    /// Apply environment variable overrides on top of this configuration
    pub fn with_env_overrides(self) -> GatewayResult<Self> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary variable lookup
    pub fn with_overrides<F>(mut self, lookup: F) -> GatewayResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        // A missing delay keeps whatever the file said; a garbled one
        // resolves to the documented default rather than failing startup.
        if let Some(raw) = lookup(RESPONSE_DELAY_ENV) {
            self.latency.response_delay_ms = parse_delay_ms(Some(&raw));
        }

        if let Some(port) = lookup("PORT") {
            self.server.port = port.trim().parse().map_err(|_| {
                GatewayError::Config(format!("Invalid port number: {}", port))
            })?;
        }

        if let Some(host) = lookup("HOST") {
            self.server.host = host;
        }

        if let Some(seed) = lookup("MOCK_GATEWAY_SEED") {
            self.seed = Some(seed.trim().parse().map_err(|_| {
                GatewayError::Config("Invalid seed value".to_string())
            })?);
        }

        if let Some(level) = lookup("MOCK_GATEWAY_LOG_LEVEL") {
            self.telemetry.log_level = level;
        }

        self.validate()?;
        Ok(self)
    }

    /// Validate the configuration
    pub fn validate(&self) -> GatewayResult<()> {
        self.server.validate()?;
        self.latency.validate()?;
        Ok(())
    }
}

/// Server configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Log every request at info level
    pub request_logging: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            request_logging: true,
        }
    }
}

impl ServerConfig {
    pub fn validate(&self) -> GatewayResult<()> {
        if self.port == 0 {
            return Err(GatewayError::Validation {
                message: "Port cannot be 0".to_string(),
                param: Some("server.port".to_string()),
            });
        }
        Ok(())
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> GatewayResult<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|_| GatewayError::Validation {
                message: format!("Invalid socket address {}:{}", self.host, self.port),
                param: Some("server.host".to_string()),
            })
    }
}

/// Telemetry configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TelemetryConfig {
    /// Enable log output
    pub enabled: bool,
    /// Log level
    pub log_level: String,
    /// Enable JSON logging
    pub json_logs: bool,
    /// Service name reported by logs and the gateway health probe
    pub service_name: String,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            log_level: "info".to_string(),
            json_logs: false,
            service_name: "hyp-mock-gateway".to_string(),
        }
    }
}
