//! Error types for the mock gateway
//!
//! Simulated endpoints never fail; these errors only surface while
//! loading configuration and starting the server.

use thiserror::Error;

/// Result type alias for gateway operations
pub type GatewayResult<T> = Result<T, GatewayError>;

/// Main error type for gateway setup
#[derive(Error, Debug, Clone)]
pub enum GatewayError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {message}")]
    Validation {
        message: String,
        param: Option<String>,
    },

    #[error("I/O error: {0}")]
    Io(String),
}

impl GatewayError {
    /// Name of the offending configuration parameter, if known
    pub fn param(&self) -> Option<&str> {
        match self {
            Self::Validation { param, .. } => param.as_deref(),
            _ => None,
        }
    }
}

impl From<std::io::Error> for GatewayError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for GatewayError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(format!("JSON parse error: {}", err))
    }
}
