//! Latency injection configuration

use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::warn;
use crate::error::{GatewayError, GatewayResult};

/// Base delay applied to every request when nothing is configured
pub const DEFAULT_RESPONSE_DELAY_MS: u64 = 50;

/// Extra delay applied on top of the base for heavier operations
pub const DEFAULT_HEAVY_EXTRA_MS: u64 = 50;

/// Upper bound accepted for either delay
pub const MAX_DELAY_MS: u64 = 10 * 60 * 1000;

/// Environment variable holding the base delay
pub const RESPONSE_DELAY_ENV: &str = "RESPONSE_DELAY_MS";

/// Latency injection configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LatencyConfig {
    /// Delay applied before every response (milliseconds)
    pub response_delay_ms: u64,
    /// Additional delay for heavy operations such as smart fulfillment
    pub heavy_extra_ms: u64,
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            response_delay_ms: DEFAULT_RESPONSE_DELAY_MS,
            heavy_extra_ms: DEFAULT_HEAVY_EXTRA_MS,
        }
    }
}

impl LatencyConfig {
    pub fn validate(&self) -> GatewayResult<()> {
        if self.response_delay_ms > MAX_DELAY_MS {
            return Err(GatewayError::Validation {
                message: format!("response delay cannot exceed {}ms", MAX_DELAY_MS),
                param: Some("latency.response_delay_ms".to_string()),
            });
        }
        if self.heavy_extra_ms > MAX_DELAY_MS {
            return Err(GatewayError::Validation {
                message: format!("heavy extra delay cannot exceed {}ms", MAX_DELAY_MS),
                param: Some("latency.heavy_extra_ms".to_string()),
            });
        }
        Ok(())
    }

    /// Base delay as a duration
    pub fn base_delay(&self) -> Duration {
        Duration::from_millis(self.response_delay_ms)
    }

    /// Extra delay for heavy operations as a duration
    pub fn heavy_extra(&self) -> Duration {
        Duration::from_millis(self.heavy_extra_ms)
    }
}

/// Parse a delay setting leniently: leading
/// decimal digits win (`"75ms"` is 75), anything without them falls
/// back to [`DEFAULT_RESPONSE_DELAY_MS`].
pub fn parse_delay_ms(raw: Option<&str>) -> u64 {
    let Some(raw) = raw else {
        return DEFAULT_RESPONSE_DELAY_MS;
    };

    let trimmed = raw.trim_start();
    let digits: &str = {
        let end = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(trimmed.len());
        &trimmed[..end]
    };

    match digits.parse::<u64>() {
        Ok(ms) => ms,
        Err(_) => {
            warn!(
                value = %raw,
                default_ms = DEFAULT_RESPONSE_DELAY_MS,
                "Unparseable response delay, using default"
            );
            DEFAULT_RESPONSE_DELAY_MS
        }
    }
}
