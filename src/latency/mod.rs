//! Latency injection module
//!
//! Suspends a single request for the configured delay before its
//! response is produced. The wait is a tokio timer, so the worker
//! thread keeps serving other in-flight requests meanwhile.

use std::time::Duration;
use crate::config::LatencyConfig;

/// How much simulated work an operation represents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Workload {
    /// Base delay only
    Standard,
    /// Base delay plus the configured heavy extra
    Heavy,
}

/// Applies the configured artificial latency
#[derive(Debug, Clone)]
pub struct LatencyInjector {
    base: Duration,
    heavy_extra: Duration,
}

impl LatencyInjector {
    /// Create a new injector from configuration
    pub fn new(config: &LatencyConfig) -> Self {
        Self {
            base: config.base_delay(),
            heavy_extra: config.heavy_extra(),
        }
    }

    /// Injector that never waits
    pub fn instant() -> Self {
        Self {
            base: Duration::ZERO,
            heavy_extra: Duration::ZERO,
        }
    }

    /// Delay that will be applied for the given workload
    pub fn delay_for(&self, workload: Workload) -> Duration {
        match workload {
            Workload::Standard => self.base,
            Workload::Heavy => self.base + self.heavy_extra,
        }
    }

    /// Wait out the delay for the given workload
    pub async fn inject(&self, workload: Workload) {
        let delay = self.delay_for(workload);
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}

impl Default for LatencyInjector {
    fn default() -> Self {
        Self::new(&LatencyConfig::default())
    }
}
