//! Core simulation engine
//!
//! The GatewayEngine owns everything the simulated services share:
//! - request counters
//! - the latency injector
//! - the OTP registry
//! - the random source used by the response synthesizers

mod otp;
mod state;

pub use otp::*;
pub use state::*;

use std::time::{Duration, Instant};
use parking_lot::{Mutex, MutexGuard};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::GatewayConfig;
use crate::latency::{LatencyInjector, Workload};
use crate::types::Service;

/// The main simulation engine
pub struct GatewayEngine {
    latency: LatencyInjector,
    otp: OtpRegistry,
    counters: RequestCounters,
    rng: Mutex<StdRng>,
    start_time: Instant,
}

impl GatewayEngine {
    /// Create a new engine with the given configuration
    pub fn new(config: &GatewayConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            latency: LatencyInjector::new(&config.latency),
            otp: OtpRegistry::new(),
            counters: RequestCounters::new(),
            rng: Mutex::new(rng),
            start_time: Instant::now(),
        }
    }

    /// Admit a request into `service`: count it, then wait out the
    /// injected latency. Returns the service's new request count.
    pub async fn admit(&self, service: Service, workload: Workload) -> u64 {
        let count = self.counters.record(service);
        self.latency.inject(workload).await;
        count
    }

    /// Wait out the base latency without counting a service request
    pub async fn idle(&self) {
        self.latency.inject(Workload::Standard).await;
    }

    /// Random source for response synthesis.
    ///
    /// Never hold the guard across an `.await`.
    pub fn rng(&self) -> MutexGuard<'_, StdRng> {
        self.rng.lock()
    }

    pub fn otp_registry(&self) -> &OtpRegistry {
        &self.otp
    }

    pub fn counters(&self) -> &RequestCounters {
        &self.counters
    }

    pub fn latency(&self) -> &LatencyInjector {
        &self.latency
    }

    /// Get engine uptime
    pub fn uptime(&self) -> Duration {
        self.start_time.elapsed()
    }
}

impl Default for GatewayEngine {
    fn default() -> Self {
        Self::new(&GatewayConfig::default())
    }
}
