//! Prometheus metrics implementation

use std::fmt::Write;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use crate::engine::CounterSnapshot;
use crate::types::Service;

/// Pre-defined metric names
pub mod metric_names {
    pub const REQUESTS_TOTAL: &str = "mock_gateway_requests_total";
    pub const SERVICE_REQUESTS_TOTAL: &str = "mock_gateway_service_requests_total";
    pub const IN_FLIGHT: &str = "mock_gateway_in_flight";
    pub const REQUEST_DURATION: &str = "mock_gateway_request_duration_seconds";
}

/// Upper bounds (seconds) of the duration histogram buckets
pub const DURATION_BUCKETS: [f64; 11] = [0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0];

/// Fixed-bucket histogram with lock-free observation
pub struct DurationHistogram {
    buckets: [AtomicU64; DURATION_BUCKETS.len()],
    count: AtomicU64,
    sum_micros: AtomicU64,
}

impl DurationHistogram {
    pub fn new() -> Self {
        Self {
            buckets: Default::default(),
            count: AtomicU64::new(0),
            sum_micros: AtomicU64::new(0),
        }
    }

    pub fn observe(&self, duration: Duration) {
        let secs = duration.as_secs_f64();
        // Buckets are cumulative, as Prometheus expects
        for (bound, bucket) in DURATION_BUCKETS.iter().zip(&self.buckets) {
            if secs <= *bound {
                bucket.fetch_add(1, Ordering::Relaxed);
            }
        }
        self.count.fetch_add(1, Ordering::Relaxed);
        self.sum_micros
            .fetch_add(duration.as_micros() as u64, Ordering::Relaxed);
    }

    pub fn count(&self) -> u64 {
        self.count.load(Ordering::Relaxed)
    }

    pub fn sum_seconds(&self) -> f64 {
        self.sum_micros.load(Ordering::Relaxed) as f64 / 1_000_000.0
    }

    /// Observations at or below `DURATION_BUCKETS[index]`
    pub fn bucket(&self, index: usize) -> u64 {
        self.buckets
            .get(index)
            .map(|b| b.load(Ordering::Relaxed))
            .unwrap_or(0)
    }
}

impl Default for DurationHistogram {
    fn default() -> Self {
        Self::new()
    }
}

/// Gateway metrics.
///
/// Request counts live in the engine's counters; this only adds what
/// the counters don't already track.
pub struct GatewayMetrics {
    durations: DurationHistogram,
}

impl GatewayMetrics {
    pub fn new() -> Self {
        Self {
            durations: DurationHistogram::new(),
        }
    }

    /// Record a completed request
    pub fn record_request(&self, duration: Duration) {
        self.durations.observe(duration);
    }

    pub fn durations(&self) -> &DurationHistogram {
        &self.durations
    }

    /// Export metrics in Prometheus text format
    pub fn export(&self, counters: &CounterSnapshot, in_flight: u64) -> String {
        use metric_names::*;

        let mut out = String::new();

        // Writing to a String cannot fail
        let _ = writeln!(out, "# TYPE {REQUESTS_TOTAL} counter");
        let _ = writeln!(out, "{REQUESTS_TOTAL} {}", counters.total);

        let _ = writeln!(out, "# TYPE {SERVICE_REQUESTS_TOTAL} counter");
        for service in Service::ALL {
            let _ = writeln!(
                out,
                "{SERVICE_REQUESTS_TOTAL}{{service=\"{service}\"}} {}",
                counters.get(service)
            );
        }

        let _ = writeln!(out, "# TYPE {IN_FLIGHT} gauge");
        let _ = writeln!(out, "{IN_FLIGHT} {in_flight}");

        let _ = writeln!(out, "# TYPE {REQUEST_DURATION} histogram");
        for (index, bound) in DURATION_BUCKETS.iter().enumerate() {
            let _ = writeln!(
                out,
                "{REQUEST_DURATION}_bucket{{le=\"{bound}\"}} {}",
                self.durations.bucket(index)
            );
        }
        let _ = writeln!(
            out,
            "{REQUEST_DURATION}_bucket{{le=\"+Inf\"}} {}",
            self.durations.count()
        );
        let _ = writeln!(out, "{REQUEST_DURATION}_sum {}", self.durations.sum_seconds());
        let _ = writeln!(out, "{REQUEST_DURATION}_count {}", self.durations.count());

        out
    }
}

impl Default for GatewayMetrics {
    fn default() -> Self {
        Self::new()
    }
}
