//! Request counters

use std::sync::atomic::{AtomicU64, Ordering};
use serde::{Deserialize, Serialize};
use crate::types::Service;

/// Process-wide request counters.
///
/// The global counter numbers every request the gateway sees; the
/// per-service counters only count requests handled inside that
/// service's namespace.
pub struct RequestCounters {
    global: AtomicU64,
    otp: AtomicU64,
    pos: AtomicU64,
    delivery: AtomicU64,
}

impl RequestCounters {
    pub fn new() -> Self {
        Self {
            global: AtomicU64::new(0),
            otp: AtomicU64::new(0),
            pos: AtomicU64::new(0),
            delivery: AtomicU64::new(0),
        }
    }

    fn counter(&self, service: Service) -> &AtomicU64 {
        match service {
            Service::Otp => &self.otp,
            Service::Pos => &self.pos,
            Service::Delivery => &self.delivery,
        }
    }

    /// Take the next global sequence number (1-based)
    pub fn next_sequence(&self) -> u64 {
        self.global.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Count a request for `service`, returning the new count
    pub fn record(&self, service: Service) -> u64 {
        self.counter(service).fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Requests handled by `service`
    pub fn count(&self, service: Service) -> u64 {
        self.counter(service).load(Ordering::Relaxed)
    }

    /// Requests seen by the gateway
    pub fn total(&self) -> u64 {
        self.global.load(Ordering::Relaxed)
    }

    pub fn snapshot(&self) -> CounterSnapshot {
        CounterSnapshot {
            total: self.total(),
            otp: self.count(Service::Otp),
            pos: self.count(Service::Pos),
            delivery: self.count(Service::Delivery),
        }
    }
}

impl Default for RequestCounters {
    fn default() -> Self {
        Self::new()
    }
}

/// Point-in-time view of the counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterSnapshot {
    pub total: u64,
    pub otp: u64,
    pub pos: u64,
    pub delivery: u64,
}

impl CounterSnapshot {
    pub fn get(&self, service: Service) -> u64 {
        match service {
            Service::Otp => self.otp,
            Service::Pos => self.pos,
            Service::Delivery => self.delivery,
        }
    }
}
