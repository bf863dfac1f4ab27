//! Graceful shutdown
//!
//! Tracks in-flight requests so a shutdown signal can wait for them to
//! finish. Requests arriving while draining are still served.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::{debug, error, info, warn};

/// Default upper bound on how long shutdown waits for in-flight requests
pub const DEFAULT_DRAIN_TIMEOUT: Duration = Duration::from_secs(30);

const DRAIN_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Shutdown state for tracking in-flight requests
#[derive(Debug)]
pub struct ShutdownState {
    in_flight: AtomicU64,
    draining: AtomicBool,
    drain_timeout: Duration,
    start_time: Instant,
}

impl ShutdownState {
    pub fn new(drain_timeout: Duration) -> Self {
        Self {
            in_flight: AtomicU64::new(0),
            draining: AtomicBool::new(false),
            drain_timeout,
            start_time: Instant::now(),
        }
    }

    /// Mark a request in flight until the returned guard drops
    pub fn track(&self) -> InFlightGuard<'_> {
        self.request_started();
        InFlightGuard { state: self }
    }

    pub fn request_started(&self) {
        self.in_flight.fetch_add(1, Ordering::SeqCst);
    }

    pub fn request_completed(&self) {
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
    }

    pub fn in_flight_count(&self) -> u64 {
        self.in_flight.load(Ordering::SeqCst)
    }

    pub fn is_draining(&self) -> bool {
        self.draining.load(Ordering::SeqCst)
    }

    pub fn start_drain(&self) {
        info!(in_flight = self.in_flight_count(), "Starting graceful shutdown");
        self.draining.store(true, Ordering::SeqCst);
    }

    pub fn uptime(&self) -> Duration {
        self.start_time.elapsed()
    }

    pub fn drain_timeout(&self) -> Duration {
        self.drain_timeout
    }

    /// Wait until no request is in flight or the drain timeout passes
    pub async fn wait_for_drain(&self) {
        let drain_start = tokio::time::Instant::now();

        while self.in_flight_count() > 0 {
            if drain_start.elapsed() > self.drain_timeout {
                warn!(
                    remaining_requests = self.in_flight_count(),
                    "Drain timeout exceeded, forcing shutdown"
                );
                return;
            }

            debug!(
                in_flight = self.in_flight_count(),
                elapsed_ms = drain_start.elapsed().as_millis() as u64,
                "Waiting for in-flight requests"
            );
            tokio::time::sleep(DRAIN_POLL_INTERVAL).await;
        }

        info!("All requests drained");
    }
}

/// Decrements the in-flight count on drop, including when the request
/// future is cancelled
pub struct InFlightGuard<'a> {
    state: &'a ShutdownState,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.state.request_completed();
    }
}

impl Default for ShutdownState {
    fn default() -> Self {
        Self::new(DEFAULT_DRAIN_TIMEOUT)
    }
}

/// Resolves on Ctrl+C or SIGTERM, after in-flight requests drain
pub async fn graceful_shutdown(shutdown_state: Arc<ShutdownState>) {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            error!(error = %err, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                error!(error = %err, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C"),
        _ = terminate => info!("Received SIGTERM"),
    }

    shutdown_state.start_drain();
    shutdown_state.wait_for_drain().await;
}
