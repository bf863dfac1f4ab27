//! Telemetry and observability module
//!
//! Structured logging with tracing, plus the Prometheus text metrics
//! served at `/metrics`.

mod metrics;

pub use metrics::*;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::TelemetryConfig;
use crate::error::GatewayResult;

/// Initialize the telemetry subsystem.
///
/// `RUST_LOG` takes precedence over the configured level. A second call
/// in the same process is a no-op.
pub fn init_telemetry(config: &TelemetryConfig) -> GatewayResult<()> {
    if !config.enabled {
        return Ok(());
    }

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let subscriber = tracing_subscriber::registry().with(env_filter);

    let installed = if config.json_logs {
        let json_layer = tracing_subscriber::fmt::layer()
            .json()
            .with_file(true)
            .with_line_number(true)
            .with_thread_ids(true)
            .with_target(true);

        subscriber.with(json_layer).try_init().is_ok()
    } else {
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_file(false)
            .with_line_number(false)
            .with_target(true)
            .compact();

        subscriber.with(fmt_layer).try_init().is_ok()
    };

    if installed {
        tracing::info!(
            service = %config.service_name,
            version = %env!("CARGO_PKG_VERSION"),
            "Telemetry initialized"
        );
    }

    Ok(())
}
