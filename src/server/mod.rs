//! HTTP server implementation
//!
//! Provides the Axum-based gateway that hosts the simulated 2Factor,
//! Petpooja and Pidge APIs under their mount prefixes.

mod extract;
mod handlers;
mod middleware;
mod routes;
mod state;
pub mod shutdown;

pub use extract::*;
pub use handlers::*;
pub use middleware::*;
pub use routes::*;
pub use shutdown::*;
pub use state::*;

use axum::{middleware::from_fn_with_state, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::GatewayConfig;
use crate::telemetry::init_telemetry;
use crate::types::Service;

/// Run the gateway until a shutdown signal arrives
pub async fn run_server(config: GatewayConfig) -> anyhow::Result<()> {
    init_telemetry(&config.telemetry)?;
    config.validate()?;

    let addr = config.server.socket_addr()?;
    let state = AppState::new(config);
    let shutdown_state = state.shutdown.clone();

    info!(
        version = env!("CARGO_PKG_VERSION"),
        %addr,
        response_delay_ms = state.config.latency.response_delay_ms,
        seeded = state.config.seed.is_some(),
        "Starting mock gateway"
    );
    for service in Service::ALL {
        info!(service = %service, mount = service.mount(), "Mounted mock service");
    }

    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(graceful_shutdown(shutdown_state))
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Create the gateway router with every service mounted
pub fn create_router(state: AppState) -> Router {
    let middleware = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(from_fn_with_state(state.clone(), request_sequence_middleware));

    Router::new()
        .merge(routes::health_routes())
        .nest(Service::Otp.mount(), routes::otp_routes())
        .nest(Service::Pos.mount(), routes::pos_routes())
        .nest(Service::Delivery.mount(), routes::delivery_routes())
        .layer(middleware)
        .with_state(state)
}
