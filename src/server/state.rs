//! Server state management

use std::sync::Arc;
use crate::config::GatewayConfig;
use crate::engine::GatewayEngine;
use crate::telemetry::GatewayMetrics;
use super::shutdown::ShutdownState;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<GatewayEngine>,
    pub metrics: Arc<GatewayMetrics>,
    pub config: Arc<GatewayConfig>,
    pub shutdown: Arc<ShutdownState>,
}

impl AppState {
    pub fn new(config: GatewayConfig) -> Self {
        Self {
            engine: Arc::new(GatewayEngine::new(&config)),
            metrics: Arc::new(GatewayMetrics::new()),
            config: Arc::new(config),
            shutdown: Arc::new(ShutdownState::default()),
        }
    }
}
