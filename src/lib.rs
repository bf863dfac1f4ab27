//! # Mock Gateway
//!
//! Stand-in for the third-party APIs a food-ordering backend talks to,
//! for load tests that must not hit real providers:
//!
//! - **2Factor** SMS/OTP under `/mock/otp`
//! - **Petpooja** POS under `/mock/petpooja`
//! - **Pidge** delivery under `/mock/pidge`
//!
//! Every request waits out a configurable delay (`RESPONSE_DELAY_MS`),
//! responses are synthesized with plausible randomized fields, and
//! request counts are exposed through health endpoints and `/metrics`.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use mock_gateway::{GatewayConfig, run_server};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = GatewayConfig::from_env()?;
//!     run_server(config).await
//! }
//! ```

pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod latency;
pub mod providers;
pub mod server;
pub mod telemetry;
pub mod types;

pub use config::GatewayConfig;
pub use engine::GatewayEngine;
pub use error::{GatewayError, GatewayResult};
pub use server::{create_router, run_server, AppState};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
