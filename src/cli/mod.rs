//! CLI Module for the mock gateway
//!
//! Subcommands for:
//! - starting the gateway
//! - health checking a running instance
//! - printing the effective configuration

mod commands;

pub use commands::*;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::VERSION;

/// Mock gateway for the 2Factor, Petpooja and Pidge APIs
#[derive(Parser, Debug)]
#[command(name = "mock-gateway")]
#[command(version = VERSION)]
#[command(about = "Mock 2Factor, Petpooja and Pidge APIs for load testing")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Configuration file path (YAML, TOML, or JSON)
    #[arg(short, long, global = true, env = "MOCK_GATEWAY_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Enable JSON log output
    #[arg(long, global = true, env = "MOCK_GATEWAY_JSON_LOGS")]
    pub json_logs: bool,

    /// Quiet mode - suppress the banner and per-request info logs
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the gateway
    #[command(alias = "s")]
    Serve(ServeCommand),

    /// Health check a running instance
    Health(HealthCommand),

    /// Configuration management
    #[command(alias = "cfg")]
    Config(ConfigCommand),

    /// Show version information
    Version,
}

/// Start the gateway
#[derive(Parser, Debug)]
pub struct ServeCommand {
    /// Port to listen on (overrides PORT)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Host to bind to (overrides HOST)
    #[arg(long)]
    pub host: Option<String>,

    /// Base response delay in milliseconds (overrides RESPONSE_DELAY_MS)
    #[arg(short, long)]
    pub delay_ms: Option<u64>,

    /// Seed for reproducible randomized fields (overrides MOCK_GATEWAY_SEED)
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Health check a running instance
#[derive(Parser, Debug)]
pub struct HealthCommand {
    /// Base URL of the gateway
    #[arg(short, long, default_value = "http://localhost:3000")]
    pub url: String,

    /// Timeout in seconds
    #[arg(short, long, default_value = "5")]
    pub timeout: u64,

    /// Also probe each mock service's health endpoint
    #[arg(short, long)]
    pub services: bool,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    pub format: String,
}

/// Configuration management
#[derive(Parser, Debug)]
pub struct ConfigCommand {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show the effective configuration
    Show {
        /// Output format (yaml, toml, json)
        #[arg(short, long, default_value = "yaml")]
        format: String,
    },

    /// Validate a configuration file
    Validate {
        /// Configuration file to validate
        file: PathBuf,
    },

    /// Show environment variable mappings
    Env,
}
