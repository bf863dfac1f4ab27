//! CLI Command Implementations

use std::time::{Duration, Instant};

use anyhow::{bail, Context, Result};

use crate::config::RESPONSE_DELAY_ENV;
use crate::types::Service;
use crate::{GatewayConfig, VERSION};

use super::{Cli, Commands, ConfigAction, ConfigCommand, HealthCommand, ServeCommand};

/// Execute the CLI command
pub async fn execute(cli: Cli) -> Result<()> {
    let config = load_config(&cli)?;

    match cli.command {
        Commands::Serve(cmd) => execute_serve(cmd, config, cli.quiet).await,
        Commands::Health(cmd) => execute_health(cmd).await,
        Commands::Config(cmd) => execute_config(cmd, config),
        Commands::Version => execute_version(),
    }
}

/// File (if any), then environment, then global flags
pub fn load_config(cli: &Cli) -> Result<GatewayConfig> {
    let base = match &cli.config {
        Some(path) => GatewayConfig::from_file(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => GatewayConfig::default(),
    };

    let mut config = base
        .with_env_overrides()
        .context("Invalid environment configuration")?;

    if let Some(level) = &cli.log_level {
        config.telemetry.log_level = level.clone();
    }
    if cli.json_logs {
        config.telemetry.json_logs = true;
    }
    if cli.quiet {
        config.server.request_logging = false;
    }

    Ok(config)
}

/// Apply serve flags on top of the loaded configuration
pub fn apply_serve_overrides(cmd: ServeCommand, mut config: GatewayConfig) -> GatewayConfig {
    if let Some(port) = cmd.port {
        config.server.port = port;
    }
    if let Some(host) = cmd.host {
        config.server.host = host;
    }
    if let Some(delay) = cmd.delay_ms {
        config.latency.response_delay_ms = delay;
    }
    if let Some(seed) = cmd.seed {
        config.seed = Some(seed);
    }
    config
}

async fn execute_serve(cmd: ServeCommand, config: GatewayConfig, quiet: bool) -> Result<()> {
    let config = apply_serve_overrides(cmd, config);
    config.validate().context("Configuration validation failed")?;

    if !quiet {
        print_banner(&config);
    }

    crate::run_server(config).await
}

async fn execute_health(cmd: HealthCommand) -> Result<()> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(cmd.timeout))
        .build()?;

    let base = cmd.url.trim_end_matches('/');
    let mut urls = vec![format!("{base}/health")];
    if cmd.services {
        urls.extend(Service::ALL.iter().map(|s| format!("{base}{}/health", s.mount())));
    }

    let mut failures = 0;
    for url in &urls {
        let start = Instant::now();
        match client.get(url).send().await {
            Ok(response) => {
                let latency = start.elapsed();
                let status = response.status();
                let body: serde_json::Value = response.json().await.unwrap_or_default();

                if !status.is_success() {
                    failures += 1;
                }

                match cmd.format.as_str() {
                    "json" => {
                        let result = serde_json::json!({
                            "url": url,
                            "status": status.as_u16(),
                            "latency_ms": latency.as_millis() as u64,
                            "response": body,
                        });
                        println!("{}", serde_json::to_string_pretty(&result)?);
                    }
                    _ => {
                        let mark = if status.is_success() { "✓" } else { "✗" };
                        println!("{mark} {url} - Status: {} - Latency: {latency:?}", status.as_u16());
                        if let (Some(service), Some(requests)) = (body.get("service"), body.get("requests")) {
                            println!("  Service: {service}  Requests: {requests}");
                        }
                    }
                }
            }
            Err(e) => {
                failures += 1;
                match cmd.format.as_str() {
                    "json" => {
                        let result = serde_json::json!({ "url": url, "error": e.to_string() });
                        println!("{}", serde_json::to_string_pretty(&result)?);
                    }
                    _ => println!("✗ {url} - Error: {e}"),
                }
            }
        }
    }

    if failures > 0 {
        bail!("Health check failed for {failures} of {} endpoints", urls.len());
    }
    Ok(())
}

fn execute_config(cmd: ConfigCommand, config: GatewayConfig) -> Result<()> {
    match cmd.action {
        ConfigAction::Show { format } => {
            println!("{}", render_config(&config, &format)?);
            Ok(())
        }

        ConfigAction::Validate { file } => {
            let config = GatewayConfig::from_file(&file)?;
            println!("Configuration at {} is valid", file.display());
            println!("  Listen:    {}:{}", config.server.host, config.server.port);
            println!("  Delay:     {}ms", config.latency.response_delay_ms);
            println!(
                "  Seed:      {}",
                config.seed.map_or("random".to_string(), |s| s.to_string())
            );
            Ok(())
        }

        ConfigAction::Env => {
            println!("Environment Variable Mappings:");
            println!();
            println!("  {:<28} Base response delay in ms (default: 50)", RESPONSE_DELAY_ENV);
            println!("  {:<28} Server port (default: 3000)", "PORT");
            println!("  {:<28} Server host (default: 0.0.0.0)", "HOST");
            println!("  {:<28} Seed for randomized fields", "MOCK_GATEWAY_SEED");
            println!("  {:<28} Log level (default: info)", "MOCK_GATEWAY_LOG_LEVEL");
            println!("  {:<28} Configuration file path", "MOCK_GATEWAY_CONFIG");
            println!("  {:<28} Enable JSON logs", "MOCK_GATEWAY_JSON_LOGS");
            println!("  {:<28} Log filter, overrides the level", "RUST_LOG");
            Ok(())
        }
    }
}

/// Serialize the configuration in the requested format (yaml by default)
pub fn render_config(config: &GatewayConfig, format: &str) -> Result<String> {
    Ok(match format {
        "toml" => toml::to_string_pretty(config)?,
        "json" => serde_json::to_string_pretty(config)?,
        _ => serde_yaml::to_string(config)?,
    })
}

fn execute_version() -> Result<()> {
    println!("mock-gateway {}", VERSION);
    println!();
    println!("Simulated services:");
    for service in Service::ALL {
        println!("  {:<20} {}", service.health_name(), service.mount());
    }
    Ok(())
}

fn print_banner(config: &GatewayConfig) {
    let base = format!("http://{}:{}", config.server.host, config.server.port);

    println!("Mock Gateway v{}", VERSION);
    println!();
    println!("Configuration:");
    println!("  • Server:    {}:{}", config.server.host, config.server.port);
    println!("  • Delay:     {}ms", config.latency.response_delay_ms);
    println!(
        "  • Seed:      {}",
        config.seed.map_or("random".to_string(), |s| s.to_string())
    );
    println!();
    println!("Endpoints:");
    println!("  • 2Factor:   {base}{}", Service::Otp.mount());
    println!("  • Petpooja:  {base}{}", Service::Pos.mount());
    println!("  • Pidge:     {base}{}", Service::Delivery.mount());
    println!("  • Health:    {base}/health");
    println!("  • Metrics:   {base}/metrics");
    println!();
}
