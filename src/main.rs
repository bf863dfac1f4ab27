//! Mock gateway CLI

use clap::Parser;

use mock_gateway::cli::{execute, Cli};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    execute(cli).await
}
