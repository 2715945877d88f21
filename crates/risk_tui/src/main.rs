//! Riskboard TUI Entry Point

use anyhow::Result;
use clap::Parser;
use risk_tui::prelude::*;

/// Riskboard terminal dashboard
#[derive(Parser, Debug)]
#[command(name = "risk-tui")]
#[command(version, about, long_about = None)]
struct Args {
    /// Base URL of the risk-management backend
    #[arg(long, env = "RISK_API_URL", default_value = "http://localhost:8080")]
    api_url: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Note: Tracing is disabled for TUI to avoid terminal interference
    // For debugging, use RUST_LOG env var with a file logger

    let args = Args::parse();

    // Create and run the TUI app
    let mut app = TuiApp::new(args.api_url)?;
    app.run().await?;

    Ok(())
}
