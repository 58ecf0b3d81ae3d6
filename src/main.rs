use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;

use pktdash::config::{Cli, DashboardConfig};
use pktdash::network::{load_snapshot, MockSource, TelemetrySource};
use pktdash::ui::run_dashboard;

/// Print the snapshot as one line of JSON.
fn print_snapshot(source: &dyn TelemetrySource) -> pktdash::Result<()> {
    let snapshot = load_snapshot(source);
    let mut stdout = io::stdout().lock();
    serde_json::to_writer(&mut stdout, &snapshot)?;
    writeln!(stdout)?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    pktdash::init_logging();

    let cli = Cli::parse();
    let config = DashboardConfig::from_cli(&cli).context("Invalid arguments")?;
    log::debug!("Starting with {:?}", config);

    let source = MockSource;

    if config.json {
        return print_snapshot(&source).context("Failed to write snapshot");
    }

    run_dashboard(&source, &config)
        .await
        .context("Dashboard exited with an error")
}
