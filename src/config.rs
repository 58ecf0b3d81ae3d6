use std::time::Duration;

use clap::Parser;

use crate::error::{DashError, Result};

pub const DEFAULT_TICK_RATE_MS: u64 = 250;
pub const MIN_TICK_RATE_MS: u64 = 16;
pub const MAX_TICK_RATE_MS: u64 = 10_000;

#[derive(Debug, Parser)]
#[command(name = "pktdash", version, about = "Packet monitoring dashboard")]
pub struct Cli {
    /// Redraw interval in milliseconds
    #[arg(long = "tick-rate", value_name = "MS", default_value_t = DEFAULT_TICK_RATE_MS)]
    pub tick_rate_ms: u64,

    /// Print the snapshot as JSON and exit
    #[arg(long)]
    pub json: bool,
}

/// Settings for a dashboard run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    pub tick_rate: Duration,
    pub json: bool,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            tick_rate: Duration::from_millis(DEFAULT_TICK_RATE_MS),
            json: false,
        }
    }
}

impl DashboardConfig {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        if !(MIN_TICK_RATE_MS..=MAX_TICK_RATE_MS).contains(&cli.tick_rate_ms) {
            return Err(DashError::config(format!(
                "tick rate must be between {} and {} ms, got {}",
                MIN_TICK_RATE_MS, MAX_TICK_RATE_MS, cli.tick_rate_ms
            )));
        }

        Ok(Self {
            tick_rate: Duration::from_millis(cli.tick_rate_ms),
            json: cli.json,
        })
    }
}
