//! pktdash: a terminal dashboard for network packet statistics.

pub mod error;
pub use error::{DashError, Result};

pub mod config;
pub mod model;
pub mod network;
pub mod palette;
pub mod ui;

pub use config::{Cli, DashboardConfig};
pub use model::Snapshot;
pub use network::{load_snapshot, MockSource, TelemetrySource};

/// Initialize logging. `RUST_LOG` overrides the default `warn` filter.
pub fn init_logging() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();
}
