//! Terminal dashboard built on ratatui.

mod app;
mod event_handler;
mod filter;
mod render;
pub mod widgets;

pub use app::{run_dashboard, DashboardApp};
pub use event_handler::{map_key, DashboardEvent};
pub use filter::PacketFilter;
pub use render::render_ui;
