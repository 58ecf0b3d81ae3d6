use std::io::{self, Stdout};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, widgets::TableState, Terminal};
use tokio::sync::mpsc;

use crate::config::DashboardConfig;
use crate::model::{PacketRecord, Snapshot};
use crate::network::{load_snapshot, TelemetrySource};

use super::event_handler::{map_key, DashboardEvent};
use super::filter::PacketFilter;
use super::render::render_ui;

const INPUT_POLL: Duration = Duration::from_millis(100);

/// Dashboard state. The snapshot is loaded once and never changes.
pub struct DashboardApp {
    pub snapshot: Snapshot,
    pub source_name: String,
    pub tick_rate: Duration,
    pub should_quit: bool,
    pub show_help: bool,
    pub filtering: bool,
    pub filter_query: String,
    /// Indices into `snapshot.packets` that pass the filter.
    pub visible_rows: Vec<usize>,
    pub table_state: TableState,
    filter: PacketFilter,
}

impl DashboardApp {
    pub fn new(source: &dyn TelemetrySource, config: &DashboardConfig) -> Self {
        let snapshot = load_snapshot(source);
        let visible_rows = (0..snapshot.packets.len()).collect::<Vec<_>>();

        let mut table_state = TableState::default();
        if !visible_rows.is_empty() {
            table_state.select(Some(0));
        }

        Self {
            snapshot,
            source_name: source.name().to_string(),
            tick_rate: config.tick_rate,
            should_quit: false,
            show_help: false,
            filtering: false,
            filter_query: String::new(),
            visible_rows,
            table_state,
            filter: PacketFilter::new(),
        }
    }

    /// Packet rows currently shown in the table.
    pub fn visible_packets(&self) -> impl Iterator<Item = &PacketRecord> {
        self.visible_rows
            .iter()
            .filter_map(|&i| self.snapshot.packets.get(i))
    }

    pub fn selected_packet(&self) -> Option<&PacketRecord> {
        let row = self.table_state.selected()?;
        let idx = *self.visible_rows.get(row)?;
        self.snapshot.packets.get(idx)
    }

    pub fn handle_event(&mut self, event: DashboardEvent) {
        match event {
            DashboardEvent::Quit => self.should_quit = true,
            DashboardEvent::ToggleHelp => self.show_help = !self.show_help,
            DashboardEvent::SelectNext => {
                let len = self.visible_rows.len();
                let next = match self.table_state.selected() {
                    Some(i) if i + 1 < len => i + 1,
                    _ => 0,
                };
                self.table_state.select(if len == 0 { None } else { Some(next) });
            }
            DashboardEvent::SelectPrev => {
                let len = self.visible_rows.len();
                let prev = match self.table_state.selected() {
                    Some(0) | None => len.saturating_sub(1),
                    Some(i) => i - 1,
                };
                self.table_state.select(if len == 0 { None } else { Some(prev) });
            }
            DashboardEvent::StartFilter => self.filtering = true,
            DashboardEvent::FilterInput(c) => {
                self.filter_query.push(c);
                self.refilter();
            }
            DashboardEvent::FilterBackspace => {
                self.filter_query.pop();
                self.refilter();
            }
            DashboardEvent::ConfirmFilter => self.filtering = false,
            DashboardEvent::ClearFilter => {
                self.filtering = false;
                self.filter_query.clear();
                self.refilter();
            }
            DashboardEvent::None => {}
        }
    }

    fn refilter(&mut self) {
        self.visible_rows = self
            .filter
            .matching_rows(&self.snapshot.packets, &self.filter_query);

        let selected = match (self.visible_rows.len(), self.table_state.selected()) {
            (0, _) => None,
            (len, Some(i)) => Some(i.min(len - 1)),
            (_, None) => Some(0),
        };
        self.table_state.select(selected);
    }
}

/// Owns the terminal while the dashboard runs and restores it on drop.
struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalGuard {
    fn enter() -> crate::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        terminal.clear()?;
        Ok(Self { terminal })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

/// Forward key presses until the receiving side goes away.
fn read_input(tx: mpsc::UnboundedSender<KeyEvent>) -> io::Result<()> {
    while !tx.is_closed() {
        if !event::poll(INPUT_POLL)? {
            continue;
        }
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press && tx.send(key).is_err() {
                break;
            }
        }
    }
    Ok(())
}

/// Run the dashboard until the user quits.
pub async fn run_dashboard(source: &dyn TelemetrySource, config: &DashboardConfig) -> Result<()> {
    let mut app = DashboardApp::new(source, config);
    let mut guard = TerminalGuard::enter().context("Failed to set up terminal")?;
    log::info!("Dashboard started with '{}' source", app.source_name);

    let (tx, mut rx) = mpsc::unbounded_channel::<KeyEvent>();
    let reader = tokio::task::spawn_blocking(move || read_input(tx));
    let mut ticker = tokio::time::interval(app.tick_rate);

    loop {
        guard
            .terminal
            .draw(|frame| render_ui(frame, &app))
            .context("Failed to draw dashboard")?;

        tokio::select! {
            _ = ticker.tick() => {}
            key = rx.recv() => match key {
                Some(key) => app.handle_event(map_key(key, app.filtering)),
                None => break,
            },
        }

        if app.should_quit {
            break;
        }
    }

    drop(rx);
    reader
        .await
        .context("Input reader panicked")?
        .context("Input reader failed")?;

    log::info!("Dashboard stopped");
    Ok(())
}
