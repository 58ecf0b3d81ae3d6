use ratatui::{
    prelude::*,
    symbols,
    widgets::{Axis, Block, Borders, Chart, Clear, Dataset, GraphType, Paragraph, Row, Table},
};

use super::app::DashboardApp;
use super::widgets::{stat_card, PieChart};
use crate::palette::{HEADER_BG, LINE_COLOR};

const TITLE: &str = "Packet Monitoring Dashboard";

/// Main render function
pub fn render_ui(frame: &mut Frame, app: &DashboardApp) {
    let area = frame.size();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),            // Header banner
            Constraint::Length(4),            // Counter cards
            Constraint::Min(8),               // Charts
            Constraint::Length(table_height(app.visible_rows.len())), // Recent packets
            Constraint::Length(1),            // Footer
        ])
        .split(area);

    render_header(frame, chunks[0]);
    render_cards(frame, chunks[1], app);
    render_charts(frame, chunks[2], app);
    render_packet_table(frame, chunks[3], app);
    render_footer(frame, chunks[4], app);

    if app.show_help {
        render_help_overlay(frame, area);
    }
}

fn render_header(frame: &mut Frame, area: Rect) {
    let style = Style::default()
        .fg(Color::White)
        .bg(HEADER_BG)
        .add_modifier(Modifier::BOLD);
    let header = Paragraph::new(TITLE)
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(style));
    frame.render_widget(header, area);
}

fn render_cards(frame: &mut Frame, area: Rect, app: &DashboardApp) {
    let counters = &app.snapshot.counters;
    let cards = [
        ("Packets Captured", counters.packets_captured, Color::White),
        ("Active Connections", counters.active_connections, Color::White),
        ("Errors", counters.error_count, Color::Red),
        ("Alerts", counters.alert_count, Color::Yellow),
    ];

    let slots = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(25); 4])
        .split(area);

    for ((label, value, color), slot) in cards.into_iter().zip(slots.iter()) {
        frame.render_widget(stat_card(label, value, color), *slot);
    }
}

fn render_charts(frame: &mut Frame, area: Rect, app: &DashboardApp) {
    let row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(2, 3), Constraint::Ratio(1, 3)])
        .split(area);

    render_traffic_chart(frame, row[0], app);

    let block = Block::default()
        .title(" Protocol Distribution ")
        .borders(Borders::ALL);
    let inner = block.inner(row[1]);
    frame.render_widget(block, row[1]);
    frame.render_widget(PieChart::new(&app.snapshot.protocols), inner);
}

/// Borders + header row + one line per packet.
fn table_height(rows: usize) -> u16 {
    u16::try_from(rows)
        .unwrap_or(u16::MAX)
        .saturating_add(3)
        .max(4)
}

/// Round the y-axis ceiling up to the next hundred.
fn y_ceiling(peak: u64) -> f64 {
    peak.div_ceil(100).saturating_mul(100).max(100) as f64
}

fn render_traffic_chart(frame: &mut Frame, area: Rect, app: &DashboardApp) {
    let traffic = &app.snapshot.traffic;
    let points: Vec<(f64, f64)> = traffic
        .iter()
        .enumerate()
        .map(|(i, p)| (i as f64, p.count as f64))
        .collect();

    let x_max = (traffic.len().saturating_sub(1)).max(1) as f64;
    let y_max = y_ceiling(app.snapshot.peak_count());

    let x_labels: Vec<Span> = traffic
        .iter()
        .map(|p| Span::raw(p.time_label.clone()))
        .collect();
    let y_labels = vec![
        Span::raw("0"),
        Span::raw(format!("{:.0}", y_max / 2.0)),
        Span::raw(format!("{:.0}", y_max)),
    ];

    let dataset = Dataset::default()
        .name("count")
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(LINE_COLOR))
        .data(&points);

    let chart = Chart::new(vec![dataset])
        .block(
            Block::default()
                .title(" Packets Over Time ")
                .borders(Borders::ALL),
        )
        .x_axis(
            Axis::default()
                .style(Style::default().fg(Color::Gray))
                .bounds([0.0, x_max])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(Color::Gray))
                .bounds([0.0, y_max])
                .labels(y_labels),
        );

    frame.render_widget(chart, area);
}

fn render_packet_table(frame: &mut Frame, area: Rect, app: &DashboardApp) {
    let header = Row::new(["Source IP", "Destination IP", "Protocol", "Size", "Timestamp"])
        .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = app
        .visible_packets()
        .map(|pkt| Row::new(pkt.cells()))
        .collect();

    let widths = [
        Constraint::Percentage(24),
        Constraint::Percentage(24),
        Constraint::Percentage(16),
        Constraint::Percentage(16),
        Constraint::Percentage(20),
    ];

    let mut title = String::from(" Recent Packets ");
    if !app.filter_query.is_empty() {
        title.push_str(&format!("│ /{} ", app.filter_query));
    }
    if let Some(pkt) = app.selected_packet() {
        title.push_str(&format!("│ {} ", pkt.summary()));
    }

    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().title(title).borders(Borders::ALL))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol(">> ");

    let mut state = app.table_state.clone();
    frame.render_stateful_widget(table, area, &mut state);
}

fn render_footer(frame: &mut Frame, area: Rect, app: &DashboardApp) {
    let text = if app.filtering {
        format!(" Filter: /{}█  (Enter: keep │ Esc: clear)", app.filter_query)
    } else {
        " q: Quit │ ?: Help │ ↑/↓: Select packet │ /: Filter ".to_string()
    };
    let footer = Paragraph::new(text).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, area);
}

fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let help_text = r#"
    Packet Monitoring Dashboard - Help

    Keyboard Shortcuts:
    ─────────────────────────────────────
    q / Esc     Quit the application
    ? / h       Toggle this help screen
    ↑ / k       Previous packet
    ↓ / j       Next packet
    /           Filter packets (fuzzy)
    Enter       Keep filter and close prompt
    Esc         Clear filter (while filtering)
    "#;

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .style(Style::default().bg(Color::DarkGray));

    let paragraph = Paragraph::new(help_text)
        .block(block)
        .alignment(Alignment::Left);

    let popup_area = centered_rect(60, 60, area);
    frame.render_widget(Clear, popup_area);
    frame.render_widget(paragraph, popup_area);
}

/// Helper function to create a centered rect
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
