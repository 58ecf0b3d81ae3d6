use std::cell::Cell;
use std::collections::HashSet;

use pktdash::model::{PacketRecord, ProtocolShare, Snapshot};
use pktdash::palette::PROTOCOL_PALETTE;
use pktdash::ui::{render_ui, DashboardApp, DashboardEvent};
use pktdash::{DashboardConfig, MockSource, TelemetrySource};
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::style::Color;
use ratatui::Terminal;

// Rendering only ever reaches the data through `TelemetrySource::snapshot`,
// called once from `DashboardApp::new`, and writes only to the `TestBackend`
// buffer. `SingleUseSource` below fails the test if drawing or event
// handling goes back to the source.

fn mock_app() -> DashboardApp {
    DashboardApp::new(&MockSource, &DashboardConfig::default())
}

fn draw(app: &DashboardApp) -> Buffer {
    let backend = TestBackend::new(100, 40);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|frame| render_ui(frame, app)).unwrap();
    terminal.backend().buffer().clone()
}

fn lines(buf: &Buffer) -> Vec<String> {
    buf.content
        .chunks(buf.area.width as usize)
        .map(|row| row.iter().map(|c| c.symbol()).collect())
        .collect()
}

fn pie_colors(buf: &Buffer) -> HashSet<Color> {
    buf.content
        .iter()
        .filter(|c| c.symbol() == "█")
        .map(|c| c.fg)
        .collect()
}

/// Table body rows; the table title repeats the selected row with an arrow.
fn packet_rows(buf: &Buffer) -> Vec<String> {
    lines(buf)
        .into_iter()
        .filter(|l| l.contains("192.168.1.1") && !l.contains('➔'))
        .collect()
}

#[test]
fn test_header_and_counter_cards() {
    let out = lines(&draw(&mock_app()));
    assert!(out[1].contains("Packet Monitoring Dashboard"));

    for label in ["Packets Captured", "Active Connections", "Errors", "Alerts"] {
        assert!(out[4].contains(label), "missing card label {label}");
    }

    let values: Vec<&str> = out[5]
        .split(|c: char| c == '│' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .collect();
    assert_eq!(values, ["15234", "45", "3", "5"]);
}

#[test]
fn test_chart_titles_and_time_labels() {
    let out = lines(&draw(&mock_app())).join("\n");
    assert!(out.contains("Packets Over Time"));
    assert!(out.contains("Protocol Distribution"));
    assert!(out.contains("10:00"));
    assert!(out.contains("10:20"));
    assert!(out.contains("TCP 60%"));
    assert!(out.contains("UDP 25%"));
    assert!(out.contains("ICMP 10%"));
    assert!(out.contains("Other 5%"));
}

#[test]
fn test_pie_uses_one_palette_color_per_protocol() {
    let expected: HashSet<Color> = PROTOCOL_PALETTE.iter().copied().collect();
    assert_eq!(pie_colors(&draw(&mock_app())), expected);
}

#[test]
fn test_packet_table_rows_in_order() {
    let buf = draw(&mock_app());
    let out = lines(&buf);
    assert!(out.iter().any(|l| l.contains("Source IP") && l.contains("Timestamp")));

    let rows = packet_rows(&buf);
    let expected = [
        ("192.168.1.10", "10.0.0.5 ", "TCP", "512B", "10:20:15"),
        ("192.168.1.12", "10.0.0.8", "UDP", "256B", "10:20:20"),
        ("192.168.1.14", "10.0.0.9", "ICMP", "128B", "10:20:25"),
        ("192.168.1.15", "10.0.0.11", "TCP", "1KB", "10:20:30"),
    ];
    assert_eq!(rows.len(), expected.len());
    for (row, (src, dst, proto, size, time)) in rows.iter().zip(expected) {
        for field in [src, dst, proto, size, time] {
            assert!(row.contains(field), "row {row:?} missing {field}");
        }
    }
    assert!(rows[0].contains(">> "));
}

#[test]
fn test_rerender_is_identical() {
    let app = mock_app();
    let backend = TestBackend::new(100, 40);
    let mut terminal = Terminal::new(backend).unwrap();

    terminal.draw(|frame| render_ui(frame, &app)).unwrap();
    let first = terminal.backend().buffer().clone();
    terminal.draw(|frame| render_ui(frame, &app)).unwrap();
    let second = terminal.backend().buffer().clone();

    assert_eq!(first, second);
}

#[test]
fn test_filter_narrows_table() {
    let mut app = mock_app();
    app.handle_event(DashboardEvent::StartFilter);
    for c in "udp".chars() {
        app.handle_event(DashboardEvent::FilterInput(c));
    }

    let buf = draw(&app);
    let rows = packet_rows(&buf);
    assert_eq!(rows.len(), 1);
    assert!(rows[0].contains("10.0.0.8"));
    assert!(lines(&buf).iter().any(|l| l.contains("Filter: /udp")));
}

#[test]
fn test_help_overlay() {
    let mut app = mock_app();
    app.handle_event(DashboardEvent::ToggleHelp);
    let out = lines(&draw(&app)).join("\n");
    assert!(out.contains("Keyboard Shortcuts"));

    app.handle_event(DashboardEvent::ToggleHelp);
    let out = lines(&draw(&app)).join("\n");
    assert!(!out.contains("Keyboard Shortcuts"));
}

/// Counts snapshot calls and hands out more protocols than the palette has.
struct CountingSource {
    calls: Cell<usize>,
}

impl TelemetrySource for CountingSource {
    fn name(&self) -> &str {
        "counting"
    }

    fn snapshot(&self) -> Snapshot {
        self.calls.set(self.calls.get() + 1);
        Snapshot {
            protocols: ["TCP", "UDP", "ICMP", "ARP", "DNS"]
                .into_iter()
                .map(|name| ProtocolShare::new(name, 20.0))
                .collect(),
            ..MockSource.snapshot()
        }
    }
}

#[test]
fn test_snapshot_loaded_once_and_palette_cycles() {
    let source = CountingSource { calls: Cell::new(0) };
    let app = DashboardApp::new(&source, &DashboardConfig::default());
    let first = draw(&app);
    let second = draw(&app);

    assert_eq!(source.calls.get(), 1);
    assert_eq!(first, second);
    assert_eq!(app.source_name, "counting");

    // Five slices, four colors: the fifth reuses the first.
    let expected: HashSet<Color> = PROTOCOL_PALETTE.iter().copied().collect();
    assert_eq!(pie_colors(&first), expected);
    assert!(lines(&first).join("\n").contains("DNS 20%"));
}

/// Hands out one snapshot; any further call fails the test.
struct SingleUseSource {
    used: Cell<bool>,
}

impl TelemetrySource for SingleUseSource {
    fn name(&self) -> &str {
        "single-use"
    }

    fn snapshot(&self) -> Snapshot {
        assert!(!self.used.replace(true), "snapshot requested more than once");
        MockSource.snapshot()
    }
}

#[test]
fn test_render_and_events_never_reload_source() {
    let source = SingleUseSource { used: Cell::new(false) };
    let mut app = DashboardApp::new(&source, &DashboardConfig::default());

    let backend = TestBackend::new(100, 40);
    let mut terminal = Terminal::new(backend).unwrap();
    for event in [
        DashboardEvent::None,
        DashboardEvent::SelectNext,
        DashboardEvent::ToggleHelp,
        DashboardEvent::ToggleHelp,
        DashboardEvent::StartFilter,
        DashboardEvent::FilterInput('t'),
        DashboardEvent::ClearFilter,
    ] {
        app.handle_event(event);
        terminal.draw(|frame| render_ui(frame, &app)).unwrap();
    }

    assert!(source.used.get());
}

/// More packet rows than a terminal height can express.
struct FloodSource {
    rows: usize,
}

impl TelemetrySource for FloodSource {
    fn name(&self) -> &str {
        "flood"
    }

    fn snapshot(&self) -> Snapshot {
        let packet = PacketRecord::new("192.168.1.10", "10.0.0.5", "TCP", "512B", "10:20:15");
        Snapshot {
            packets: vec![packet; self.rows],
            ..MockSource.snapshot()
        }
    }
}

#[test]
fn test_huge_packet_table_renders() {
    for rows in [65_534, 70_000] {
        let app = DashboardApp::new(&FloodSource { rows }, &DashboardConfig::default());
        assert_eq!(app.visible_rows.len(), rows);

        let buf = draw(&app);
        assert_eq!(buf.area.height, 40);
    }
}
