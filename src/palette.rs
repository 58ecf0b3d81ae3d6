use ratatui::style::Color;

/// Slice colors for the protocol chart, used in order and then cycled.
pub const PROTOCOL_PALETTE: [Color; 4] = [
    Color::Rgb(0x00, 0x88, 0xFE),
    Color::Rgb(0x00, 0xC4, 0x9F),
    Color::Rgb(0xFF, 0xBB, 0x28),
    Color::Rgb(0xFF, 0x80, 0x42),
];

/// Stroke for the traffic line chart.
pub const LINE_COLOR: Color = Color::Rgb(0x88, 0x84, 0xD8);

pub const HEADER_BG: Color = Color::Rgb(0x1E, 0x3A, 0x8A);

pub fn slice_color(index: usize) -> Color {
    PROTOCOL_PALETTE[index % PROTOCOL_PALETTE.len()]
}
