//! Custom widgets for the dashboard.

use std::f64::consts::TAU;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

use crate::model::ProtocolShare;
use crate::palette::slice_color;

/// Terminal cells are roughly twice as tall as they are wide.
const CELL_ASPECT: f64 = 2.0;

const SLICE_SYMBOL: &str = "█";
const SWATCH_SYMBOL: &str = "■";

/// Index of the slice covering `position` (a fraction of a full turn,
/// clockwise from 12 o'clock). Slices with no area are skipped.
pub fn slice_at(fractions: &[f64], position: f64) -> Option<usize> {
    let mut cumulative = 0.0;
    let mut last = None;
    for (idx, &fraction) in fractions.iter().enumerate() {
        if fraction <= 0.0 {
            continue;
        }
        cumulative += fraction;
        last = Some(idx);
        if position < cumulative {
            return Some(idx);
        }
    }
    // Rounding can leave the final sliver just past the last boundary.
    last
}

/// Protocol distribution drawn as a filled disc plus a legend.
#[derive(Debug, Clone)]
pub struct PieChart<'a> {
    shares: &'a [ProtocolShare],
    show_legend: bool,
}

impl<'a> PieChart<'a> {
    #[must_use]
    pub fn new(shares: &'a [ProtocolShare]) -> Self {
        Self {
            shares,
            show_legend: true,
        }
    }

    #[must_use]
    pub fn show_legend(mut self, show: bool) -> Self {
        self.show_legend = show;
        self
    }

    fn fractions(&self) -> Vec<f64> {
        let total = ProtocolShare::total(self.shares);
        self.shares.iter().map(|s| s.fraction_of(total)).collect()
    }

    fn render_disc(&self, fractions: &[f64], area: Rect, buf: &mut Buffer) {
        if area.width < 3 || area.height < 2 || fractions.iter().all(|&f| f <= 0.0) {
            return;
        }

        let radius_y = f64::from(area.height) / 2.0;
        let radius_x = (radius_y * CELL_ASPECT).min(f64::from(area.width) / 2.0);
        let center_x = f64::from(area.x) + f64::from(area.width) / 2.0;
        let center_y = f64::from(area.y) + radius_y;

        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                let dx = (f64::from(x) + 0.5 - center_x) / radius_x;
                let dy = (f64::from(y) + 0.5 - center_y) / radius_y;
                if dx * dx + dy * dy > 1.0 {
                    continue;
                }

                let angle = dx.atan2(-dy).rem_euclid(TAU);
                if let Some(idx) = slice_at(fractions, angle / TAU) {
                    buf.set_string(x, y, SLICE_SYMBOL, Style::default().fg(slice_color(idx)));
                }
            }
        }
    }

    fn render_legend(&self, fractions: &[f64], area: Rect, buf: &mut Buffer) {
        for (idx, (share, fraction)) in self.shares.iter().zip(fractions).enumerate() {
            let y = area.y + idx as u16;
            if y >= area.bottom() {
                break;
            }
            buf.set_string(area.x, y, SWATCH_SYMBOL, Style::default().fg(slice_color(idx)));
            let label = format!(" {} {:.0}%", share.protocol_name, fraction * 100.0);
            buf.set_stringn(
                area.x + 1,
                y,
                label,
                area.width.saturating_sub(1) as usize,
                Style::default().fg(Color::White),
            );
        }
    }
}

impl Widget for PieChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let fractions = self.fractions();
        let legend_rows = if self.show_legend {
            (self.shares.len() as u16).min(area.height)
        } else {
            0
        };

        let disc_area = Rect {
            height: area.height - legend_rows,
            ..area
        };
        let legend_area = Rect {
            y: area.y + disc_area.height,
            height: legend_rows,
            ..area
        };

        self.render_disc(&fractions, disc_area, buf);
        if legend_rows > 0 {
            self.render_legend(&fractions, legend_area, buf);
        }
    }
}

/// A bordered card with a caption and a big value.
pub fn stat_card<'a>(label: &'a str, value: u64, value_color: Color) -> Paragraph<'a> {
    Paragraph::new(vec![
        Line::from(Span::styled(label, Style::default().fg(Color::Gray))),
        Line::from(Span::styled(
            value.to_string(),
            Style::default().fg(value_color).add_modifier(Modifier::BOLD),
        )),
    ])
    .block(Block::default().borders(Borders::ALL))
}
