//! Common styling utilities for the chart dashboard

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders};

/// Standard color for panel borders
pub const BORDER_COLOR: Color = Color::White;

/// Standard color for help text
pub const HELP_COLOR: Color = Color::DarkGray;

/// Standard color for headers
pub const HEADER_COLOR: Color = Color::Cyan;

/// Standard color for positive values
pub const POSITIVE_COLOR: Color = Color::Green;

/// Standard color for negative values
pub const NEGATIVE_COLOR: Color = Color::Red;

/// Series colors, assigned in order to the datasets of a panel
pub const SERIES_COLORS: [Color; 5] = [
    Color::Rgb(0x18, 0x77, 0xF2), // blue
    Color::Rgb(0x25, 0xD3, 0x66), // green
    Color::Rgb(0xE4, 0x40, 0x5F), // pink
    Color::Rgb(0xF9, 0xA6, 0x02), // amber
    Color::Rgb(0x6A, 0x05, 0x72), // purple
];

/// Color of the `index`-th series, cycling through [`SERIES_COLORS`]
pub fn series_color(index: usize) -> Color {
    SERIES_COLORS[index % SERIES_COLORS.len()]
}

/// Create a bordered panel block with a title.
///
/// # Example
/// ```ignore
/// let block = panel_block("Revenue vs expenses (M$)");
/// frame.render_widget(chart.block(block), area);
/// ```
pub fn panel_block(title: &str) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(BORDER_COLOR))
        .title(Line::from(format!(" {} ", title)).fg(HEADER_COLOR))
}

/// Get the appropriate color for a monetary value (green for positive, red for negative).
pub fn value_color(value: f64) -> Color {
    if value >= 0.0 {
        POSITIVE_COLOR
    } else {
        NEGATIVE_COLOR
    }
}

/// Get the appropriate style for a monetary value.
pub fn value_style(value: f64) -> Style {
    Style::default().fg(value_color(value))
}
