//! Common styling utilities for TUI components

use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders};

/// Standard color for focused panels
pub const FOCUS_COLOR: Color = Color::Yellow;

/// Standard color for help text
pub const HELP_COLOR: Color = Color::DarkGray;

/// Standard color for headers
pub const HEADER_COLOR: Color = Color::Cyan;

/// Standard color for positive values
pub const POSITIVE_COLOR: Color = Color::Green;

/// Standard color for negative values
pub const NEGATIVE_COLOR: Color = Color::Red;

/// Card accent colors, matching the menu card gradients
pub const COMPLIANCE_COLOR: Color = Color::LightMagenta;
pub const INSIGHTS_COLOR: Color = Color::LightBlue;

/// Create a block with a title that shows focused state via border color.
///
/// When focused, the border is yellow. When unfocused, it's the default color.
pub fn focused_block(title: &str, focused: bool) -> Block<'static> {
    let border_style = if focused {
        Style::default().fg(FOCUS_COLOR)
    } else {
        Style::default()
    };

    Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(title.to_string())
}

/// Rounded panel used for the analysis screen sections.
pub fn panel_block(title: &str) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(Span::styled(
            format!(" {} ", title),
            Style::default()
                .fg(HEADER_COLOR)
                .add_modifier(Modifier::BOLD),
        ))
}

/// Style for a dataset status line
pub fn dataset_status_style(available: bool) -> Style {
    if available {
        Style::default().fg(POSITIVE_COLOR)
    } else {
        Style::default().fg(NEGATIVE_COLOR)
    }
}
