use super::{Component, EventResult};
use crate::event::AppKeyEvent;
use crate::state::AppState;
use crate::util::styles::{HELP_COLOR, NEGATIVE_COLOR};
use multiset_core::Screen;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub struct StatusBar;

impl StatusBar {
    pub fn new() -> Self {
        Self
    }

    fn get_help_text(state: &AppState) -> &'static str {
        match state.current_screen() {
            Screen::Menu => {
                "click/1-2: open card | ←/→: focus | Enter: open | t: self-check | q: quit"
            }
            Screen::Compliance | Screen::Insights => "Esc/b: back to menu | q: quit",
        }
    }
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for StatusBar {
    fn handle_key(&mut self, _key: AppKeyEvent, _state: &mut AppState) -> EventResult {
        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let content = if let Some(error) = &state.error_message {
            Line::from(vec![
                Span::styled("Error: ", Style::default().fg(NEGATIVE_COLOR)),
                Span::raw(error.as_str()),
            ])
        } else if let Some(status) = &state.status_message {
            Line::from(vec![
                Span::styled(status.as_str(), Style::default().fg(Color::White)),
                Span::styled(
                    format!("  ({})", Self::get_help_text(state)),
                    Style::default().fg(HELP_COLOR),
                ),
            ])
        } else {
            Line::from(Span::styled(
                Self::get_help_text(state),
                Style::default().fg(HELP_COLOR),
            ))
        };

        let paragraph = Paragraph::new(content).block(Block::default().borders(Borders::TOP));

        frame.render_widget(paragraph, area);
    }
}
