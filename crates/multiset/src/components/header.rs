use super::{Component, EventResult};
use crate::event::AppKeyEvent;
use crate::state::AppState;
use crate::util::styles::{FOCUS_COLOR, HEADER_COLOR, HELP_COLOR};
use multiset_core::Screen;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
};

pub const APP_TITLE: &str = "Multiset Analysis System";
pub const APP_SUBTITLE: &str = "Advanced Compliance and Business Intelligence";

/// Title banner plus a breadcrumb of screens with the current one highlighted.
pub struct Header;

impl Header {
    pub fn new() -> Self {
        Self
    }
}

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for Header {
    fn handle_key(&mut self, _key: AppKeyEvent, _state: &mut AppState) -> EventResult {
        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Length(2)])
            .split(area);

        let banner = Paragraph::new(vec![
            Line::from(Span::styled(
                APP_TITLE,
                Style::default()
                    .fg(HEADER_COLOR)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(APP_SUBTITLE, Style::default().fg(HELP_COLOR))),
        ])
        .centered();
        frame.render_widget(banner, chunks[0]);

        let current = state.current_screen();
        let titles: Vec<Line> = Screen::ALL
            .iter()
            .map(|screen| {
                let style = if *screen == current {
                    Style::default()
                        .fg(FOCUS_COLOR)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::Gray)
                };
                Line::from(Span::styled(screen.name(), style))
            })
            .collect();

        let tabs = Tabs::new(titles)
            .block(Block::default().borders(Borders::BOTTOM))
            .select(current.index())
            .highlight_style(
                Style::default()
                    .fg(FOCUS_COLOR)
                    .add_modifier(Modifier::BOLD),
            );

        frame.render_widget(tabs, chunks[1]);
    }
}
