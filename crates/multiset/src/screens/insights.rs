use crate::components::{Component, EventResult};
use crate::event::AppKeyEvent;
use crate::state::AppState;
use crate::util::styles::{HELP_COLOR, panel_block};
use multiset_core::Screen;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::{ScreenView, render_dataset_panel};

/// Control sections of an insights query.
const CONTROLS: [(&str, &str); 4] = [
    ("1. Dataset", "Exits | Inputs | Combined"),
    ("2. Group by", "Operator | Agency | Destination | Users"),
    (
        "3. Measure by",
        "Total Amount | Total Fee | Transaction Count | Unique Destinations | Mean Amount | Mean Fee",
    ),
    ("4. Filters", "Date range | Hour period"),
];

pub struct InsightsScreen;

impl InsightsScreen {
    pub fn new() -> Self {
        Self
    }
}

impl Default for InsightsScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for InsightsScreen {
    fn handle_key(&mut self, _key: AppKeyEvent, _state: &mut AppState) -> EventResult {
        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Title
                Constraint::Length(5), // Dataset management
                Constraint::Min(0),    // Controls
            ])
            .split(area);

        let title = Paragraph::new(Line::from(Span::styled(
            format!("🎯 Interactive {}", self.title()),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        frame.render_widget(title, chunks[0]);

        render_dataset_panel(frame, chunks[1], state);

        let lines: Vec<Line> = CONTROLS
            .iter()
            .flat_map(|(section, options)| {
                [
                    Line::from(Span::styled(
                        *section,
                        Style::default().add_modifier(Modifier::BOLD),
                    )),
                    Line::from(Span::styled(
                        format!("   {}", options),
                        Style::default().fg(HELP_COLOR),
                    )),
                ]
            })
            .collect();

        let paragraph = Paragraph::new(lines).block(panel_block("Control Panel"));
        frame.render_widget(paragraph, chunks[2]);
    }
}

impl ScreenView for InsightsScreen {
    fn title(&self) -> &str {
        Screen::Insights.name()
    }
}
