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
    widgets::{List, ListItem, Paragraph},
};

use super::{ScreenView, render_dataset_panel};

/// Analyses included in a compliance run, with what each one flags.
const ANALYSES: [(&str, &str); 8] = [
    ("Unique destinations", "distinct receivers per user"),
    ("Mean amounts", "average amount sent per user"),
    ("User red flags", "users matching several risk signals"),
    ("Operations", "operation counts and totals per user"),
    ("One to many", "one sender paying many receivers"),
    ("Many to one", "many senders paying one receiver"),
    ("Geometric patterns", "circular flows between the same people"),
    ("Unique origins", "distinct senders per receiver"),
];

pub struct ComplianceScreen;

impl ComplianceScreen {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ComplianceScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for ComplianceScreen {
    fn handle_key(&mut self, _key: AppKeyEvent, _state: &mut AppState) -> EventResult {
        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Title
                Constraint::Length(5), // Dataset management
                Constraint::Min(0),    // Analyses
            ])
            .split(area);

        let title = Paragraph::new(Line::from(Span::styled(
            format!("📊 {}", self.title()),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        frame.render_widget(title, chunks[0]);

        render_dataset_panel(frame, chunks[1], state);

        let items: Vec<ListItem> = ANALYSES
            .iter()
            .map(|(name, detail)| {
                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!("• {:<20}", name),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(*detail, Style::default().fg(HELP_COLOR)),
                ]))
            })
            .collect();

        let list = List::new(items).block(panel_block("Analyses"));
        frame.render_widget(list, chunks[2]);
    }
}

impl ScreenView for ComplianceScreen {
    fn title(&self) -> &str {
        Screen::Compliance.name()
    }
}
