use crate::components::{Component, EventResult};
use crate::data::keybindings_data::KeybindingsConfig;
use crate::event::{AppKeyEvent, ClickEvent};
use crate::state::AppState;
use crate::util::styles::{COMPLIANCE_COLOR, INSIGHTS_COLOR, focused_block};
use multiset_core::Screen;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::ScreenView;

/// A selectable card on the menu.
#[derive(Debug, Clone, Copy)]
pub struct MenuCard {
    pub target: Screen,
    pub icon: &'static str,
    pub description: &'static str,
    pub shortcut: char,
    pub accent: Color,
}

pub const MENU_CARDS: [MenuCard; 2] = [
    MenuCard {
        target: Screen::Compliance,
        icon: "📊",
        description: "Comprehensive multiset analysis for compliance monitoring",
        shortcut: '1',
        accent: COMPLIANCE_COLOR,
    },
    MenuCard {
        target: Screen::Insights,
        icon: "💼",
        description: "Interactive analysis with custom filters",
        shortcut: '2',
        accent: INSIGHTS_COLOR,
    },
];

pub struct MenuScreen {
    /// Card areas from the last draw, for click hit-testing
    card_areas: Vec<(Screen, Rect)>,
}

impl MenuScreen {
    pub fn new() -> Self {
        Self {
            card_areas: Vec::new(),
        }
    }

    /// Screen of the card drawn under `click`, if any.
    pub fn card_at(&self, click: ClickEvent) -> Option<Screen> {
        let position = click.position();
        self.card_areas
            .iter()
            .find(|(_, area)| area.contains(position))
            .map(|(screen, _)| *screen)
    }

    pub fn card_area(&self, screen: Screen) -> Option<Rect> {
        self.card_areas
            .iter()
            .find(|(s, _)| *s == screen)
            .map(|(_, area)| *area)
    }

    /// Forget card areas. Called when the menu is not on screen.
    pub fn clear_hit_areas(&mut self) {
        self.card_areas.clear();
    }

    fn render_card(frame: &mut Frame, area: Rect, card: &MenuCard, focused: bool) {
        let block = focused_block("", focused).title(Line::from(vec![
            Span::styled(
                format!(" [{}] ", card.shortcut),
                Style::default().fg(Color::Yellow),
            ),
        ]));

        let title_style = Style::default()
            .fg(card.accent)
            .add_modifier(Modifier::BOLD);
        let title_style = if focused {
            title_style.add_modifier(Modifier::REVERSED)
        } else {
            title_style
        };

        let content = vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("{} {}", card.icon, card.target.name()),
                title_style,
            )),
            Line::from(""),
            Line::from(card.description),
        ];

        let paragraph = Paragraph::new(content)
            .block(block)
            .centered()
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
    }
}

impl Default for MenuScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for MenuScreen {
    fn handle_key(&mut self, key: AppKeyEvent, state: &mut AppState) -> EventResult {
        let bindings = &state.keybindings;

        let target = if KeybindingsConfig::matches(&key, &bindings.menu.compliance) {
            Some(Screen::Compliance)
        } else if KeybindingsConfig::matches(&key, &bindings.menu.insights) {
            Some(Screen::Insights)
        } else if KeybindingsConfig::matches(&key, &bindings.menu.open) {
            Some(state.menu_state.focused_screen())
        } else {
            None
        };

        if let Some(target) = target {
            tracing::debug!(screen = %target, "[DEBUG] Menu card chosen by key");
            state.navigate(target);
            return EventResult::Handled;
        }

        if KeybindingsConfig::matches(&key, &bindings.menu.next_card) {
            state.menu_state.focus_next();
            EventResult::Handled
        } else if KeybindingsConfig::matches(&key, &bindings.menu.prev_card) {
            state.menu_state.focus_prev();
            EventResult::Handled
        } else if KeybindingsConfig::matches(&key, &bindings.global.self_check) {
            state.self_check();
            EventResult::Handled
        } else {
            EventResult::NotHandled
        }
    }

    fn handle_click(&mut self, click: ClickEvent, state: &mut AppState) -> EventResult {
        match self.card_at(click) {
            Some(target) => {
                tracing::info!(
                    screen = %target,
                    column = click.column,
                    row = click.row,
                    "[CLICK] Menu card clicked"
                );
                state.navigate(target);
                EventResult::Handled
            }
            None => {
                tracing::debug!(
                    column = click.column,
                    row = click.row,
                    "[CLICK] Click outside menu cards"
                );
                EventResult::NotHandled
            }
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Heading
                Constraint::Length(8), // Cards
                Constraint::Length(4), // Data status banner
                Constraint::Min(0),
            ])
            .split(area);

        let heading = Paragraph::new(Line::from(Span::styled(
            "Select Analysis Type",
            Style::default().add_modifier(Modifier::BOLD),
        )))
        .centered();
        frame.render_widget(heading, chunks[0]);

        let card_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .spacing(2)
            .split(chunks[1]);

        let focused = state.menu_state.focused_screen();
        self.card_areas.clear();
        for (card, card_area) in MENU_CARDS.iter().zip(card_chunks.iter()) {
            Self::render_card(frame, *card_area, card, card.target == focused);
            self.card_areas.push((card.target, *card_area));
        }

        if state.dataset_status.is_available() {
            let banner = Paragraph::new(vec![
                Line::from(Span::styled(
                    "Existing data found!",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from("You can use previously parsed datasets."),
            ])
            .block(Block::default().borders(Borders::ALL))
            .centered();
            frame.render_widget(banner, chunks[2]);
        }
    }
}

impl ScreenView for MenuScreen {
    fn title(&self) -> &str {
        "Select Analysis Type"
    }
}

#[cfg(all(test, feature = "native"))]
mod tests {
    use super::*;
    use crate::event::KeyCode;

    #[test]
    fn test_shortcut_keys_select_cards() {
        let mut screen = MenuScreen::new();
        let mut state = AppState::default();

        let result = screen.handle_key(AppKeyEvent::plain(KeyCode::Char('2')), &mut state);

        assert_eq!(result, EventResult::Handled);
        assert_eq!(state.current_screen(), Screen::Insights);
    }

    #[test]
    fn test_focus_then_enter() {
        let mut screen = MenuScreen::new();
        let mut state = AppState::default();

        screen.handle_key(AppKeyEvent::plain(KeyCode::Right), &mut state);
        assert_eq!(state.menu_state.focused_screen(), Screen::Insights);
        screen.handle_key(AppKeyEvent::plain(KeyCode::Left), &mut state);
        assert_eq!(state.current_screen(), Screen::Menu);

        screen.handle_key(AppKeyEvent::plain(KeyCode::Enter), &mut state);
        assert_eq!(state.current_screen(), Screen::Compliance);
    }

    #[test]
    fn test_unbound_key_not_handled() {
        let mut screen = MenuScreen::new();
        let mut state = AppState::default();

        let result = screen.handle_key(AppKeyEvent::plain(KeyCode::Char('z')), &mut state);

        assert_eq!(result, EventResult::NotHandled);
        assert_eq!(state.current_screen(), Screen::Menu);
    }

    #[test]
    fn test_click_without_draw_hits_nothing() {
        let mut screen = MenuScreen::new();
        let mut state = AppState::default();

        let result = screen.handle_click(ClickEvent::new(5, 5), &mut state);

        assert_eq!(result, EventResult::NotHandled);
        assert_eq!(state.current_screen(), Screen::Menu);
    }
}
