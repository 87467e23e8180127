#[cfg(feature = "native")]
use std::path::PathBuf;

use multiset_core::Screen;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    widgets::Paragraph,
};

use crate::components::{Component, EventResult, header::Header, status_bar::StatusBar};
use crate::data::keybindings_data::KeybindingsConfig;
use crate::event::{AppKeyEvent, ClickEvent};
use crate::screens::{compliance::ComplianceScreen, insights::InsightsScreen, menu::MenuScreen};
use crate::state::AppState;
#[cfg(feature = "native")]
use crate::surface::ScreenDeck;

pub struct App {
    state: AppState,
    header: Header,
    status_bar: StatusBar,
    menu_screen: MenuScreen,
    compliance_screen: ComplianceScreen,
    insights_screen: InsightsScreen,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self::with_state(AppState::default())
    }

    pub fn with_state(state: AppState) -> Self {
        Self {
            state,
            header: Header::new(),
            status_bar: StatusBar::new(),
            menu_screen: MenuScreen::new(),
            compliance_screen: ComplianceScreen::new(),
            insights_screen: InsightsScreen::new(),
        }
    }

    /// Create app with a data directory (keybindings) and a datasets directory
    #[cfg(feature = "native")]
    pub fn with_dirs(data_dir: PathBuf, datasets_dir: PathBuf) -> Self {
        let mut state = AppState::with_deck(ScreenDeck::mounted());
        state.keybindings = Self::load_keybindings(&data_dir);
        state.datasets_dir = Some(datasets_dir);
        state.refresh_dataset_status();
        Self::with_state(state)
    }

    /// Load keybindings, writing the defaults on first run so they can be edited
    #[cfg(feature = "native")]
    fn load_keybindings(data_dir: &std::path::Path) -> KeybindingsConfig {
        if KeybindingsConfig::path(data_dir).exists() {
            return KeybindingsConfig::load_or_default(data_dir);
        }

        let defaults = KeybindingsConfig::default();
        if let Err(e) = defaults.save(data_dir) {
            tracing::warn!(error = %e, "Failed to write default keybindings");
        }
        defaults
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Open a screen named on the command line or in the page URL.
    pub fn open_start_screen(&mut self, id: &str) {
        tracing::info!(id, "Opening start screen");
        self.state.navigate_named(id);
    }
}

#[cfg(feature = "native")]
impl App {
    /// runs the application's main loop until the user quits
    pub fn run(&mut self, terminal: &mut ratatui::DefaultTerminal) -> color_eyre::Result<()> {
        tracing::info!(screen = %self.state.current_screen(), "Application started");
        while !self.state.exit {
            terminal.draw(|frame| self.draw(frame))?;
            self.handle_events()?;
        }
        Ok(())
    }

    fn handle_events(&mut self) -> std::io::Result<()> {
        use crossterm::event::{self, Event, KeyEventKind};

        match event::read()? {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_event(key_event.into())
            }
            Event::Mouse(mouse_event) => {
                if let Some(click) = ClickEvent::from_mouse(&mouse_event) {
                    self.handle_click(click);
                }
            }
            _ => {}
        };
        Ok(())
    }
}

impl App {
    pub fn draw(&mut self, frame: &mut Frame) {
        // Create main layout: header, content, status bar
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Header
                Constraint::Min(0),    // Content
                Constraint::Length(2), // Status bar
            ])
            .split(frame.area());

        self.header.render(frame, chunks[0], &self.state);

        self.render_visible_screen(frame, chunks[1]);

        self.status_bar.render(frame, chunks[2], &self.state);
    }

    fn render_visible_screen(&mut self, frame: &mut Frame, area: Rect) {
        let visible = self.state.router.surface().visible_screen();
        if visible != Some(Screen::Menu) {
            self.menu_screen.clear_hit_areas();
        }

        match visible {
            Some(Screen::Menu) => self.menu_screen.render(frame, area, &self.state),
            Some(Screen::Compliance) => self.compliance_screen.render(frame, area, &self.state),
            Some(Screen::Insights) => self.insights_screen.render(frame, area, &self.state),
            None => {
                let paragraph = Paragraph::new("No screen container is mounted.").centered();
                frame.render_widget(paragraph, area);
            }
        }
    }

    pub fn handle_key_event(&mut self, key: AppKeyEvent) {
        let bindings = &self.state.keybindings;
        let current = self.state.current_screen();

        // Global key bindings
        if KeybindingsConfig::matches(&key, &bindings.global.quit) {
            tracing::info!("Quit requested");
            self.state.exit = true;
            return;
        }
        if KeybindingsConfig::matches(&key, &bindings.global.back) {
            if current.is_menu() {
                // Clear error message on Esc
                self.state.clear_error();
            } else {
                self.state.back_to_menu();
            }
            return;
        }

        let result = match current {
            Screen::Menu => self.menu_screen.handle_key(key, &mut self.state),
            Screen::Compliance => self.compliance_screen.handle_key(key, &mut self.state),
            Screen::Insights => self.insights_screen.handle_key(key, &mut self.state),
        };

        if result == EventResult::Exit {
            self.state.exit = true
        }
    }

    pub fn handle_click(&mut self, click: ClickEvent) {
        tracing::debug!(column = click.column, row = click.row, "[CLICK] Pointer press");

        // Card areas are only valid while the menu is the visible container
        if self.state.router.surface().visible_screen() != Some(Screen::Menu) {
            return;
        }
        self.menu_screen.handle_click(click, &mut self.state);
    }
}
