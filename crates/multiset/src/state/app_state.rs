use std::path::PathBuf;

use multiset_core::{NavigationError, RenderingSurface, Screen, ViewRouter};

use crate::data::datasets::DatasetStatus;
use crate::data::keybindings_data::KeybindingsConfig;
use crate::screens::menu::MENU_CARDS;
use crate::surface::ScreenDeck;

use super::MenuState;

#[derive(Debug)]
pub struct AppState {
    pub router: ViewRouter<ScreenDeck>,
    pub menu_state: MenuState,
    pub dataset_status: DatasetStatus,
    pub datasets_dir: Option<PathBuf>,
    pub keybindings: KeybindingsConfig,
    pub error_message: Option<String>,
    /// Last diagnostic shown in the status bar
    pub status_message: Option<String>,
    pub exit: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_deck(ScreenDeck::mounted())
    }
}

impl AppState {
    pub fn with_deck(deck: ScreenDeck) -> Self {
        Self {
            router: ViewRouter::new(deck),
            menu_state: MenuState::default(),
            dataset_status: DatasetStatus::Unknown,
            datasets_dir: None,
            keybindings: KeybindingsConfig::default(),
            error_message: None,
            status_message: None,
            exit: false,
        }
    }

    pub fn current_screen(&self) -> Screen {
        self.router.current_screen()
    }

    pub fn set_error(&mut self, msg: String) {
        self.error_message = Some(msg);
    }

    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    pub fn set_status(&mut self, msg: String) {
        self.status_message = Some(msg);
    }

    /// Switch to `target`, reporting failures in the status bar.
    ///
    /// Returns whether the switch happened.
    pub fn navigate(&mut self, target: Screen) -> bool {
        match self.router.select(target) {
            Ok(()) => {
                self.after_switch(target);
                true
            }
            Err(err) => {
                self.report_navigation_error(&err);
                false
            }
        }
    }

    /// Switch to a screen named by an external identifier (CLI, URL).
    pub fn navigate_named(&mut self, id: &str) -> bool {
        match self.router.select_named(id) {
            Ok(target) => {
                self.after_switch(target);
                true
            }
            Err(err) => {
                self.report_navigation_error(&err);
                false
            }
        }
    }

    pub fn back_to_menu(&mut self) {
        self.router.return_to_menu();
        self.clear_error();
        self.status_message = None;
    }

    /// Re-read the datasets directory, if one is configured.
    pub fn refresh_dataset_status(&mut self) {
        #[cfg(feature = "native")]
        if let Some(dir) = &self.datasets_dir {
            self.dataset_status = crate::data::datasets::check_existing_data(dir);
            tracing::debug!(
                dir = %dir.display(),
                status = ?self.dataset_status,
                "[DEBUG] Dataset status refreshed"
            );
        }
    }

    /// Log what the menu can reach and summarize it in the status bar.
    pub fn self_check(&mut self) {
        let surface = self.router.surface();
        tracing::info!(cards = MENU_CARDS.len(), "[DEBUG] Found menu cards");

        let mut found = Vec::new();
        for screen in Screen::ALL {
            let present = surface.has_container(screen);
            tracing::info!(screen = %screen, present, "[DEBUG] Screen container");
            found.push(format!("{} {}", screen.id(), if present { "✓" } else { "✗" }));
        }

        let summary = format!(
            "Self-check: {} menu cards | containers: {} | current: {}",
            MENU_CARDS.len(),
            found.join(" "),
            self.current_screen()
        );
        self.set_status(summary);
    }

    fn after_switch(&mut self, target: Screen) {
        self.clear_error();
        // Diagnostics describe the screen they were taken on
        self.status_message = None;
        self.menu_state.focus(target);
        if !target.is_menu() {
            self.refresh_dataset_status();
        }
    }

    fn report_navigation_error(&mut self, err: &NavigationError) {
        tracing::error!(error = %err, current = %self.current_screen(), "Navigation failed");
        self.set_error(format!("Error switching screens: {}", err));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigate_and_back() {
        let mut state = AppState::default();

        assert!(state.navigate(Screen::Insights));
        assert_eq!(state.current_screen(), Screen::Insights);
        assert_eq!(state.menu_state.focused_screen(), Screen::Insights);

        state.back_to_menu();
        assert_eq!(state.current_screen(), Screen::Menu);
        // Focus stays on the card the user came back from
        assert_eq!(state.menu_state.focused_screen(), Screen::Insights);
    }

    #[test]
    fn test_navigation_error_is_surfaced() {
        let mut state = AppState::with_deck(ScreenDeck::with_screens(&[Screen::Menu]));

        assert!(!state.navigate(Screen::Compliance));

        assert_eq!(state.current_screen(), Screen::Menu);
        let msg = state.error_message.as_deref().unwrap();
        assert!(msg.starts_with("Error switching screens:"));
        assert!(msg.contains("compliance"));
    }

    #[test]
    fn test_navigate_named_rejects_unknown() {
        let mut state = AppState::default();
        assert!(!state.navigate_named("reports"));
        assert_eq!(state.current_screen(), Screen::Menu);
        assert!(state.error_message.is_some());

        assert!(state.navigate_named("compliance"));
        assert_eq!(state.current_screen(), Screen::Compliance);
        assert!(state.error_message.is_none());
    }

    #[test]
    fn test_self_check_reports_containers() {
        let mut state = AppState::with_deck(ScreenDeck::with_screens(&[
            Screen::Menu,
            Screen::Compliance,
        ]));

        state.self_check();

        let status = state.status_message.unwrap();
        assert!(status.contains("2 menu cards"));
        assert!(status.contains("compliance ✓"));
        assert!(status.contains("insights ✗"));
    }

    #[test]
    fn test_status_message_cleared_by_navigation() {
        let mut state = AppState::default();

        state.self_check();
        assert!(state.navigate(Screen::Compliance));
        assert!(state.status_message.is_none());

        state.self_check();
        state.back_to_menu();
        assert!(state.status_message.is_none());
    }

    #[cfg(feature = "native")]
    #[test]
    fn test_entering_analysis_refreshes_datasets() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = AppState::default();
        state.datasets_dir = Some(dir.path().to_path_buf());

        assert!(state.navigate(Screen::Compliance));
        assert_eq!(state.dataset_status, DatasetStatus::Missing);

        std::fs::create_dir(dir.path().join("session_1")).unwrap();
        state.back_to_menu();
        assert!(state.navigate(Screen::Insights));
        assert_eq!(
            state.dataset_status,
            DatasetStatus::Available { sessions: 1 }
        );
    }
}
