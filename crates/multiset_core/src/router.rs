//! View router: the single owner of which screen is visible.

use crate::error::NavigationError;
use crate::screen::Screen;
use crate::surface::RenderingSurface;

/// Navigation state owned by the router.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewState {
    pub current_screen: Screen,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            current_screen: Screen::Menu,
        }
    }
}

/// Switches visibility between screen containers on a [`RenderingSurface`].
///
/// The router starts on [`Screen::Menu`]. A selection either completes fully
/// (previous screen hidden, target shown, state updated) or fails without
/// touching the surface.
#[derive(Debug)]
pub struct ViewRouter<S: RenderingSurface> {
    surface: S,
    state: ViewState,
}

impl<S: RenderingSurface> ViewRouter<S> {
    /// Take ownership of `surface` and show the menu.
    pub fn new(surface: S) -> Self {
        let mut router = Self {
            surface,
            state: ViewState::default(),
        };
        router.show_only(Screen::Menu);
        router
    }

    pub fn current_screen(&self) -> Screen {
        self.state.current_screen
    }

    pub fn state(&self) -> ViewState {
        self.state
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Screens whose containers are currently visible, in registry order.
    pub fn visible_screens(&self) -> Vec<Screen> {
        Screen::ALL
            .into_iter()
            .filter(|&s| self.surface.is_visible(s))
            .collect()
    }

    /// Switch to `target`.
    ///
    /// Both the target container and the container of the current screen must
    /// be mounted. Selecting the current screen again is a no-op.
    pub fn select(&mut self, target: Screen) -> Result<(), NavigationError> {
        let current = self.state.current_screen;
        tracing::debug!(from = %current, to = %target, "[DEBUG] select requested");

        let missing = self.missing_containers(&[current, target]);
        if !missing.is_empty() {
            let err = NavigationError::ElementsNotFound { target, missing };
            tracing::error!(from = %current, to = %target, error = %err, "Screen selection failed");
            return Err(err);
        }

        if current == target {
            tracing::debug!(screen = %target, "[DEBUG] already on screen");
            return Ok(());
        }

        self.show_only(target);
        self.state.current_screen = target;
        tracing::info!(from = %current, to = %target, "Switched screen");
        Ok(())
    }

    /// Parse an external identifier and switch to it.
    ///
    /// Unknown identifiers are rejected before the surface is touched.
    pub fn select_named(&mut self, id: &str) -> Result<Screen, NavigationError> {
        let target = id.parse::<Screen>().inspect_err(|err| {
            tracing::error!(id, error = %err, "Screen selection rejected");
        })?;
        self.select(target)?;
        Ok(target)
    }

    /// Go back to the menu. Always succeeds.
    pub fn return_to_menu(&mut self) {
        let previous = self.state.current_screen;
        self.show_only(Screen::Menu);
        self.state.current_screen = Screen::Menu;
        if previous != Screen::Menu {
            tracing::info!(from = %previous, "Returned to menu");
        }
    }

    fn missing_containers(&self, screens: &[Screen]) -> Vec<Screen> {
        let mut missing: Vec<Screen> = Vec::new();
        for &screen in screens {
            if !self.surface.has_container(screen) && !missing.contains(&screen) {
                missing.push(screen);
            }
        }
        missing
    }

    fn show_only(&mut self, target: Screen) {
        for screen in Screen::ALL {
            if screen != target {
                self.surface.set_visible(screen, false);
            }
        }
        self.surface.set_visible(target, true);
    }
}
