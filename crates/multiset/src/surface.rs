//! Terminal rendering surface.
//!
//! The deck holds one container slot per screen. The app draws whichever
//! mounted container is visible; the router decides which one that is.

use multiset_core::{RenderingSurface, Screen};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Container {
    visible: bool,
}

#[derive(Debug, Clone, Default)]
pub struct ScreenDeck {
    slots: [Option<Container>; 3],
}

impl ScreenDeck {
    /// Deck with every screen container mounted.
    pub fn mounted() -> Self {
        Self::with_screens(&Screen::ALL)
    }

    pub fn with_screens(screens: &[Screen]) -> Self {
        let mut deck = Self::default();
        for &screen in screens {
            deck.slots[screen.index()] = Some(Container::default());
        }
        deck
    }

    /// Mounted screens, in registry order.
    pub fn mounted_screens(&self) -> Vec<Screen> {
        Screen::ALL
            .into_iter()
            .filter(|s| self.slots[s.index()].is_some())
            .collect()
    }

    /// The screen to draw, if any container is visible.
    pub fn visible_screen(&self) -> Option<Screen> {
        Screen::ALL.into_iter().find(|&s| self.is_visible(s))
    }
}

impl RenderingSurface for ScreenDeck {
    fn has_container(&self, screen: Screen) -> bool {
        self.slots[screen.index()].is_some()
    }

    fn set_visible(&mut self, screen: Screen, visible: bool) {
        if let Some(container) = self.slots[screen.index()].as_mut() {
            container.visible = visible;
        }
    }

    fn is_visible(&self, screen: Screen) -> bool {
        self.slots[screen.index()].is_some_and(|c| c.visible)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use multiset_core::{NavigationError, ViewRouter};

    #[test]
    fn test_router_drives_deck() {
        let mut router = ViewRouter::new(ScreenDeck::mounted());
        assert_eq!(router.surface().visible_screen(), Some(Screen::Menu));

        router.select(Screen::Insights).unwrap();
        assert_eq!(router.surface().visible_screen(), Some(Screen::Insights));
        assert!(!router.surface().is_visible(Screen::Menu));
    }

    #[test]
    fn test_partial_deck() {
        let deck = ScreenDeck::with_screens(&[Screen::Menu, Screen::Compliance]);
        assert_eq!(deck.mounted_screens(), vec![Screen::Menu, Screen::Compliance]);

        let mut router = ViewRouter::new(deck);
        let err = router.select(Screen::Insights).unwrap_err();
        assert!(matches!(err, NavigationError::ElementsNotFound { .. }));
        assert_eq!(router.surface().visible_screen(), Some(Screen::Menu));
    }
}
