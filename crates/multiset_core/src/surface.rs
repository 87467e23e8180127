//! Rendering surface abstraction.
//!
//! A surface owns one container per [`Screen`]. The router only ever asks
//! whether a container exists and toggles its visibility; what a container
//! looks like is the front end's business.

use std::collections::HashMap;

use crate::screen::Screen;

/// External UI substrate with named, visibility-toggleable containers.
pub trait RenderingSurface {
    /// Whether the container for `screen` is mounted.
    fn has_container(&self, screen: Screen) -> bool;

    /// Show or hide the container for `screen`. Unmounted containers are ignored.
    fn set_visible(&mut self, screen: Screen, visible: bool);

    /// Whether the container for `screen` is mounted and visible.
    fn is_visible(&self, screen: Screen) -> bool;
}

/// In-memory surface, used headless and in tests.
#[derive(Debug, Clone, Default)]
pub struct MemorySurface {
    containers: HashMap<Screen, bool>,
}

impl MemorySurface {
    /// Surface with no containers mounted.
    pub fn new() -> Self {
        Self::default()
    }

    /// Surface with every screen mounted and hidden.
    pub fn with_all() -> Self {
        Self::with_screens(&Screen::ALL)
    }

    /// Surface with only the given screens mounted, all hidden.
    pub fn with_screens(screens: &[Screen]) -> Self {
        Self {
            containers: screens.iter().map(|&s| (s, false)).collect(),
        }
    }

    pub fn mount(&mut self, screen: Screen) {
        self.containers.entry(screen).or_insert(false);
    }

    pub fn unmount(&mut self, screen: Screen) {
        self.containers.remove(&screen);
    }
}

impl RenderingSurface for MemorySurface {
    fn has_container(&self, screen: Screen) -> bool {
        self.containers.contains_key(&screen)
    }

    fn set_visible(&mut self, screen: Screen, visible: bool) {
        if let Some(flag) = self.containers.get_mut(&screen) {
            *flag = visible;
        }
    }

    fn is_visible(&self, screen: Screen) -> bool {
        self.containers.get(&screen).copied().unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unmounted_container_ignores_visibility() {
        let mut surface = MemorySurface::with_screens(&[Screen::Menu]);
        surface.set_visible(Screen::Insights, true);
        assert!(!surface.has_container(Screen::Insights));
        assert!(!surface.is_visible(Screen::Insights));
    }

    #[test]
    fn test_mount_keeps_existing_visibility() {
        let mut surface = MemorySurface::with_all();
        surface.set_visible(Screen::Menu, true);
        surface.mount(Screen::Menu);
        assert!(surface.is_visible(Screen::Menu));

        surface.unmount(Screen::Menu);
        assert!(!surface.has_container(Screen::Menu));
    }
}
