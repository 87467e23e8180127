//! Keybindings configuration data structures.
//!
//! Defines the structure for customizable keyboard shortcuts that can be
//! serialized to/from `~/.multiset/keybindings.yaml`.

use serde::{Deserialize, Serialize};

/// Root keybindings configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct KeybindingsConfig {
    /// Global keybindings (work everywhere)
    pub global: GlobalBindings,
    /// Menu screen keybindings
    pub menu: MenuBindings,
}

/// Global keybindings that work everywhere in the app.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalBindings {
    pub quit: Vec<String>,
    /// Return to the menu from an analysis screen
    pub back: Vec<String>,
    pub self_check: Vec<String>,
}

impl Default for GlobalBindings {
    fn default() -> Self {
        Self {
            quit: vec!["q".into(), "ctrl+c".into()],
            back: vec!["esc".into(), "b".into()],
            self_check: vec!["t".into()],
        }
    }
}

/// Keybindings for the menu cards.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuBindings {
    pub compliance: Vec<String>,
    pub insights: Vec<String>,
    pub next_card: Vec<String>,
    pub prev_card: Vec<String>,
    pub open: Vec<String>,
}

impl Default for MenuBindings {
    fn default() -> Self {
        Self {
            compliance: vec!["1".into(), "c".into()],
            insights: vec!["2".into(), "i".into()],
            next_card: vec!["l".into(), "right".into(), "tab".into()],
            prev_card: vec!["h".into(), "left".into(), "shift+tab".into()],
            open: vec!["enter".into(), "space".into()],
        }
    }
}
