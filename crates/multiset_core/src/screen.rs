//! Screen identifiers for the analysis menu.
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::NavigationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Screen {
    Menu,
    Compliance,
    Insights,
}

impl Screen {
    pub const ALL: [Screen; 3] = [Screen::Menu, Screen::Compliance, Screen::Insights];

    /// Screens reachable from a menu card.
    pub const ANALYSES: [Screen; 2] = [Screen::Compliance, Screen::Insights];

    /// Stable identifier used by cards, the CLI and log fields.
    pub fn id(&self) -> &'static str {
        match self {
            Screen::Menu => "menu",
            Screen::Compliance => "compliance",
            Screen::Insights => "insights",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Screen::Menu => "Menu",
            Screen::Compliance => "Compliance Analysis",
            Screen::Insights => "Business Insights",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Screen::Menu => 0,
            Screen::Compliance => 1,
            Screen::Insights => 2,
        }
    }

    pub fn is_menu(&self) -> bool {
        matches!(self, Screen::Menu)
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Screen {
    type Err = NavigationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "menu" => Ok(Screen::Menu),
            "compliance" => Ok(Screen::Compliance),
            "insights" => Ok(Screen::Insights),
            _ => Err(NavigationError::InvalidScreen(s.to_string())),
        }
    }
}
