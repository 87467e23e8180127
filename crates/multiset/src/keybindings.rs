//! Keybindings matching utilities.
//!
//! Provides functions to convert an AppKeyEvent to its string representation,
//! and to check if a key event matches configured bindings.

#[cfg(feature = "native")]
use std::path::Path;

use crate::data::keybindings_data::KeybindingsConfig;
use crate::event::{AppKeyEvent, KeyCode};

/// Errors writing the keybindings file
#[cfg(feature = "native")]
#[derive(Debug, thiserror::Error)]
pub enum KeybindingsError {
    #[error("Failed to serialize keybindings: {0}")]
    Serialize(String),
    #[error("Failed to write keybindings: {0}")]
    Io(#[from] std::io::Error),
}

impl KeybindingsConfig {
    /// Convert an AppKeyEvent to our string format.
    ///
    /// Examples:
    /// - KeyCode::Char('a') with no modifiers -> "a"
    /// - KeyCode::Char('c') with ctrl -> "ctrl+c"
    /// - KeyCode::Char(' ') -> "space"
    /// - KeyCode::Tab with shift -> "shift+tab"
    pub fn app_key_to_string(key: &AppKeyEvent) -> String {
        let mut parts = Vec::new();

        if key.ctrl {
            parts.push("ctrl");
        }
        if key.alt {
            parts.push("alt");
        }

        let key_str = match &key.code {
            KeyCode::Char(' ') => "space".to_string(),
            KeyCode::Char(c) => {
                if key.shift && c.is_uppercase() {
                    parts.push("shift");
                }
                c.to_lowercase().to_string()
            }
            KeyCode::Enter => "enter".to_string(),
            KeyCode::Tab => {
                if key.shift {
                    parts.push("shift");
                }
                "tab".to_string()
            }
            KeyCode::Esc => "esc".to_string(),
            KeyCode::Backspace => "backspace".to_string(),
            KeyCode::Left => "left".to_string(),
            KeyCode::Right => "right".to_string(),
            KeyCode::Up => "up".to_string(),
            KeyCode::Down => "down".to_string(),
            KeyCode::Home => "home".to_string(),
            KeyCode::End => "end".to_string(),
            KeyCode::F(n) => format!("f{}", n),
            #[cfg(feature = "native")]
            KeyCode::BackTab => {
                // BackTab is Shift+Tab
                if !parts.contains(&"shift") {
                    parts.push("shift");
                }
                "tab".to_string()
            }
            _ => return String::new(), // Unsupported key
        };

        parts.push(&key_str);
        parts.join("+")
    }

    /// Check if an AppKeyEvent matches any of the configured bindings.
    pub fn matches(key: &AppKeyEvent, bindings: &[String]) -> bool {
        let key_str = Self::app_key_to_string(key);
        if key_str.is_empty() {
            return false;
        }
        bindings.iter().any(|b| b.eq_ignore_ascii_case(&key_str))
    }

    /// Get the keybindings file path
    #[cfg(feature = "native")]
    pub fn path(data_dir: &Path) -> std::path::PathBuf {
        data_dir.join("keybindings.yaml")
    }

    /// Load keybindings from file, returning defaults if file doesn't exist or fails to parse.
    #[cfg(feature = "native")]
    pub fn load_or_default(data_dir: &Path) -> Self {
        let path = Self::path(data_dir);
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(&path) {
            Ok(content) => serde_saphyr::from_str(&content).unwrap_or_else(|e| {
                tracing::warn!(path = %path.display(), error = %e, "Invalid keybindings file, using defaults");
                Self::default()
            }),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Failed to read keybindings");
                Self::default()
            }
        }
    }

    /// Save keybindings to file.
    #[cfg(feature = "native")]
    pub fn save(&self, data_dir: &Path) -> Result<(), KeybindingsError> {
        let path = Self::path(data_dir);
        let yaml =
            serde_saphyr::to_string(self).map_err(|e| KeybindingsError::Serialize(e.to_string()))?;
        std::fs::write(path, yaml)?;
        Ok(())
    }
}

#[cfg(all(test, feature = "native"))]
mod tests {
    use super::*;

    fn make_key(code: KeyCode, ctrl: bool, shift: bool) -> AppKeyEvent {
        AppKeyEvent {
            code,
            ctrl,
            alt: false,
            shift,
        }
    }

    #[test]
    fn test_key_to_string_basic() {
        let key = make_key(KeyCode::Char('b'), false, false);
        assert_eq!(KeybindingsConfig::app_key_to_string(&key), "b");

        let key = make_key(KeyCode::Char(' '), false, false);
        assert_eq!(KeybindingsConfig::app_key_to_string(&key), "space");
    }

    #[test]
    fn test_key_to_string_modifiers() {
        let key = make_key(KeyCode::Char('c'), true, false);
        assert_eq!(KeybindingsConfig::app_key_to_string(&key), "ctrl+c");

        let key = make_key(KeyCode::Tab, false, true);
        assert_eq!(KeybindingsConfig::app_key_to_string(&key), "shift+tab");

        let key = make_key(KeyCode::BackTab, false, true);
        assert_eq!(KeybindingsConfig::app_key_to_string(&key), "shift+tab");
    }

    #[test]
    fn test_matches_default_bindings() {
        let config = KeybindingsConfig::default();

        let esc = make_key(KeyCode::Esc, false, false);
        assert!(KeybindingsConfig::matches(&esc, &config.global.back));

        let one = make_key(KeyCode::Char('1'), false, false);
        assert!(KeybindingsConfig::matches(&one, &config.menu.compliance));
        assert!(!KeybindingsConfig::matches(&one, &config.menu.insights));

        let insert = make_key(KeyCode::Insert, false, false);
        assert!(!KeybindingsConfig::matches(&insert, &config.menu.open));
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = KeybindingsConfig::load_or_default(dir.path());
        assert_eq!(config.global.quit, vec!["q", "ctrl+c"]);
    }

    #[test]
    fn test_load_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            KeybindingsConfig::path(dir.path()),
            "menu:\n  compliance: [\"x\"]\n",
        )
        .unwrap();

        let config = KeybindingsConfig::load_or_default(dir.path());

        assert_eq!(config.menu.compliance, vec!["x"]);
        assert_eq!(config.menu.insights, vec!["2", "i"]);
        assert_eq!(config.global.back, vec!["esc", "b"]);
    }

    #[test]
    fn test_load_invalid_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(KeybindingsConfig::path(dir.path()), "menu: [unclosed").unwrap();

        let config = KeybindingsConfig::load_or_default(dir.path());

        assert_eq!(config.menu.open, vec!["enter", "space"]);
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = KeybindingsConfig::default();
        config.global.self_check = vec!["f5".into()];

        config.save(dir.path()).unwrap();
        let loaded = KeybindingsConfig::load_or_default(dir.path());

        assert_eq!(loaded.global.self_check, vec!["f5"]);
    }
}
