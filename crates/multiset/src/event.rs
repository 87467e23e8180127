//! Platform-agnostic input event types.
//!
//! This module provides unified event types that work with both:
//! - Native: crossterm key and mouse events
//! - Web: ratzilla key and mouse events
//!
//! Raw platform events are converted here, at the input boundary. Nothing
//! past this module ever sees a platform event object.

/// Key code abstraction that works on both native and web.
/// Re-exports from crossterm on native, from ratzilla on web.
#[cfg(feature = "native")]
pub use crossterm::event::KeyCode;

#[cfg(feature = "web")]
pub use ratzilla::event::KeyCode;

/// Unified key event that abstracts over platform-specific implementations.
#[derive(Debug, Clone)]
pub struct AppKeyEvent {
    pub code: KeyCode,
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
}

impl AppKeyEvent {
    /// Key press without modifiers.
    pub fn plain(code: KeyCode) -> Self {
        Self {
            code,
            ctrl: false,
            alt: false,
            shift: false,
        }
    }
}

#[cfg(feature = "native")]
impl From<crossterm::event::KeyEvent> for AppKeyEvent {
    fn from(event: crossterm::event::KeyEvent) -> Self {
        use crossterm::event::KeyModifiers;
        Self {
            code: event.code,
            ctrl: event.modifiers.contains(KeyModifiers::CONTROL),
            alt: event.modifiers.contains(KeyModifiers::ALT),
            shift: event.modifiers.contains(KeyModifiers::SHIFT),
        }
    }
}

#[cfg(feature = "web")]
impl From<&ratzilla::event::KeyEvent> for AppKeyEvent {
    fn from(event: &ratzilla::event::KeyEvent) -> Self {
        Self {
            code: event.code.clone(),
            ctrl: event.ctrl,
            alt: event.alt,
            shift: event.shift,
        }
    }
}

/// A primary-button press at a terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClickEvent {
    pub column: u16,
    pub row: u16,
}

impl ClickEvent {
    pub fn new(column: u16, row: u16) -> Self {
        Self { column, row }
    }

    /// Extract a click from a mouse event. Only left-button presses count;
    /// moves, drags, scrolls and releases yield `None`.
    #[cfg(feature = "native")]
    pub fn from_mouse(event: &crossterm::event::MouseEvent) -> Option<Self> {
        use crossterm::event::{MouseButton, MouseEventKind};
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => Some(Self::new(event.column, event.row)),
            _ => None,
        }
    }

    /// Extract a click from a browser mouse event. ratzilla already maps the
    /// pointer to grid cells, so `col`/`row` line up with drawn `Rect`s.
    #[cfg(feature = "web")]
    pub fn from_web_mouse(event: &ratzilla::event::MouseEvent) -> Option<Self> {
        use ratzilla::event::{MouseButton, MouseEventKind};
        match event.kind {
            MouseEventKind::ButtonDown(MouseButton::Left) => Some(Self::new(event.col, event.row)),
            _ => None,
        }
    }

    pub fn position(&self) -> ratatui::layout::Position {
        ratatui::layout::Position::new(self.column, self.row)
    }
}

#[cfg(all(test, feature = "native"))]
mod tests {
    use super::*;
    use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

    fn mouse(kind: MouseEventKind) -> MouseEvent {
        MouseEvent {
            kind,
            column: 12,
            row: 7,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_left_press_is_click() {
        let click = ClickEvent::from_mouse(&mouse(MouseEventKind::Down(MouseButton::Left)));
        assert_eq!(click, Some(ClickEvent::new(12, 7)));
    }

    #[test]
    fn test_other_mouse_events_are_not_clicks() {
        for kind in [
            MouseEventKind::Down(MouseButton::Right),
            MouseEventKind::Up(MouseButton::Left),
            MouseEventKind::Drag(MouseButton::Left),
            MouseEventKind::Moved,
            MouseEventKind::ScrollDown,
        ] {
            assert_eq!(ClickEvent::from_mouse(&mouse(kind)), None);
        }
    }

    #[test]
    fn test_key_event_modifiers() {
        let event = crossterm::event::KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        let key = AppKeyEvent::from(event);
        assert!(key.ctrl);
        assert!(!key.alt && !key.shift);
        assert_eq!(key.code, KeyCode::Char('c'));
    }
}
