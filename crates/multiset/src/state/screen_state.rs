/// Per-screen state structs.
use multiset_core::Screen;

#[derive(Debug, Default)]
pub struct MenuState {
    /// Index into `Screen::ANALYSES` of the highlighted card
    pub focused_card: usize,
}

impl MenuState {
    pub fn focused_screen(&self) -> Screen {
        Screen::ANALYSES[self.focused_card % Screen::ANALYSES.len()]
    }

    pub fn focus_next(&mut self) {
        self.focused_card = (self.focused_card + 1) % Screen::ANALYSES.len();
    }

    pub fn focus_prev(&mut self) {
        let count = Screen::ANALYSES.len();
        self.focused_card = (self.focused_card + count - 1) % count;
    }

    pub fn focus(&mut self, screen: Screen) {
        if let Some(idx) = Screen::ANALYSES.iter().position(|&s| s == screen) {
            self.focused_card = idx;
        }
    }
}
