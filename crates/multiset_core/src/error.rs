use crate::screen::Screen;

/// Errors raised while switching screens
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavigationError {
    /// One or more screen containers are not mounted on the surface.
    #[error("cannot show {target}: screen containers not found: {}", join_ids(.missing))]
    ElementsNotFound { target: Screen, missing: Vec<Screen> },

    /// The identifier does not name a known screen.
    #[error("unknown screen identifier: {0:?}")]
    InvalidScreen(String),
}

fn join_ids(screens: &[Screen]) -> String {
    screens
        .iter()
        .map(|s| s.id())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elements_not_found_message() {
        let err = NavigationError::ElementsNotFound {
            target: Screen::Insights,
            missing: vec![Screen::Menu, Screen::Insights],
        };
        assert_eq!(
            err.to_string(),
            "cannot show insights: screen containers not found: menu, insights"
        );
    }

    #[test]
    fn test_invalid_screen_message() {
        let err = NavigationError::InvalidScreen("reports".into());
        assert_eq!(err.to_string(), "unknown screen identifier: \"reports\"");
    }
}
