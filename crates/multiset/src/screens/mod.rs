pub mod compliance;
pub mod insights;
pub mod menu;

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::components::Component;
use crate::state::AppState;
use crate::util::styles::{HELP_COLOR, dataset_status_style, panel_block};

/// Trait for full screen views
pub trait ScreenView: Component {
    /// Get the screen title
    fn title(&self) -> &str;
}

/// Dataset management panel shared by the analysis screens.
pub(crate) fn render_dataset_panel(frame: &mut Frame, area: Rect, state: &AppState) {
    let status = state.dataset_status;
    let location = state
        .datasets_dir
        .as_ref()
        .map(|dir| dir.display().to_string())
        .unwrap_or_else(|| "not configured".to_string());

    let lines = vec![
        Line::from(Span::styled(
            status.summary(),
            dataset_status_style(status.is_available()),
        )),
        Line::from(Span::styled(
            format!("Datasets directory: {}", location),
            ratatui::style::Style::default().fg(HELP_COLOR),
        )),
        Line::from(Span::styled(
            "↩ Esc/b: back to menu",
            ratatui::style::Style::default().fg(HELP_COLOR),
        )),
    ];

    let paragraph = Paragraph::new(lines).block(panel_block("📁 Dataset Management"));
    frame.render_widget(paragraph, area);
}
