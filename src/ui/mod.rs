pub mod backdrop;
pub mod status;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::Paragraph,
};

use crate::app::state::{AppState, STATUS_ROWS};

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(STATUS_ROWS)])
        .split(area);

    let composite = state.engine.layers().composite(state.flash_enabled);
    frame.render_widget(
        backdrop::Backdrop {
            image: composite.as_ref(),
        },
        chunks[0],
    );

    let status = Paragraph::new(status::status_line(state)).style(Style::default().bg(Color::Black));
    frame.render_widget(status, chunks[1]);
}
