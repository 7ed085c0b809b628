use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

use crate::app::state::{AppMode, AppState};

pub fn status_text(state: &AppState) -> String {
    let label = state.engine.weather().map_or("none", |w| w.label());
    let count = state.engine.atmosphere().particles().len();
    let run = if state.mode == AppMode::Paused {
        "paused"
    } else {
        "running"
    };
    let mut text = format!("{label} · {count} particles · {run}");
    if !state.flash_enabled {
        text.push_str(" · no flash");
    }
    text
}

pub fn status_line(state: &AppState) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!(" {} ", status_text(state)),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            " ←/→ weather  space pause  f flash  q quit",
            Style::default().fg(Color::DarkGray),
        ),
    ])
}
