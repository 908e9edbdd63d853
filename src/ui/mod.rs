//! UI module for rendering the TUI

mod components;
mod field_renderer;
mod form_view;
mod success_view;

use crate::app::App;
use crate::state::View;
use chrono::{Datelike, Utc};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(frame.area());

    match app.state.current_view {
        View::Form => form_view::draw(frame, chunks[0], app),
        View::Success => success_view::draw(frame, chunks[0], app),
    }

    draw_status_bar(frame, chunks[1], app);

    // Modal error dialog on top of everything
    if let Some(message) = app.state.current_error() {
        components::render_error_dialog(frame, message);
    }
}

fn draw_status_bar(frame: &mut Frame, area: ratatui::layout::Rect, app: &App) {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(40)])
        .split(area);

    let left = match app.state.current_view {
        View::Form => form_view::help_line(app),
        View::Success => Line::from(""),
    };
    frame.render_widget(Paragraph::new(left), halves[0]);

    let footer = Line::from(Span::styled(
        format!("© {} Bani Risset · Teras Digital Tech", Utc::now().year()),
        Style::default().fg(Color::DarkGray),
    ))
    .right_aligned();
    frame.render_widget(Paragraph::new(footer), halves[1]);
}
