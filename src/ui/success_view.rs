//! Confirmation view shown after a successful submission

use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the success screen: the submitted name and the reset hint
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let width = area.width.min(64);
    let height = 11u16.min(area.height);
    let boxed = Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    };

    let content = vec![
        Line::from(Span::styled(
            "🎉  YESS! SUCCESS!",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::raw("Business "),
            Span::styled(
                format!("\"{}\"", app.state.submitted_name),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::ITALIC),
            ),
            Span::raw(" is queued for Google!"),
        ]),
        Line::from(""),
        Line::from("Our team will process your data shortly."),
        Line::from("Get ready for a flood of orders! 🚀"),
        Line::from(""),
        Line::from(vec![
            Span::styled("Enter", Style::default().fg(Color::Cyan)),
            Span::raw(": fill the form again  "),
            Span::styled("q", Style::default().fg(Color::Cyan)),
            Span::raw(": quit"),
        ]),
    ];

    let dialog = Paragraph::new(content).centered().block(
        Block::default()
            .title(" Registration received ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Green)),
    );

    frame.render_widget(dialog, boxed);
}
