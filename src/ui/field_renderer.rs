//! Field rendering utilities for the registration form

use crate::state::{BusinessForm, Field, MAX_DESCRIPTION_CHARS};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw one form field: bordered box with label title, value or placeholder,
/// cursor when active, and red styling plus the message when it carries a
/// validation error.
pub fn draw_field(frame: &mut Frame, area: Rect, form: &BusinessForm, field: Field) {
    let is_active = form.active_field() == Some(field);
    let value = form.value(field);
    let error = form.error(field);

    let border_style = match (error, is_active) {
        (Some(_), _) => Style::default().fg(Color::Red),
        (None, true) => Style::default().fg(Color::Cyan),
        (None, false) => Style::default().fg(Color::DarkGray),
    };

    let title = match error {
        Some(message) => format!(" {} — {} ", field.label(), message),
        None => format!(" {} ", field.label()),
    };

    let mut block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style);

    // Live character counter on the description field
    if field == Field::Description {
        let count = form.description_chars();
        let counter_style = if count > MAX_DESCRIPTION_CHARS {
            Style::default().fg(Color::Red)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        block = block.title_bottom(
            Line::from(Span::styled(
                format!(" {count} / {MAX_DESCRIPTION_CHARS} "),
                counter_style,
            ))
            .right_aligned(),
        );
    }

    let cursor = if is_active { "▌" } else { "" };

    let content = if value.is_empty() && !is_active {
        Paragraph::new(Line::from(Span::styled(
            field.placeholder(),
            Style::default().fg(Color::DarkGray),
        )))
    } else if field.is_multiline() {
        let mut lines: Vec<Line> = value.lines().map(|l| Line::from(l.to_string())).collect();
        if is_active {
            if let Some(last) = lines.last_mut() {
                last.spans
                    .push(Span::styled(cursor, Style::default().fg(Color::Cyan)));
            } else {
                lines.push(Line::from(Span::styled(
                    cursor,
                    Style::default().fg(Color::Cyan),
                )));
            }
        }
        Paragraph::new(lines)
    } else {
        let value_style = if is_active {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
        };
        Paragraph::new(Line::from(vec![
            Span::styled(value.to_string(), value_style),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ]))
    };

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}
