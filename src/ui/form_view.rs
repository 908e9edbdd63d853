//! Registration form rendering

use super::components::{render_button, BUTTON_HEIGHT};
use super::field_renderer::draw_field;
use crate::app::App;
use crate::platform::{ENHANCE_SHORTCUT, SUBMIT_SHORTCUT};
use crate::state::Field;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the whole registration form
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Header
            Constraint::Length(1),             // Section 01
            Constraint::Length(3),             // Name | Category
            Constraint::Length(6),             // Description
            Constraint::Length(3),             // Established | Phone
            Constraint::Length(1),             // Section 02
            Constraint::Length(3),             // Address | City
            Constraint::Length(3),             // Hours | Service area
            Constraint::Length(3),             // Website
            Constraint::Length(1),             // Section 03
            Constraint::Length(3),             // Instagram | Facebook | LinkedIn
            Constraint::Length(1),             // Section 04
            Constraint::Length(3),             // ZIP path
            Constraint::Length(1),             // Attached archive
            Constraint::Length(BUTTON_HEIGHT), // Buttons row
            Constraint::Min(0),
        ])
        .margin(1)
        .split(area);

    draw_header(frame, chunks[0]);

    draw_section(frame, chunks[1], "01 · BUSINESS BASICS");
    draw_pair(frame, chunks[2], app, Field::BusinessName, Field::Category);
    draw_field(frame, chunks[3], &app.state.form, Field::Description);
    draw_pair(frame, chunks[4], app, Field::EstablishedDate, Field::Phone);

    draw_section(frame, chunks[5], "02 · LOCATION & HOURS");
    draw_pair(frame, chunks[6], app, Field::Address, Field::City);
    draw_pair(frame, chunks[7], app, Field::OperatingHours, Field::ServiceArea);
    draw_field(frame, chunks[8], &app.state.form, Field::Website);

    draw_section(frame, chunks[9], "03 · SOCIAL MEDIA");
    draw_triple(
        frame,
        chunks[10],
        app,
        Field::Instagram,
        Field::Facebook,
        Field::Linkedin,
    );

    draw_section(frame, chunks[11], "04 · FILES & MEDIA");
    draw_field(frame, chunks[12], &app.state.form, Field::ZipPath);
    draw_attachment_line(frame, chunks[13], app);

    draw_buttons_row(frame, chunks[14], app);
}

fn draw_header(frame: &mut Frame, area: Rect) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            "MUNCULDIGOOGLE",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            "Let's make your business famous! ⚡",
            Style::default().fg(Color::White),
        ),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow)),
    );
    frame.render_widget(header, area);
}

fn draw_section(frame: &mut Frame, area: Rect, title: &str) {
    let section = Paragraph::new(Span::styled(
        title,
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(section, area);
}

fn draw_pair(frame: &mut Frame, area: Rect, app: &App, left: Field, right: Field) {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);
    draw_field(frame, halves[0], &app.state.form, left);
    draw_field(frame, halves[1], &app.state.form, right);
}

fn draw_triple(frame: &mut Frame, area: Rect, app: &App, a: Field, b: Field, c: Field) {
    let thirds = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);
    draw_field(frame, thirds[0], &app.state.form, a);
    draw_field(frame, thirds[1], &app.state.form, b);
    draw_field(frame, thirds[2], &app.state.form, c);
}

fn draw_attachment_line(frame: &mut Frame, area: Rect, app: &App) {
    let name = &app.state.form.data.zip_file_name;
    let line = if name.is_empty() {
        Line::from(Span::styled(
            "  no archive attached",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from(vec![
            Span::raw("  📁 attached: "),
            Span::styled(name.clone(), Style::default().fg(Color::Green)),
        ])
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn draw_buttons_row(frame: &mut Frame, area: Rect, app: &App) {
    let on_buttons_row = app.state.form.is_buttons_row_active();
    let selected = app.state.form.selected_button;

    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let enhancing = app.state.enhance_status.is_busy();
    let enhance_label = if enhancing {
        "⏳ Thinking..."
    } else {
        "✨ Enhance with AI"
    };
    render_button(
        frame,
        halves[0],
        enhance_label,
        on_buttons_row && selected == 0,
        !enhancing,
    );

    let submitting = app.state.submit_status.is_busy();
    let submit_label = if submitting {
        "🚀 Sending..."
    } else {
        "GO! SUBMIT NOW"
    };
    render_button(
        frame,
        halves[1],
        submit_label,
        on_buttons_row && selected == 1,
        !submitting,
    );
}

/// Help line at the bottom of the form, with the transient AI hint when set
pub fn help_line(app: &App) -> Line<'_> {
    if let Some(hint) = &app.state.ai_hint {
        return Line::from(Span::styled(
            hint.text.clone(),
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ));
    }

    Line::from(vec![
        Span::styled("Tab", Style::default().fg(Color::Cyan)),
        Span::raw(": next field  "),
        Span::styled(ENHANCE_SHORTCUT, Style::default().fg(Color::Cyan)),
        Span::raw(": AI rewrite  "),
        Span::styled(SUBMIT_SHORTCUT, Style::default().fg(Color::Cyan)),
        Span::raw(": submit  "),
        Span::styled("Enter", Style::default().fg(Color::Cyan)),
        Span::raw(" on ZIP field: attach  "),
        Span::styled("Esc", Style::default().fg(Color::Cyan)),
        Span::raw(": quit"),
    ])
}
