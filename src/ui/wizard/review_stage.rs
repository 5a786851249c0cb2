//! Review stage: summary of the form and the submit/cancel buttons

use crate::app::App;
use crate::state::JobForm;
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.wizard.form;

    let block = Block::default()
        .title(" Review Your Job Post ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),                // Summary
            Constraint::Length(BUTTON_HEIGHT), // Buttons
        ])
        .margin(1)
        .split(area);

    frame.render_widget(
        Paragraph::new(summary_lines(form)).wrap(Wrap { trim: false }),
        chunks[0],
    );

    let button_row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(18),
            Constraint::Length(2),
            Constraint::Length(12),
            Constraint::Min(0),
        ])
        .split(chunks[1]);

    render_button(
        frame,
        button_row[1],
        "Post Request",
        app.state.review_button == 0,
    );
    render_button(frame, button_row[3], "Cancel", app.state.review_button == 1);
}

fn summary_lines(form: &JobForm) -> Vec<Line<'static>> {
    let role = form
        .user_type
        .map(|t| t.summary().to_string())
        .unwrap_or_else(|| "(not set)".to_string());

    let mut lines = section("Role Type", &role);
    lines.extend(section("Job Title", &form.title));
    lines.extend(section(
        "Location",
        &format!("{}, {}", form.city, form.state),
    ));
    lines.extend(section("Rate", &form.hourly_rate));
    lines.extend(section("Description", &form.description));
    if form.has_timeline {
        lines.extend(section("Timeline", &form.duration));
    }
    lines
}

fn section(label: &str, value: &str) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(Span::styled(
        label.to_string(),
        Style::default().add_modifier(Modifier::BOLD),
    ))];
    for row in value.split('\n') {
        lines.push(Line::from(Span::styled(
            row.to_string(),
            Style::default().fg(Color::DarkGray),
        )));
    }
    lines.push(Line::from(""));
    lines
}
