//! Details stage: title, rate, description and the optional timeline

use super::field_renderer::draw_text_field;
use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.wizard.form;
    let active = app.state.active_field;

    let block = Block::default()
        .title(" Details ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    let mut constraints = vec![
        Constraint::Length(3), // Title
        Constraint::Length(3), // Hourly rate
        Constraint::Min(6),    // Description
        Constraint::Length(1), // Timeline checkbox
    ];
    if form.has_timeline {
        constraints.push(Constraint::Length(3)); // Duration
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .margin(1)
        .split(area);

    draw_text_field(
        frame,
        chunks[0],
        "What The Job Is",
        &form.title,
        "e.g., Full Stack Developer, UI/UX Designer, etc.",
        active == 0,
        false,
    );

    draw_text_field(
        frame,
        chunks[1],
        "Hourly Rate",
        &form.hourly_rate,
        "e.g., 50 or 75.50",
        active == 1,
        false,
    );

    draw_text_field(
        frame,
        chunks[2],
        "Description",
        &form.description,
        "Describe the job, required skills, experience level, project details, etc.",
        active == 2,
        true,
    );

    let checkbox = if form.has_timeline { "[x]" } else { "[ ]" };
    let checkbox_style = if active == 3 {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!("{checkbox} Is there an expected timeline for completion?"),
            checkbox_style,
        ))),
        chunks[3],
    );

    if form.has_timeline {
        draw_text_field(
            frame,
            chunks[4],
            "Duration",
            &form.duration,
            "e.g., 2 weeks, 1 month, 3 months",
            active == 4,
            false,
        );
    }
}
