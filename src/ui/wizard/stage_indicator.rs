//! Wizard progress indicator

use crate::app::App;
use crate::state::Stage;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Draw the four stage markers, their connectors and the current stage hint
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let wizard = &app.state.wizard;
    let mut spans = Vec::new();

    for (index, stage) in Stage::ALL.into_iter().enumerate() {
        let is_current = wizard.stage() == stage;
        let is_completed = wizard.is_completed(stage);
        let is_accessible = wizard.is_accessible(stage);

        // Ticks only for completed stages that are not current
        let marker = if is_completed && !is_current {
            "✓".to_string()
        } else {
            stage.number().to_string()
        };

        let style = if is_current {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else if is_completed {
            Style::default().fg(Color::Green)
        } else if is_accessible {
            Style::default()
        } else {
            Style::default().fg(Color::DarkGray)
        };

        spans.push(Span::styled(format!("({marker}) {}", stage.title()), style));

        if index < Stage::ALL.len() - 1 {
            let connector_style = if is_completed && stage < wizard.stage() {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            spans.push(Span::styled(" ─── ", connector_style));
        }
    }

    let lines = vec![
        Line::from(spans),
        Line::from(""),
        Line::from(Span::styled(
            wizard.stage().hint(),
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}
