//! Layout components (header, status bar)

use crate::app::App;
use crate::state::{Stage, View};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Rows taken by the header banner
pub const HEADER_HEIGHT: u16 = 4;

/// Split the screen into header and content; the last row stays for the
/// status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT), // Header
            Constraint::Min(0),                // Content
            Constraint::Length(1),             // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Draw the header banner
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let (title, subtitle) = match app.state.current_view {
        View::Home => (
            "HELP REQUEST POOL",
            "Community-driven tasks. Find a request and lend a hand.",
        ),
        View::PostJob => ("POST A REQUEST", "Tell the community what you need."),
    };

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            title,
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(subtitle, Style::default().fg(Color::DarkGray))),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    // Build status bar content
    let mut spans = vec![];

    // View-specific hints
    let hints = get_view_hints(app);
    spans.push(Span::styled(
        format!(" {hints}"),
        Style::default().fg(Color::DarkGray),
    ));

    // Lookup pendingness
    if app.state.loading_states {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            "Loading states...",
            Style::default().fg(Color::Yellow),
        ));
    } else if app.state.loading_cities {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            "Loading cities...",
            Style::default().fg(Color::Yellow),
        ));
    }

    // Status message
    if let Some(msg) = &app.state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    let quit_hint = " ^C:quit ";

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    // Render quit hint on the right
    let quit_area = Rect {
        x: area.width.saturating_sub(quit_hint.len() as u16),
        y: area.height.saturating_sub(1),
        width: quit_hint.len() as u16,
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the current view
fn get_view_hints(app: &App) -> String {
    match app.state.current_view {
        View::Home => "h/j/k/l:nav  n:post a request  q:quit".to_string(),
        View::PostJob => {
            let stage_hint = match app.state.wizard.stage() {
                Stage::RoleType => "h/l:choose  Enter:select",
                Stage::Location => "Tab:list  j/k:move  Enter:pick",
                Stage::Details => "Tab:field  Space:toggle timeline",
                Stage::Review => "h/l:button  Enter:confirm",
            };
            format!("{stage_hint}  ^N:next  ^B:back  M-1..4:jump  Esc:cancel")
        }
    }
}
