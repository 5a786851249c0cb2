//! Role-type stage: what the poster is looking for

use crate::app::App;
use crate::state::UserType;
use crate::ui::components::{render_choice_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" I am looking to: ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(BUTTON_HEIGHT),
            Constraint::Min(0),
        ])
        .split(inner);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(10),
            Constraint::Percentage(38),
            Constraint::Percentage(4),
            Constraint::Percentage(38),
            Constraint::Percentage(10),
        ])
        .split(rows[1]);

    let chosen = app.state.wizard.form.user_type;
    render_choice_button(
        frame,
        columns[1],
        UserType::Professional.label(),
        app.state.role_cursor == 0,
        chosen == Some(UserType::Professional),
    );
    render_choice_button(
        frame,
        columns[3],
        UserType::Employment.label(),
        app.state.role_cursor == 1,
        chosen == Some(UserType::Employment),
    );
}
