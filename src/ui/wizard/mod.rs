//! Post-request wizard rendering

mod details_stage;
mod field_renderer;
mod location_stage;
mod review_stage;
mod role_stage;
mod stage_indicator;

use crate::app::App;
use crate::state::Stage;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

/// Draw the wizard: progress indicator on top, stage content below
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Progress indicator
            Constraint::Min(0),    // Stage content
        ])
        .split(area);

    stage_indicator::draw(frame, chunks[0], app);

    match app.state.wizard.stage() {
        Stage::RoleType => role_stage::draw(frame, chunks[1], app),
        Stage::Location => location_stage::draw(frame, chunks[1], app),
        Stage::Details => details_stage::draw(frame, chunks[1], app),
        Stage::Review => review_stage::draw(frame, chunks[1], app),
    }
}
