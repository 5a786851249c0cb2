//! UI module for rendering the TUI

mod components;
pub mod home;
mod layout;
mod wizard;

pub use layout::HEADER_HEIGHT;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let (header_area, content_area) = layout::create_layout(area);
    layout::draw_header(frame, header_area, app);

    // Draw main content based on current view
    match &app.state.current_view {
        View::Home => home::draw(frame, content_area, app),
        View::PostJob => wizard::draw(frame, content_area, app),
    }

    // Draw status bar
    layout::draw_status_bar(frame, app);
}
