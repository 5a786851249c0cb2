//! Location stage: dependent state and city pickers

use crate::app::App;
use crate::state::LocationFocus;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    draw_states_pane(frame, columns[0], app);
    draw_cities_pane(frame, columns[1], app);
}

fn draw_states_pane(frame: &mut Frame, area: Rect, app: &App) {
    let is_focused = matches!(app.state.location_focus, LocationFocus::States);
    let picked = &app.state.wizard.form.state;

    let title = if picked.is_empty() {
        " State ".to_string()
    } else {
        format!(" State: {picked} ")
    };
    let inner = draw_pane_block(frame, area, &title, is_focused);

    if app.state.loading_states {
        frame.render_widget(placeholder("Loading states..."), inner);
        return;
    }
    if app.state.states.is_empty() {
        frame.render_widget(placeholder("No states available"), inner);
        return;
    }

    let names: Vec<&str> = app.state.states.iter().map(|r| r.name.as_str()).collect();
    let lines = list_window(&names, app.state.state_cursor, inner.height as usize, picked);
    frame.render_widget(Paragraph::new(lines), inner);
}

fn draw_cities_pane(frame: &mut Frame, area: Rect, app: &App) {
    let is_focused = matches!(app.state.location_focus, LocationFocus::Cities);
    let picked = &app.state.wizard.form.city;

    let title = if picked.is_empty() {
        " City ".to_string()
    } else {
        format!(" City: {picked} ")
    };
    let inner = draw_pane_block(frame, area, &title, is_focused);

    // Mirrors the dependent-dropdown placeholders: no state, loading, empty
    if app.state.wizard.form.state.is_empty() {
        frame.render_widget(placeholder("Select a state first"), inner);
        return;
    }
    if app.state.loading_cities {
        frame.render_widget(placeholder("Loading cities..."), inner);
        return;
    }
    if app.state.cities.is_empty() {
        frame.render_widget(placeholder("No cities available"), inner);
        return;
    }

    let names: Vec<&str> = app.state.cities.iter().map(|c| c.as_str()).collect();
    let lines = list_window(&names, app.state.city_cursor, inner.height as usize, picked);
    frame.render_widget(Paragraph::new(lines), inner);
}

fn draw_pane_block(frame: &mut Frame, area: Rect, title: &str, is_focused: bool) -> Rect {
    let border_style = if is_focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let block = Block::default()
        .title(title.to_string())
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

fn placeholder(text: &str) -> Paragraph<'static> {
    Paragraph::new(text.to_string()).style(Style::default().fg(Color::DarkGray))
}

/// Window of list rows around the cursor, with cursor and picked markers
fn list_window(items: &[&str], cursor: usize, visible: usize, picked: &str) -> Vec<Line<'static>> {
    if visible == 0 {
        return Vec::new();
    }
    let start = cursor
        .saturating_sub(visible.saturating_sub(1) / 2)
        .min(items.len().saturating_sub(visible));

    items
        .iter()
        .enumerate()
        .skip(start)
        .take(visible)
        .map(|(idx, item)| {
            let is_cursor = idx == cursor;
            let is_picked = !picked.is_empty() && *item == picked;

            let marker = if is_cursor { "▸ " } else { "  " };
            let mut style = Style::default();
            if is_picked {
                style = style.fg(Color::Green);
            }
            if is_cursor {
                style = style.fg(Color::Cyan).add_modifier(Modifier::BOLD);
            }

            Line::from(Span::styled(format!("{marker}{item}"), style))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_list_window_centers_on_cursor() {
        let items = ["a", "b", "c", "d", "e", "f"];
        let lines = list_window(&items, 3, 3, "");
        assert_eq!(lines.len(), 3);
        // Window is b..d with the cursor row marked
        assert_eq!(lines[0].spans[0].content, "  c");
        assert_eq!(lines[1].spans[0].content, "▸ d");
    }

    #[test]
    fn test_list_window_clamps_at_the_end() {
        let items = ["a", "b", "c"];
        let lines = list_window(&items, 2, 5, "");
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[2].spans[0].content, "▸ c");
    }
}
