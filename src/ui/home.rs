//! Home board: community help requests as a card grid

use crate::app::App;
use crate::state::HelpRequest;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Grid layout configuration
pub const MIN_CARD_WIDTH: u16 = 28;
pub const CARD_HEIGHT: u16 = 7; // borders + title, requester, 2 description rows, budget row
pub const CARD_SPACING_H: u16 = 1;

/// Helper for grid layout calculations
struct GridLayout {
    columns: usize,
    card_width: u16,
}

impl GridLayout {
    /// Create a new grid layout based on available width
    fn new(area_width: u16) -> Self {
        // Account for outer block borders (2 chars total)
        let usable_width = area_width.saturating_sub(2);

        let columns = if usable_width >= MIN_CARD_WIDTH {
            ((usable_width + CARD_SPACING_H) / (MIN_CARD_WIDTH + CARD_SPACING_H)) as usize
        } else {
            1
        };
        let columns = columns.max(1);

        // Distribute remaining space evenly across cards
        let total_spacing = (columns.saturating_sub(1) as u16) * CARD_SPACING_H;
        let card_width = (usable_width.saturating_sub(total_spacing)) / columns as u16;

        Self {
            columns,
            card_width: card_width.max(MIN_CARD_WIDTH),
        }
    }

    /// Convert linear index to (row, col)
    fn index_to_pos(&self, index: usize) -> (usize, usize) {
        (index / self.columns, index % self.columns)
    }

    /// Get card area for a grid position, offset by the scrolled-away rows
    fn card_area(&self, inner: Rect, row: usize, col: usize, first_row: usize) -> Rect {
        let x = inner.x + (col as u16) * (self.card_width + CARD_SPACING_H);
        let y = inner.y + ((row - first_row) as u16) * CARD_HEIGHT;

        Rect {
            x,
            y,
            width: self.card_width,
            height: CARD_HEIGHT,
        }
    }
}

/// Draw the request grid
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let requests = &app.state.requests;

    let block = Block::default()
        .title(" Help Requests ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    let inner = Rect {
        x: area.x + 1,
        y: area.y + 1,
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    };

    if requests.is_empty() {
        let message = Paragraph::new("No requests yet.\nPress 'n' to post one.")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(ratatui::layout::Alignment::Center);
        frame.render_widget(message, inner);
        return;
    }

    let grid = GridLayout::new(area.width);
    let first_row = app.state.scroll_offset;

    for (idx, request) in requests.iter().enumerate() {
        let (row, col) = grid.index_to_pos(idx);

        // Skip rows scrolled above the window
        if row < first_row {
            continue;
        }

        let card_area = grid.card_area(inner, row, col, first_row);

        // Skip if card is outside visible area
        if card_area.y + card_area.height > area.y + area.height {
            continue;
        }

        let is_selected = idx == app.state.selected_index;
        draw_request_card(frame, card_area, request, is_selected);
    }
}

/// Draw a single request card
fn draw_request_card(frame: &mut Frame, area: Rect, request: &HelpRequest, is_selected: bool) {
    let border_style = if is_selected {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default().borders(Borders::ALL).border_style(border_style);
    frame.render_widget(block, area);

    let inner = Rect {
        x: area.x + 1,
        y: area.y + 1,
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    };

    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let width = inner.width as usize;

    // Rows 0-1: title and requester
    let title_style = if is_selected {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    let head = Paragraph::new(vec![
        Line::from(Span::styled(truncate(&request.title, width), title_style)),
        Line::from(Span::styled(
            truncate(&request.requester_name, width),
            Style::default().fg(Color::DarkGray),
        )),
    ]);
    frame.render_widget(
        head,
        Rect {
            height: inner.height.min(2),
            ..inner
        },
    );

    // Rows 2-3: description, wrapped
    if inner.height > 2 {
        let description = Paragraph::new(truncate(&request.description, width * 2))
            .wrap(Wrap { trim: true });
        frame.render_widget(
            description,
            Rect {
                y: inner.y + 2,
                height: (inner.height - 2).min(2),
                ..inner
            },
        );
    }

    // Last row: budget and location
    if inner.height > 4 {
        let footer = Paragraph::new(Line::from(vec![
            Span::styled(
                format!("₹{}", request.budget),
                Style::default().fg(Color::Green),
            ),
            Span::styled(
                truncate(&format!("  {}", request.location), width.saturating_sub(8)),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
        frame.render_widget(
            footer,
            Rect {
                y: inner.y + 4,
                height: 1,
                ..inner
            },
        );
    }
}

/// Truncate to `max` characters, ellipsized when it does not fit
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else if max > 3 {
        let kept: String = text.chars().take(max - 3).collect();
        format!("{kept}...")
    } else {
        text.chars().take(max).collect()
    }
}
