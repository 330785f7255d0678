//! Suggestion panel rendering
//!
//! Draws the panel directly under its field and maps pointer rows back to
//! panel rows for hover and click handling.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

use super::autocomplete_state::{AutocompleteState, PanelRow, RowHighlight};
use super::controller::AutocompleteController;
use crate::widgets::popup;

// Suggestion panel display constants
pub const MAX_VISIBLE_ROWS: usize = 6;
const PANEL_BORDER_HEIGHT: u16 = 1;

/// First row shown so the keyboard cursor stays inside the window
pub fn scroll_offset(state: &AutocompleteState) -> usize {
    match state.selected_index() {
        Some(i) if i >= MAX_VISIBLE_ROWS => i + 1 - MAX_VISIBLE_ROWS,
        _ => 0,
    }
}

/// Render the panel under `field_area`
///
/// Returns the area used, or None when the panel is hidden.
pub fn render_panel(
    controller: &AutocompleteController,
    frame: &mut Frame,
    field_area: Rect,
) -> Option<Rect> {
    let state = controller.state();
    if !state.is_visible() || state.rows().is_empty() {
        return None;
    }

    let visible_count = state.rows().len().min(MAX_VISIBLE_ROWS);
    let panel_height = visible_count as u16 + PANEL_BORDER_HEIGHT;
    let panel_area = popup::popup_below_anchor(field_area, frame.area(), panel_height);
    if panel_area.height == 0 {
        return None;
    }

    let offset = scroll_offset(state);
    let items: Vec<ListItem> = state
        .rows()
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible_count)
        .map(|(i, row)| ListItem::new(row_line(row, state.highlight(i))))
        .collect();

    popup::clear_area(frame, panel_area);

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::LEFT | Borders::RIGHT | Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray))
            .style(Style::default().bg(Color::Black)),
    );
    frame.render_widget(list, panel_area);

    Some(panel_area)
}

fn row_line(row: &PanelRow, highlight: RowHighlight) -> Line<'static> {
    match row {
        PanelRow::Suggestion(city) => match highlight {
            RowHighlight::Selected => Line::from(Span::styled(
                format!("► {city}"),
                Style::default()
                    .fg(Color::White)
                    .bg(Color::Blue)
                    .add_modifier(Modifier::BOLD),
            )),
            RowHighlight::Hovered => Line::from(Span::styled(
                format!("  {city}"),
                Style::default().fg(Color::White).bg(Color::DarkGray),
            )),
            RowHighlight::None => Line::from(Span::styled(
                format!("  {city}"),
                Style::default().fg(Color::White),
            )),
        },
        placeholder => Line::from(Span::styled(
            format!("  {}", placeholder.text()),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )),
    }
}

/// Panel row under a screen position, if any
pub fn row_at(state: &AutocompleteState, panel_area: Rect, column: u16, row: u16) -> Option<usize> {
    let inner_x = panel_area.x.saturating_add(1);
    let inner_right = panel_area.x.saturating_add(panel_area.width.saturating_sub(1));
    let inner_bottom = panel_area
        .y
        .saturating_add(panel_area.height.saturating_sub(PANEL_BORDER_HEIGHT));

    if column < inner_x || column >= inner_right || row < panel_area.y || row >= inner_bottom {
        return None;
    }

    let index = scroll_offset(state) + (row - panel_area.y) as usize;
    (index < state.rows().len()).then_some(index)
}

#[cfg(test)]
#[path = "autocomplete_render_tests.rs"]
mod autocomplete_render_tests;
