//! Input field rendering

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders},
};

use super::input_state::InputField;

/// Border color for a field: red when invalid, cyan when focused
pub fn border_color(field: &InputField, invalid: bool) -> Color {
    if invalid {
        Color::Red
    } else if field.is_focused() {
        Color::Cyan
    } else {
        Color::DarkGray
    }
}

/// Draw `field` as a bordered single-line box titled with its label
pub fn render_field(frame: &mut Frame, field: &InputField, area: Rect, invalid: bool) {
    let color = border_color(field, invalid);
    let mut title_style = Style::default().fg(color);
    if field.is_focused() {
        title_style = title_style.add_modifier(Modifier::BOLD);
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", field.label()))
        .title_style(title_style)
        .border_style(Style::default().fg(color));

    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(&field.textarea, inner);
}

#[cfg(test)]
#[path = "input_render_tests.rs"]
mod input_render_tests;
