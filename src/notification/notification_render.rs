use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};
use unicode_width::UnicodeWidthStr;

use super::loading::LoadingState;
use super::notification_state::NotificationState;
use crate::widgets::popup;

const MAX_ALERT_TEXT_WIDTH: u16 = 44;
const ALERT_HORIZONTAL_PADDING: u16 = 4;
const ALERT_MARGIN_TOP: u16 = 1;

/// Width and height of an alert box holding `message`
pub(super) fn alert_size(message: &str) -> (u16, u16) {
    let text_width = (message.width() as u16).clamp(1, MAX_ALERT_TEXT_WIDTH);
    let lines = (message.width() as u16).div_ceil(text_width).max(1);
    (text_width + ALERT_HORIZONTAL_PADDING, lines + 2)
}

/// Stack alerts in the top-right corner, oldest on top
pub fn render_notifications(frame: &mut Frame, state: &NotificationState) {
    let area = frame.area();
    let mut offset_y = ALERT_MARGIN_TOP;

    for alert in state.alerts() {
        if offset_y >= area.height {
            break;
        }

        let (width, height) = alert_size(&alert.message);
        let alert_area = popup::top_right(area, width, height, offset_y);
        popup::clear_area(frame, alert_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(alert.kind.color()))
            .title(alert.kind.title())
            .title_style(
                Style::default()
                    .fg(alert.kind.color())
                    .add_modifier(Modifier::BOLD),
            );

        let paragraph = Paragraph::new(alert.message.as_str())
            .block(block)
            .style(Style::default().fg(Color::White))
            .wrap(Wrap { trim: true });

        frame.render_widget(paragraph, alert_area);
        offset_y = offset_y.saturating_add(alert_area.height);
    }
}

/// Dim the whole screen and show the loading message in the middle
pub fn render_loading(frame: &mut Frame, loading: &LoadingState) {
    let Some(message) = loading.message() else {
        return;
    };

    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(Color::Black).fg(Color::DarkGray)),
        area,
    );

    let width = message.width() as u16 + ALERT_HORIZONTAL_PADDING;
    let box_area: Rect = popup::centered_popup(area, width, 3);
    popup::clear_area(frame, box_area);

    let paragraph = Paragraph::new(message)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Cyan)),
        );
    frame.render_widget(paragraph, box_area);
}

#[cfg(test)]
#[path = "notification_render_tests.rs"]
mod notification_render_tests;
