use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::app_state::{App, Focus};
use crate::autocomplete::autocomplete_render::render_panel;
use crate::form::SeatClass;
use crate::input::input_render::render_field;
use crate::layout::Region;
use crate::notification::{render_loading, render_notifications};

const TITLE: &str = " ✈ Flight search ";
const HELP_TEXT: &str =
    " Tab: next field | ↑↓ Enter: pick city | ←→: seat class | Ctrl+S: search | Esc: quit ";

const TEXT_FIELDS: [Focus; 4] = [
    Focus::DepartureCity,
    Focus::ArrivalCity,
    Focus::DepartureDate,
    Focus::ReturnDate,
];

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        self.layout_regions.clear();

        let layout = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

        frame.render_widget(
            Paragraph::new(TITLE).style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            layout[0],
        );

        for (focus, area) in TEXT_FIELDS.into_iter().zip(layout[1..5].iter().copied()) {
            if let Some(slot) = self.slot(focus) {
                let invalid = self.invalid_field.is_some() && self.invalid_field == focus.form_name();
                render_field(frame, slot.field(), area, invalid);
                self.layout_regions.push(Region::Field(focus), area);
            }
        }

        self.render_seat_class(frame, layout[5]);
        self.layout_regions
            .push(Region::Field(Focus::SeatClass), layout[5]);

        if let Some(fares) = &self.fares {
            let line = Line::from(vec![
                Span::styled(" Price: ", Style::default().fg(Color::DarkGray)),
                Span::styled(
                    fares.display(self.seat_class),
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!(" ({})", self.seat_class.label()),
                    Style::default().fg(Color::DarkGray),
                ),
            ]);
            frame.render_widget(Paragraph::new(line), layout[6]);
        }

        frame.render_widget(
            Paragraph::new(HELP_TEXT).style(Style::default().fg(Color::DarkGray)),
            layout[8],
        );

        // Panels last so they overlap the fields below them
        for (focus, area) in [
            (Focus::DepartureCity, layout[1]),
            (Focus::ArrivalCity, layout[2]),
        ] {
            let panel = self
                .controller(focus)
                .and_then(|controller| render_panel(controller, frame, area));
            if let Some(panel) = panel {
                self.layout_regions.push(Region::Panel(focus), panel);
            }
        }

        render_notifications(frame, &self.notification);
        render_loading(frame, &self.loading);
    }

    fn render_seat_class(&self, frame: &mut Frame, area: Rect) {
        let focused = self.focus == Focus::SeatClass;
        let border_color = if focused { Color::Cyan } else { Color::DarkGray };

        let mut spans = vec![Span::raw(if focused { "◀ " } else { "  " })];
        for class in SeatClass::ALL {
            let style = if class == self.seat_class {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            spans.push(Span::styled(format!(" {} ", class.label()), style));
            spans.push(Span::raw(" "));
        }
        if focused {
            spans.push(Span::raw("▶"));
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Seat class ")
            .border_style(Style::default().fg(border_color));

        frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
    }
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;
