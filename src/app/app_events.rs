use std::time::Instant;

use ratatui::crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use super::app_state::{App, FieldSlot, Focus};
use super::{mouse_click, mouse_hover};
use crate::layout::region_at;

impl App {
    /// Route one terminal event
    pub fn handle_event(&mut self, event: Event, now: Instant) {
        match event {
            // Only key presses; repeats and releases would double the input
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key_event(key, now),
            Event::Mouse(mouse) => self.handle_mouse_event(mouse, now),
            _ => {}
        }
    }

    pub fn handle_key_event(&mut self, key: KeyEvent, now: Instant) {
        if self.handle_global_keys(key, now) {
            return;
        }

        match self.focus {
            Focus::SeatClass => self.handle_seat_class_key(key),
            focus => self.handle_field_key(focus, key, now),
        }
    }

    /// Keys that work regardless of focus; returns true if handled
    fn handle_global_keys(&mut self, key: KeyEvent, now: Instant) -> bool {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        if self.loading.is_visible() {
            if ctrl && key.code == KeyCode::Char('c') {
                self.quit();
            }
            return true;
        }

        match key.code {
            KeyCode::Char('c') if ctrl => {
                self.quit();
                true
            }
            KeyCode::Char('s') if ctrl => {
                self.submit(now);
                true
            }
            KeyCode::Tab => {
                self.set_focus(self.focus.next(), now);
                true
            }
            KeyCode::BackTab => {
                self.set_focus(self.focus.previous(), now);
                true
            }
            _ => false,
        }
    }

    fn handle_field_key(&mut self, focus: Focus, key: KeyEvent, now: Instant) {
        let Some(slot) = self.slot_mut(focus) else {
            return;
        };
        let before = slot.field().value().to_string();

        // Esc closes an open panel first; only a second Esc leaves the form
        let esc_quits = match slot {
            FieldSlot::City(controller) => {
                let panel_open = controller.is_panel_visible();
                controller.handle_key(key, now);
                !panel_open
            }
            FieldSlot::Plain(field) => {
                if key.code != KeyCode::Esc {
                    field.input(key);
                }
                true
            }
        };
        let changed = slot.field().value() != before;

        if changed && self.invalid_field.is_some() && self.invalid_field == focus.form_name() {
            self.invalid_field = None;
        }
        if key.code == KeyCode::Esc && esc_quits {
            self.quit();
        }
    }

    fn handle_seat_class_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left => self.seat_class = self.seat_class.previous(),
            KeyCode::Right | KeyCode::Char(' ') => self.seat_class = self.seat_class.next(),
            KeyCode::Esc => self.quit(),
            _ => {}
        }
    }

    pub fn handle_mouse_event(&mut self, mouse: MouseEvent, now: Instant) {
        if self.loading.is_visible() {
            return;
        }

        let region = region_at(&self.layout_regions, mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                mouse_click::handle_click(self, region, mouse, now)
            }
            MouseEventKind::Moved => mouse_hover::handle_hover(self, region, mouse),
            _ => {}
        }
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
