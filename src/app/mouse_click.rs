//! Mouse click handling
//!
//! A click first blurs the focused field, then lands on its target. For a
//! suggestion row this is the order in which the panel must still be on
//! screen: the blur only schedules the hide.

use std::time::Instant;

use ratatui::crossterm::event::MouseEvent;

use super::app_state::{App, Focus};
use crate::autocomplete::autocomplete_render::row_at;
use crate::layout::Region;

/// Handle left mouse button click for the given region
pub fn handle_click(app: &mut App, region: Option<Region>, mouse: MouseEvent, now: Instant) {
    match region {
        Some(Region::Panel(target)) => click_panel(app, target, mouse, now),
        Some(Region::Field(Focus::SeatClass)) if app.focus == Focus::SeatClass => {
            app.seat_class = app.seat_class.next();
        }
        Some(Region::Field(target)) => app.set_focus(target, now),
        None => {}
    }
}

fn click_panel(app: &mut App, target: Focus, mouse: MouseEvent, now: Instant) {
    let Some(panel_area) = app.layout_regions.rect(Region::Panel(target)) else {
        return;
    };

    app.blur_current(now);

    let committed = match app.controller_mut(target) {
        Some(controller) => row_at(controller.state(), panel_area, mouse.column, mouse.row)
            .is_some_and(|index| controller.handle_click(index)),
        None => false,
    };

    // A commit focuses the field itself
    app.focus = target;
    if !committed {
        app.focus_current();
    }
}

#[cfg(test)]
#[path = "mouse_click_tests.rs"]
mod mouse_click_tests;
