//! Mouse hover handling
//!
//! Highlights the suggestion row under the pointer and clears the highlight
//! of every other panel.

use ratatui::crossterm::event::MouseEvent;

use super::app_state::{App, Focus};
use crate::autocomplete::autocomplete_render::row_at;
use crate::layout::Region;

pub fn handle_hover(app: &mut App, region: Option<Region>, mouse: MouseEvent) {
    for focus in [Focus::DepartureCity, Focus::ArrivalCity] {
        let panel_area = match region {
            Some(Region::Panel(target)) if target == focus => {
                app.layout_regions.rect(Region::Panel(target))
            }
            _ => None,
        };

        if let Some(controller) = app.controller_mut(focus) {
            let index = panel_area
                .and_then(|area| row_at(controller.state(), area, mouse.column, mouse.row));
            controller.handle_hover(index);
        }
    }
}

#[cfg(test)]
#[path = "mouse_hover_tests.rs"]
mod mouse_hover_tests;
