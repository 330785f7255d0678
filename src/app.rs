//! Flight search screen
//!
//! Owns the form fields, attaches autocomplete controllers to the city
//! fields and routes terminal events to them.

mod app_events;
mod app_render;
mod app_state;
mod mouse_click;
mod mouse_hover;

pub use app_state::{App, FieldSlot, Focus};
