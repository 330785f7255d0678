//! City autocomplete
//!
//! `AutocompleteController::attach` wraps a text field with a suggestion
//! panel backed by the `/api/cities` lookup; `detach` hands the field back.

pub mod autocomplete_render;
mod autocomplete_state;
mod controller;
mod lookup;
mod scheduler;
mod sequence;

pub use autocomplete_state::{
    AutocompleteState, NO_RESULTS_TEXT, PanelRow, RowHighlight, UNAVAILABLE_TEXT,
};
pub use controller::{AutocompleteController, AutocompleteOptions, KeyOutcome};
pub use lookup::{LookupRequest, LookupResponse, spawn_lookup_worker};
pub use scheduler::ScheduledTask;
pub use sequence::RequestSequence;

// Re-exported so callers can build fields without reaching into `input`
pub use crate::input::{FieldEvent, InputField};
