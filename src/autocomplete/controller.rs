//! Autocomplete controller
//!
//! Owns one input field and its suggestion panel. Keystrokes are debounced
//! into lookups, lookups are tagged with request ids, and only the responses
//! the configured ordering accepts reach the panel.
//!
//! Time never advances on its own here: the event loop passes `now` into every
//! handler and calls `tick(now)` and `poll_responses()` on each iteration.

use std::sync::mpsc::{Receiver, Sender, TryRecvError};
use std::time::{Duration, Instant};

use ratatui::crossterm::event::{KeyCode, KeyEvent};

use super::autocomplete_state::AutocompleteState;
use super::lookup::{LookupRequest, LookupResponse, spawn_lookup_worker};
use super::scheduler::ScheduledTask;
use super::sequence::RequestSequence;
use crate::api::ApiClient;
use crate::config::{AutocompleteConfig, ResponseOrdering};
use crate::input::{FieldEvent, InputField};

/// Tunables for one controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutocompleteOptions {
    pub debounce: Duration,
    pub blur_hide: Duration,
    pub max_suggestions: Option<usize>,
    pub ordering: ResponseOrdering,
    pub show_unavailable: bool,
}

impl Default for AutocompleteOptions {
    fn default() -> Self {
        Self::from(&AutocompleteConfig::default())
    }
}

impl From<&AutocompleteConfig> for AutocompleteOptions {
    fn from(config: &AutocompleteConfig) -> Self {
        Self {
            debounce: Duration::from_millis(config.debounce_ms),
            blur_hide: Duration::from_millis(config.blur_hide_ms),
            max_suggestions: config.max_suggestions,
            ordering: config.ordering,
            show_unavailable: config.show_unavailable,
        }
    }
}

/// Whether the controller swallowed a key or left it to the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Default handling is suppressed
    Consumed,
    /// The key is free for the surrounding form
    PassedThrough,
}

pub struct AutocompleteController {
    field: InputField,
    state: AutocompleteState,
    options: AutocompleteOptions,
    debounce: ScheduledTask<String>,
    blur_hide: ScheduledTask<()>,
    sequence: RequestSequence,
    in_flight: Vec<u64>,
    request_tx: Option<Sender<LookupRequest>>,
    response_rx: Option<Receiver<LookupResponse>>,
}

impl AutocompleteController {
    /// Take ownership of `field` and give it a (hidden, empty) panel
    pub fn attach(field: InputField, options: AutocompleteOptions) -> Self {
        Self {
            field,
            state: AutocompleteState::new(),
            options,
            debounce: ScheduledTask::new(options.debounce),
            blur_hide: ScheduledTask::new(options.blur_hide),
            sequence: RequestSequence::new(),
            in_flight: Vec::new(),
            request_tx: None,
            response_rx: None,
        }
    }

    /// Start a lookup worker for `client` and route lookups through it
    pub fn connect(&mut self, client: ApiClient) {
        let (request_tx, response_rx) = spawn_lookup_worker(client);
        self.set_channels(request_tx, response_rx);
    }

    /// Route lookups through an existing pair of channels
    pub fn set_channels(
        &mut self,
        request_tx: Sender<LookupRequest>,
        response_rx: Receiver<LookupResponse>,
    ) {
        self.request_tx = Some(request_tx);
        self.response_rx = Some(response_rx);
    }

    /// Tear down: cancel timers and lookups, stop the worker, drop the panel
    pub fn detach(mut self) -> InputField {
        self.debounce.cancel();
        self.blur_hide.cancel();
        self.sequence.invalidate();

        if let Some(tx) = self.request_tx.take() {
            for request_id in self.in_flight.drain(..) {
                let _ = tx.send(LookupRequest::Cancel { request_id });
            }
            let _ = tx.send(LookupRequest::Shutdown);
        }
        self.response_rx = None;
        log::debug!("Autocomplete detached from {}", self.field.name());

        self.field
    }

    pub fn field(&self) -> &InputField {
        &self.field
    }

    pub fn field_mut(&mut self) -> &mut InputField {
        &mut self.field
    }

    pub fn state(&self) -> &AutocompleteState {
        &self.state
    }

    #[cfg(test)]
    pub(crate) fn state_mut(&mut self) -> &mut AutocompleteState {
        &mut self.state
    }

    pub fn options(&self) -> &AutocompleteOptions {
        &self.options
    }

    pub fn is_panel_visible(&self) -> bool {
        self.state.is_visible()
    }

    /// Ids of lookups sent and not yet answered or cancelled
    pub fn in_flight(&self) -> &[u64] {
        &self.in_flight
    }

    /// Handle a key press while the field has focus
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) -> KeyOutcome {
        if self.state.is_visible() && self.state.selectable_count() > 0 {
            match key.code {
                KeyCode::Down => {
                    self.state.select_next();
                    return KeyOutcome::Consumed;
                }
                KeyCode::Up => {
                    self.state.select_previous();
                    return KeyOutcome::Consumed;
                }
                KeyCode::Enter => {
                    if let Some(city) = self.state.selected_text().map(str::to_string) {
                        self.commit(&city);
                    }
                    return KeyOutcome::Consumed;
                }
                _ => {}
            }
        }

        if key.code == KeyCode::Esc {
            self.state.hide();
            return KeyOutcome::PassedThrough;
        }

        if self.field.input(key) {
            self.handle_input(now);
        }
        KeyOutcome::PassedThrough
    }

    /// React to a change of the field text
    ///
    /// A blank query hides the panel and drops any pending or in-flight
    /// lookup; anything else (re)starts the debounce.
    pub fn handle_input(&mut self, now: Instant) {
        let query = self.field.value().trim().to_string();

        if query.is_empty() {
            self.debounce.cancel();
            self.state.hide();
            self.invalidate_lookups();
            return;
        }

        self.debounce.schedule(now, query);
    }

    pub fn handle_focus(&mut self) {
        self.field.set_focused(true);
        self.blur_hide.cancel();

        if !self.field.value().trim().is_empty() {
            self.state.show_last_suggestions();
        }
    }

    /// Losing focus hides the panel only after a delay, so a click on a row
    /// that caused the blur still finds the row there.
    pub fn handle_blur(&mut self, now: Instant) {
        self.field.set_focused(false);
        self.blur_hide.schedule(now, ());
    }

    /// Commit the row at `index` if the panel shows a selectable row there
    pub fn handle_click(&mut self, index: usize) -> bool {
        if !self.state.is_visible() {
            return false;
        }
        match self.state.selectable_text(index).map(str::to_string) {
            Some(city) => {
                self.commit(&city);
                true
            }
            None => false,
        }
    }

    pub fn handle_hover(&mut self, index: Option<usize>) {
        self.state.hover(index);
    }

    /// Fire due timers: pending hide first, then the debounced lookup
    pub fn tick(&mut self, now: Instant) {
        if self.blur_hide.take_due(now).is_some() {
            self.state.hide();
        }
        if let Some(query) = self.debounce.take_due(now) {
            self.dispatch_lookup(query);
        }
    }

    /// Time until the next timer fires, for the event loop's poll timeout
    pub fn next_deadline(&self, now: Instant) -> Option<Duration> {
        [self.blur_hide.remaining(now), self.debounce.remaining(now)]
            .into_iter()
            .flatten()
            .min()
    }

    /// Drain worker responses and apply the accepted ones
    ///
    /// Returns true if the panel changed.
    pub fn poll_responses(&mut self) -> bool {
        let mut changed = false;
        loop {
            let Some(rx) = &self.response_rx else {
                return changed;
            };
            match rx.try_recv() {
                Ok(response) => changed |= self.apply_response(response),
                Err(TryRecvError::Empty) => return changed,
                Err(TryRecvError::Disconnected) => {
                    log::warn!("Lookup worker for {} disconnected", self.field.name());
                    self.response_rx = None;
                    self.request_tx = None;
                    self.in_flight.clear();
                    return changed;
                }
            }
        }
    }

    /// Apply one lookup response; returns true if the panel changed
    pub fn apply_response(&mut self, response: LookupResponse) -> bool {
        let request_id = response.request_id();
        self.in_flight.retain(|&id| id != request_id);

        if self.options.ordering == ResponseOrdering::LatestIssued
            && !self.sequence.is_current(request_id)
        {
            log::debug!("Discarding stale lookup {}", request_id);
            return false;
        }

        match response {
            LookupResponse::Suggestions { query, cities, .. } => {
                log::debug!("Lookup {} for {:?}: {} cities", request_id, query, cities.len());
                self.state.set_suggestions(cities, self.options.max_suggestions);
                true
            }
            LookupResponse::Failed { error, .. } => {
                log::warn!("City lookup {} failed: {}", request_id, error);
                if self.options.show_unavailable {
                    self.state.set_unavailable();
                    return true;
                }
                false
            }
        }
    }

    fn commit(&mut self, city: &str) {
        self.field.set_value(city);
        self.state.hide();
        self.field.set_focused(true);
        self.blur_hide.cancel();
        self.debounce.cancel();
        self.invalidate_lookups();
        self.field.emit(FieldEvent::Input {
            value: city.to_string(),
        });
    }

    fn dispatch_lookup(&mut self, query: String) {
        let Some(tx) = &self.request_tx else {
            log::debug!("No lookup worker for {}, skipping {:?}", self.field.name(), query);
            return;
        };

        if self.options.ordering == ResponseOrdering::LatestIssued {
            for request_id in self.in_flight.drain(..) {
                let _ = tx.send(LookupRequest::Cancel { request_id });
            }
        }

        let request_id = self.sequence.issue();
        if tx
            .send(LookupRequest::Fetch {
                query,
                request_id,
            })
            .is_ok()
        {
            self.in_flight.push(request_id);
        } else {
            log::warn!("Lookup worker for {} is gone", self.field.name());
        }
    }

    fn invalidate_lookups(&mut self) {
        if self.options.ordering == ResponseOrdering::LastArrived {
            return;
        }
        self.sequence.invalidate();
        if let Some(tx) = &self.request_tx {
            for request_id in self.in_flight.drain(..) {
                let _ = tx.send(LookupRequest::Cancel { request_id });
            }
        }
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod controller_tests;
