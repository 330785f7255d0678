use std::time::{Duration, Instant};

use chrono::NaiveDateTime;

use crate::api::ApiClient;
use crate::autocomplete::{AutocompleteController, AutocompleteOptions, FieldEvent, InputField};
use crate::form::{
    DateRange, Fares, ReturnDateAction, SAME_CITIES_MESSAGE, SearchRequest, SeatClass,
    is_city_field,
};
use crate::layout::LayoutRegions;
use crate::notification::{AlertKind, LoadingState, NotificationState};

/// Which form control has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Focus {
    DepartureCity,
    ArrivalCity,
    DepartureDate,
    ReturnDate,
    SeatClass,
}

impl Focus {
    pub const ALL: [Focus; 5] = [
        Focus::DepartureCity,
        Focus::ArrivalCity,
        Focus::DepartureDate,
        Focus::ReturnDate,
        Focus::SeatClass,
    ];

    /// Index into the text fields; the seat class selector has none
    pub fn field_index(self) -> Option<usize> {
        match self {
            Focus::DepartureCity => Some(0),
            Focus::ArrivalCity => Some(1),
            Focus::DepartureDate => Some(2),
            Focus::ReturnDate => Some(3),
            Focus::SeatClass => None,
        }
    }

    /// Form name submitted for this control
    pub fn form_name(self) -> Option<&'static str> {
        match self {
            Focus::DepartureCity => Some("departure_city"),
            Focus::ArrivalCity => Some("arrival_city"),
            Focus::DepartureDate => Some("departure_date"),
            Focus::ReturnDate => Some("return_date"),
            Focus::SeatClass => None,
        }
    }

    pub fn next(self) -> Self {
        let i = Self::ALL.iter().position(|&f| f == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Self {
        let i = Self::ALL.iter().position(|&f| f == self).unwrap_or(0);
        Self::ALL[(i + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// A form field, wrapped by a controller when it is a city field
pub enum FieldSlot {
    City(AutocompleteController),
    Plain(InputField),
}

impl FieldSlot {
    fn attach(field: InputField, options: AutocompleteOptions) -> Self {
        if is_city_field(&field) {
            FieldSlot::City(AutocompleteController::attach(field, options))
        } else {
            FieldSlot::Plain(field)
        }
    }

    fn detach(self) -> Self {
        match self {
            FieldSlot::City(controller) => FieldSlot::Plain(controller.detach()),
            plain => plain,
        }
    }

    pub fn field(&self) -> &InputField {
        match self {
            FieldSlot::City(controller) => controller.field(),
            FieldSlot::Plain(field) => field,
        }
    }

    pub fn field_mut(&mut self) -> &mut InputField {
        match self {
            FieldSlot::City(controller) => controller.field_mut(),
            FieldSlot::Plain(field) => field,
        }
    }

    pub fn controller(&self) -> Option<&AutocompleteController> {
        match self {
            FieldSlot::City(controller) => Some(controller),
            FieldSlot::Plain(_) => None,
        }
    }

    pub fn controller_mut(&mut self) -> Option<&mut AutocompleteController> {
        match self {
            FieldSlot::City(controller) => Some(controller),
            FieldSlot::Plain(_) => None,
        }
    }
}

fn form_fields() -> Vec<InputField> {
    vec![
        InputField::new(Some("departure-city"), "departure_city", "From"),
        InputField::new(Some("arrival-city"), "arrival_city", "To"),
        InputField::new(Some("departure-date"), "departure_date", "Departure"),
        InputField::new(Some("return-date"), "return_date", "Return (optional)"),
    ]
}

/// Application state
pub struct App {
    pub fields: Vec<FieldSlot>,
    pub focus: Focus,
    pub seat_class: SeatClass,
    pub fares: Option<Fares>,
    pub date_range: DateRange,
    pub notification: NotificationState,
    pub loading: LoadingState,
    pub layout_regions: LayoutRegions,
    /// Form name of the field the last failed submit pointed at
    pub invalid_field: Option<&'static str>,
    /// Departure date last fed into the date range
    applied_departure: String,
    submitted: Option<SearchRequest>,
    should_quit: bool,
}

impl App {
    /// Build the form; `now` is the earliest allowed departure
    pub fn new(options: AutocompleteOptions, fares: Option<Fares>, now: NaiveDateTime) -> Self {
        let date_range = DateRange::starting_at(now);

        let mut fields: Vec<FieldSlot> = form_fields()
            .into_iter()
            .map(|field| FieldSlot::attach(field, options))
            .collect();
        for focus in [Focus::DepartureDate, Focus::ReturnDate] {
            if let Some(slot) = focus.field_index().and_then(|i| fields.get_mut(i)) {
                slot.field_mut()
                    .textarea
                    .set_placeholder_text(date_range.departure_min().to_string());
            }
        }

        let mut app = Self {
            fields,
            focus: Focus::DepartureCity,
            seat_class: SeatClass::default(),
            fares,
            date_range,
            notification: NotificationState::new(),
            loading: LoadingState::default(),
            layout_regions: LayoutRegions::new(),
            invalid_field: None,
            applied_departure: String::new(),
            submitted: None,
            should_quit: false,
        };
        app.focus_current();
        app
    }

    /// Start lookup workers for every city field
    pub fn connect(&mut self, client: &ApiClient) {
        for slot in &mut self.fields {
            if let Some(controller) = slot.controller_mut() {
                controller.connect(client.clone());
            }
        }
    }

    /// Detach all controllers, cancelling their timers and lookups
    pub fn shutdown(&mut self) {
        self.fields = std::mem::take(&mut self.fields)
            .into_iter()
            .map(FieldSlot::detach)
            .collect();
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// The validated search, once the form was submitted
    pub fn submitted(&self) -> Option<&SearchRequest> {
        self.submitted.as_ref()
    }

    pub fn slot(&self, focus: Focus) -> Option<&FieldSlot> {
        focus.field_index().and_then(|i| self.fields.get(i))
    }

    pub fn slot_mut(&mut self, focus: Focus) -> Option<&mut FieldSlot> {
        focus.field_index().and_then(|i| self.fields.get_mut(i))
    }

    pub fn controller(&self, focus: Focus) -> Option<&AutocompleteController> {
        self.slot(focus).and_then(FieldSlot::controller)
    }

    pub fn controller_mut(&mut self, focus: Focus) -> Option<&mut AutocompleteController> {
        self.slot_mut(focus).and_then(FieldSlot::controller_mut)
    }

    pub fn value(&self, focus: Focus) -> &str {
        self.slot(focus).map(|slot| slot.field().value()).unwrap_or("")
    }

    pub fn show_alert(&mut self, message: impl Into<String>, kind: AlertKind, now: Instant) {
        self.notification.show(message, kind, now);
    }

    /// Move focus to `target`, blurring the previously focused control
    pub fn set_focus(&mut self, target: Focus, now: Instant) {
        if target == self.focus {
            return;
        }
        self.blur_current(now);
        self.focus = target;
        self.focus_current();
    }

    pub(super) fn blur_current(&mut self, now: Instant) {
        let focus = self.focus;
        match self.slot_mut(focus) {
            Some(FieldSlot::City(controller)) => controller.handle_blur(now),
            Some(FieldSlot::Plain(field)) => field.set_focused(false),
            None => {}
        }
        if focus == Focus::DepartureDate {
            self.apply_departure_date();
        }
    }

    pub(super) fn focus_current(&mut self) {
        match self.slot_mut(self.focus) {
            Some(FieldSlot::City(controller)) => controller.handle_focus(),
            Some(FieldSlot::Plain(field)) => field.set_focused(true),
            None => {}
        }
    }

    /// Feed a changed departure date into the date range
    pub(super) fn apply_departure_date(&mut self) {
        let departure = self.value(Focus::DepartureDate).trim().to_string();
        if departure == self.applied_departure {
            return;
        }
        self.applied_departure = departure.clone();

        let return_date = self.value(Focus::ReturnDate).to_string();
        if self.date_range.departure_changed(&departure, &return_date) == ReturnDateAction::Clear
            && let Some(slot) = self.slot_mut(Focus::ReturnDate)
        {
            log::debug!("Clearing return date {return_date} before departure {departure}");
            slot.field_mut().set_value("");
        }

        let hint = self
            .date_range
            .return_min()
            .unwrap_or(self.date_range.departure_min())
            .to_string();
        if let Some(slot) = self.slot_mut(Focus::ReturnDate) {
            slot.field_mut().textarea.set_placeholder_text(hint);
        }
    }

    pub fn search_request(&self) -> SearchRequest {
        let return_date = self.value(Focus::ReturnDate).trim();
        SearchRequest {
            departure_city: self.value(Focus::DepartureCity).to_string(),
            arrival_city: self.value(Focus::ArrivalCity).to_string(),
            departure_date: self.value(Focus::DepartureDate).to_string(),
            return_date: (!return_date.is_empty()).then(|| return_date.to_string()),
            seat_class: self.seat_class,
        }
    }

    /// Validate and submit the form
    ///
    /// A valid form shows the loading overlay and ends the session; an invalid
    /// one shows a warning and marks the offending field.
    pub fn submit(&mut self, now: Instant) {
        if self.focus == Focus::DepartureDate {
            self.apply_departure_date();
        }

        let request = self.search_request();
        match request.validate(&self.date_range) {
            Ok(()) => {
                log::info!(
                    "Searching {} -> {} on {}",
                    request.departure_city,
                    request.arrival_city,
                    request.departure_date
                );
                self.invalid_field = None;
                self.loading.show();
                self.submitted = Some(request);
                self.should_quit = true;
            }
            Err(e) => {
                log::debug!("Search blocked: {e}");
                self.invalid_field = Some(e.field());
                self.show_alert(e.to_string(), AlertKind::Warning, now);
            }
        }
    }

    /// Advance timers, apply lookup results and react to field events
    pub fn tick(&mut self, now: Instant) {
        for slot in &mut self.fields {
            if let Some(controller) = slot.controller_mut() {
                controller.tick(now);
                controller.poll_responses();
            }
        }
        self.drain_field_events(now);
        self.notification.tick(now);
    }

    /// Time until the next timer anywhere on screen fires
    pub fn next_deadline(&self, now: Instant) -> Option<Duration> {
        self.fields
            .iter()
            .filter_map(|slot| slot.controller()?.next_deadline(now))
            .chain(self.notification.next_deadline(now))
            .min()
    }

    /// A committed city replaces the field value; check it against the
    /// other city right away.
    fn drain_field_events(&mut self, now: Instant) {
        let mut events = Vec::new();
        for focus in Focus::ALL {
            if let Some(slot) = self.slot_mut(focus) {
                let taken = slot.field_mut().take_events();
                events.extend(taken.into_iter().map(|event| (focus, event)));
            }
        }

        for (focus, FieldEvent::Input { value }) in events {
            log::debug!("{focus:?} set to {value:?}");
            if self.invalid_field.is_some() && self.invalid_field == focus.form_name() {
                self.invalid_field = None;
            }

            let departure = self.value(Focus::DepartureCity).trim().to_lowercase();
            let arrival = self.value(Focus::ArrivalCity).trim().to_lowercase();
            if !departure.is_empty() && departure == arrival {
                self.invalid_field = Some("arrival_city");
                self.show_alert(SAME_CITIES_MESSAGE, AlertKind::Warning, now);
            }
        }
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
