use chrono::NaiveDateTime;

/// `datetime-local` value layout, minute precision
pub const FORM_DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

pub fn format_form_datetime(at: NaiveDateTime) -> String {
    at.format(FORM_DATETIME_FORMAT).to_string()
}

/// What to do with the return date after the departure date changed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReturnDateAction {
    Keep,
    Clear,
}

/// Lower bounds for the departure and return date fields
///
/// Values are compared as strings. Both sides use the fixed
/// `YYYY-MM-DDTHH:MM` layout, so string order is chronological order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRange {
    departure_min: String,
    return_min: Option<String>,
}

impl DateRange {
    /// Departure may not be earlier than `now`
    pub fn starting_at(now: NaiveDateTime) -> Self {
        Self {
            departure_min: format_form_datetime(now),
            return_min: None,
        }
    }

    pub fn departure_min(&self) -> &str {
        &self.departure_min
    }

    /// Explicit return bound, set once a departure date was chosen
    pub fn return_min(&self) -> Option<&str> {
        self.return_min.as_deref()
    }

    /// Record a new departure date
    ///
    /// The return bound follows the departure date. A return date that is now
    /// earlier than the departure date must be cleared. An empty departure
    /// value changes nothing.
    pub fn departure_changed(&mut self, departure: &str, return_date: &str) -> ReturnDateAction {
        let departure = departure.trim();
        if departure.is_empty() {
            return ReturnDateAction::Keep;
        }

        self.return_min = Some(departure.to_string());

        let return_date = return_date.trim();
        if !return_date.is_empty() && return_date < departure {
            ReturnDateAction::Clear
        } else {
            ReturnDateAction::Keep
        }
    }

    pub fn allows_departure(&self, value: &str) -> bool {
        value >= self.departure_min.as_str()
    }

    pub fn allows_return(&self, value: &str) -> bool {
        let min = self.return_min.as_deref().unwrap_or(&self.departure_min);
        value >= min
    }
}

#[cfg(test)]
#[path = "date_range_tests.rs"]
mod date_range_tests;
