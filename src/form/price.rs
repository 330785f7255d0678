use crate::format::{DEFAULT_CURRENCY, format_currency};

/// Cabin class chosen on the search form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeatClass {
    #[default]
    Economy,
    Business,
    First,
}

impl SeatClass {
    pub const ALL: [SeatClass; 3] = [SeatClass::Economy, SeatClass::Business, SeatClass::First];

    /// Form value sent to the backend
    pub fn as_str(self) -> &'static str {
        match self {
            SeatClass::Economy => "economy",
            SeatClass::Business => "business",
            SeatClass::First => "first",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SeatClass::Economy => "Economy",
            SeatClass::Business => "Business",
            SeatClass::First => "First",
        }
    }

    pub fn next(self) -> Self {
        match self {
            SeatClass::Economy => SeatClass::Business,
            SeatClass::Business => SeatClass::First,
            SeatClass::First => SeatClass::Economy,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            SeatClass::Economy => SeatClass::First,
            SeatClass::Business => SeatClass::Economy,
            SeatClass::First => SeatClass::Business,
        }
    }
}

/// Fares of one flight
///
/// A business or first fare of zero (or not a number) is treated as
/// missing and derived from the base fare.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fares {
    pub base: f64,
    pub business: f64,
    pub first: f64,
}

impl Fares {
    pub fn new(base: f64, business: Option<f64>, first: Option<f64>) -> Self {
        Self {
            base,
            business: business.unwrap_or(0.0),
            first: first.unwrap_or(0.0),
        }
    }

    /// Price for `class`, rounded to a whole amount
    pub fn price(&self, class: SeatClass) -> f64 {
        let raw = match class {
            SeatClass::Economy => self.base,
            SeatClass::Business => given_or(self.business, self.base * 2.0),
            SeatClass::First => given_or(self.first, self.base * 3.0),
        };
        raw.round()
    }

    pub fn display(&self, class: SeatClass) -> String {
        format_currency(self.price(class), DEFAULT_CURRENCY)
    }
}

fn given_or(value: f64, fallback: f64) -> f64 {
    if value.is_nan() || value == 0.0 {
        fallback
    } else {
        value
    }
}

#[cfg(test)]
#[path = "price_tests.rs"]
mod price_tests;
