use chrono::NaiveDateTime;
use reqwest::Url;
use thiserror::Error;

use super::date_range::{DateRange, FORM_DATETIME_FORMAT, format_form_datetime};
use super::price::SeatClass;
use crate::api::{ApiClient, ApiError};

pub const SAME_CITIES_MESSAGE: &str = "Departure and arrival cities cannot be the same";

const SEARCH_PATH: &str = "/search";

/// Reason a search submit is blocked
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{label} is required")]
    Required { field: &'static str, label: &'static str },

    #[error("{}", SAME_CITIES_MESSAGE)]
    SameCities,

    #[error("{label} must look like YYYY-MM-DDTHH:MM")]
    InvalidDate { field: &'static str, label: &'static str },

    #[error("{label} cannot be earlier than {min}")]
    TooEarly {
        field: &'static str,
        label: &'static str,
        min: String,
    },
}

impl ValidationError {
    /// Form name of the offending field
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::Required { field, .. }
            | ValidationError::InvalidDate { field, .. }
            | ValidationError::TooEarly { field, .. } => field,
            ValidationError::SameCities => "arrival_city",
        }
    }
}

/// Values of a submitted search form
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchRequest {
    pub departure_city: String,
    pub arrival_city: String,
    pub departure_date: String,
    pub return_date: Option<String>,
    pub seat_class: SeatClass,
}

impl SearchRequest {
    /// Check the form in field order and report the first problem
    pub fn validate(&self, range: &DateRange) -> Result<(), ValidationError> {
        let departure_city = self.departure_city.trim();
        let arrival_city = self.arrival_city.trim();

        if departure_city.is_empty() {
            return Err(ValidationError::Required {
                field: "departure_city",
                label: "Departure city",
            });
        }
        if arrival_city.is_empty() {
            return Err(ValidationError::Required {
                field: "arrival_city",
                label: "Arrival city",
            });
        }
        if departure_city.to_lowercase() == arrival_city.to_lowercase() {
            return Err(ValidationError::SameCities);
        }

        let departure_date = self.departure_date.trim();
        if departure_date.is_empty() {
            return Err(ValidationError::Required {
                field: "departure_date",
                label: "Departure date",
            });
        }
        if !is_form_datetime(departure_date) {
            return Err(ValidationError::InvalidDate {
                field: "departure_date",
                label: "Departure date",
            });
        }
        if !range.allows_departure(departure_date) {
            return Err(ValidationError::TooEarly {
                field: "departure_date",
                label: "Departure date",
                min: range.departure_min().to_string(),
            });
        }

        if let Some(return_date) = self.return_date.as_deref().map(str::trim)
            && !return_date.is_empty()
        {
            if !is_form_datetime(return_date) {
                return Err(ValidationError::InvalidDate {
                    field: "return_date",
                    label: "Return date",
                });
            }
            let min = range.return_min().unwrap_or(departure_date);
            if !range.allows_return(return_date) || return_date < min {
                return Err(ValidationError::TooEarly {
                    field: "return_date",
                    label: "Return date",
                    min: min.to_string(),
                });
            }
        }

        Ok(())
    }

    /// Query pairs in form order; an empty return date is left out
    pub fn query_pairs(&self) -> Vec<(&'static str, &str)> {
        let mut pairs = vec![
            ("departure_city", self.departure_city.trim()),
            ("arrival_city", self.arrival_city.trim()),
            ("departure_date", self.departure_date.trim()),
        ];
        if let Some(return_date) = self.return_date.as_deref().map(str::trim)
            && !return_date.is_empty()
        {
            pairs.push(("return_date", return_date));
        }
        pairs.push(("seat_class", self.seat_class.as_str()));
        pairs
    }

    /// Results page URL on the backend for this search
    pub fn search_url(&self, client: &ApiClient) -> Result<Url, ApiError> {
        Url::parse_with_params(&client.url(SEARCH_PATH), self.query_pairs())
            .map_err(|e| ApiError::Setup(e.to_string()))
    }
}

/// Exact `YYYY-MM-DDTHH:MM` value naming a real date and time
fn is_form_datetime(value: &str) -> bool {
    NaiveDateTime::parse_from_str(value, FORM_DATETIME_FORMAT)
        .is_ok_and(|parsed| format_form_datetime(parsed) == value)
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod validation_tests;
