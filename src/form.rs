//! Search form rules
//!
//! Date constraints, submit validation, seat-class pricing and the
//! selectors deciding which fields receive an autocomplete controller.

mod date_range;
mod fields;
mod price;
mod validation;

pub use date_range::{DateRange, FORM_DATETIME_FORMAT, ReturnDateAction, format_form_datetime};
pub use fields::{CITY_FIELD_IDS, CITY_FIELD_NAMES, is_city_field};
pub use price::{Fares, SeatClass};
pub use validation::{SAME_CITIES_MESSAGE, SearchRequest, ValidationError};
