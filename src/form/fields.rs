use crate::input::InputField;

/// Element ids of the city fields
pub const CITY_FIELD_IDS: [&str; 2] = ["departure-city", "arrival-city"];

/// Form names of the city fields
pub const CITY_FIELD_NAMES: [&str; 2] = ["departure_city", "arrival_city"];

/// Whether `field` gets an autocomplete controller
pub fn is_city_field(field: &InputField) -> bool {
    field.id().is_some_and(|id| CITY_FIELD_IDS.contains(&id))
        || CITY_FIELD_NAMES.contains(&field.name())
}
