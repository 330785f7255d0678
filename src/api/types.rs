use serde::Deserialize;

/// Body returned by `POST /api/booking/<reference>/cancel`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CancelBookingResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}
