use serde::{Deserialize, Serialize};

/// Response of the room availability check used by the booking widgets.
///
/// Dates are `YYYY-MM-DD` and echo the request, so the page can build a
/// `/book-room` link from the response alone.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AvailabilityResponseDto {
    pub ok: bool,
    pub message: String,
    pub room_id: String,
    pub start_date: String,
    pub end_date: String,
}

impl AvailabilityResponseDto {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
            ..Default::default()
        }
    }
}
