//! Reservation fixtures.

use chrono::{NaiveDate, Utc};
use entity::reservation;

pub const DEFAULT_FIRST_NAME: &str = "Ada";
pub const DEFAULT_LAST_NAME: &str = "Lovelace";
pub const DEFAULT_EMAIL: &str = "ada@example.com";

/// Creates a reservation entity model for room 1, 2050-01-01 to 2050-01-03.
///
/// # Example
///
/// ```rust,ignore
/// let reservation = fixture::reservation::entity();
/// assert_eq!(reservation.room_id, 1);
/// assert!(!reservation.processed);
/// ```
pub fn entity() -> reservation::Model {
    let now = Utc::now();
    reservation::Model {
        id: 1,
        first_name: DEFAULT_FIRST_NAME.to_string(),
        last_name: DEFAULT_LAST_NAME.to_string(),
        email: DEFAULT_EMAIL.to_string(),
        phone: "555-555-5555".to_string(),
        start_date: NaiveDate::from_ymd_opt(2050, 1, 1).unwrap(),
        end_date: NaiveDate::from_ymd_opt(2050, 1, 3).unwrap(),
        room_id: 1,
        processed: false,
        created_at: now,
        updated_at: now,
    }
}
