//! Room fixtures.

use chrono::Utc;
use entity::room;

/// Default fixture room name.
pub const DEFAULT_NAME: &str = "General's Quarters";

/// Creates a room entity model with id 1 and the default name.
pub fn entity() -> room::Model {
    let now = Utc::now();
    room::Model {
        id: 1,
        room_name: DEFAULT_NAME.to_string(),
        created_at: now,
        updated_at: now,
    }
}
