//! Room domain model.

use serde::{Deserialize, Serialize};

/// A bookable room.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub id: i32,
    pub room_name: String,
}

impl Room {
    /// Converts an entity model to a room domain model at the repository boundary.
    pub fn from_entity(entity: entity::room::Model) -> Self {
        Self {
            id: entity.id,
            room_name: entity.room_name,
        }
    }
}
