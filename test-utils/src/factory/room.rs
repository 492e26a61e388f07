//! Room factory for creating test room entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test rooms.
pub struct RoomFactory<'a> {
    db: &'a DatabaseConnection,
    room_name: String,
}

impl<'a> RoomFactory<'a> {
    /// Creates a new RoomFactory; the default name is `"Room {id}"`.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            room_name: format!("Room {}", next_id()),
        }
    }

    pub fn room_name(mut self, room_name: impl Into<String>) -> Self {
        self.room_name = room_name.into();
        self
    }

    /// Builds and inserts the room entity into the database.
    pub async fn build(self) -> Result<entity::room::Model, DbErr> {
        let now = Utc::now();
        entity::room::ActiveModel {
            room_name: ActiveValue::Set(self.room_name),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a room with default values.
pub async fn create_room(db: &DatabaseConnection) -> Result<entity::room::Model, DbErr> {
    RoomFactory::new(db).build().await
}

/// Creates a room with a specific name.
pub async fn create_room_named(
    db: &DatabaseConnection,
    room_name: impl Into<String>,
) -> Result<entity::room::Model, DbErr> {
    RoomFactory::new(db).room_name(room_name).build().await
}
