//! Room availability lookups for the booking flow.

use chrono::NaiveDate;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::room_restriction::RoomRestrictionRepository, error::AppError, model::room::Room,
};

pub struct AvailabilityService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AvailabilityService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Rooms free for every night in `[start, end)`, ordered by name.
    pub async fn search(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<Room>, AppError> {
        let rooms = RoomRestrictionRepository::new(self.db)
            .get_available_rooms(start, end)
            .await?;

        Ok(rooms)
    }

    /// Whether one room is free for every night in `[start, end)`.
    pub async fn is_room_available(
        &self,
        room_id: i32,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<bool, AppError> {
        let available = RoomRestrictionRepository::new(self.db)
            .is_room_available(room_id, start, end)
            .await?;

        Ok(available)
    }
}
