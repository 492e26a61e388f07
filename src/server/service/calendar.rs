//! Admin reservation calendar.
//!
//! Building a month loads every room with the restrictions touching it. Saving
//! applies the `BlockChanges` reconciled from the posted form; a failure on one
//! block is logged and the rest are still applied.

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{room::RoomRepository, room_restriction::RoomRestrictionRepository},
    error::AppError,
    model::{
        calendar::{BlockChanges, CalendarMonth, CalendarView, RoomCalendar},
        room::Room,
    },
};

/// Counts of what a save did.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct BlockReport {
    pub removed: usize,
    pub added: usize,
    pub failed: usize,
}

pub struct CalendarService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CalendarService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn rooms(&self) -> Result<Vec<Room>, AppError> {
        Ok(RoomRepository::new(self.db).get_all().await?)
    }

    /// Builds every room's reservation and block maps for `month`.
    pub async fn build(&self, month: CalendarMonth) -> Result<CalendarView, AppError> {
        let restrictions = RoomRestrictionRepository::new(self.db);

        let mut rooms = Vec::new();
        for room in self.rooms().await? {
            let room_restrictions = restrictions
                .get_for_room_by_date(room.id, month.first_day(), month.last_day())
                .await?;

            rooms.push(RoomCalendar::build(room, &month, &room_restrictions));
        }

        Ok(CalendarView { month, rooms })
    }

    /// Deletes and inserts owner blocks.
    pub async fn apply(&self, changes: &BlockChanges) -> BlockReport {
        let restrictions = RoomRestrictionRepository::new(self.db);
        let mut report = BlockReport::default();

        for id in &changes.remove {
            match restrictions.delete_block(*id).await {
                Ok(true) => report.removed += 1,
                Ok(false) => tracing::warn!("Owner block {} no longer exists", id),
                Err(e) => {
                    tracing::error!("Failed to delete owner block {}: {}", id, e);
                    report.failed += 1;
                }
            }
        }

        for (room_id, date) in &changes.add {
            match restrictions.insert_block(*room_id, *date).await {
                Ok(_) => report.added += 1,
                Err(e) => {
                    tracing::error!("Failed to block room {} on {}: {}", room_id, date, e);
                    report.failed += 1;
                }
            }
        }

        report
    }
}
