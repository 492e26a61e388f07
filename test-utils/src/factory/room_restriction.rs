//! Room restriction factory for reservations and owner blocks.

use chrono::{Duration, NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::restriction::{OWNER_BLOCK, RESERVATION};

/// Creates the room restriction that occupies a reservation's dates.
///
/// # Arguments
/// - `db` - Database connection
/// - `reservation` - Reservation whose room and dates are copied
///
/// # Returns
/// - `Ok(entity::room_restriction::Model)` - Created restriction linked to the reservation
/// - `Err(DbErr)` - Database error during insert
pub async fn create_reservation_restriction(
    db: &DatabaseConnection,
    reservation: &entity::reservation::Model,
) -> Result<entity::room_restriction::Model, DbErr> {
    insert(
        db,
        reservation.room_id,
        reservation.start_date,
        reservation.end_date,
        Some(reservation.id),
        RESERVATION,
    )
    .await
}

/// Creates a one-night owner block for a room.
///
/// # Arguments
/// - `db` - Database connection
/// - `room_id` - Room to block
/// - `date` - Blocked night; the block ends the following day
pub async fn create_block(
    db: &DatabaseConnection,
    room_id: i32,
    date: NaiveDate,
) -> Result<entity::room_restriction::Model, DbErr> {
    insert(db, room_id, date, date + Duration::days(1), None, OWNER_BLOCK).await
}

async fn insert(
    db: &DatabaseConnection,
    room_id: i32,
    start_date: NaiveDate,
    end_date: NaiveDate,
    reservation_id: Option<i32>,
    restriction_id: i32,
) -> Result<entity::room_restriction::Model, DbErr> {
    let now = Utc::now();
    entity::room_restriction::ActiveModel {
        start_date: ActiveValue::Set(start_date),
        end_date: ActiveValue::Set(end_date),
        room_id: ActiveValue::Set(room_id),
        reservation_id: ActiveValue::Set(reservation_id),
        restriction_id: ActiveValue::Set(restriction_id),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
}
