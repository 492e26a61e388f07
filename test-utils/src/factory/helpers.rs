//! Shared helper utilities for factory methods.

use chrono::{Duration, NaiveDate, Utc};
use sea_orm::{DatabaseConnection, DbErr};

static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// A date far enough in the future that nothing created by "now" collides with it.
///
/// # Arguments
/// - `offset_days` - Days to add to the base date
///
/// # Returns
/// - `NaiveDate` - 2050-01-01 plus the offset
pub fn future_date(offset_days: i64) -> NaiveDate {
    NaiveDate::from_ymd_opt(2050, 1, 1).unwrap() + Duration::days(offset_days)
}

/// Today's date in UTC.
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Creates a room, a reservation in it, and the reservation's room restriction.
///
/// The reservation covers 2050-01-01 to 2050-01-03 (two nights).
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((room, reservation, room_restriction))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_reservation_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::room::Model,
        entity::reservation::Model,
        entity::room_restriction::Model,
    ),
    DbErr,
> {
    let room = crate::factory::room::create_room(db).await?;
    let reservation = crate::factory::reservation::ReservationFactory::new(db, room.id)
        .dates(future_date(0), future_date(2))
        .build()
        .await?;
    let restriction =
        crate::factory::room_restriction::create_reservation_restriction(db, &reservation).await?;

    Ok((room, reservation, restriction))
}
