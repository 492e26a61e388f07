//! Reservation factory for creating test reservation entities.

use crate::factory::helpers::{future_date, next_id};
use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test reservations with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let reservation = ReservationFactory::new(&db, room.id)
///     .first_name("Ada")
///     .dates(start, end)
///     .processed(true)
///     .build()
///     .await?;
/// ```
pub struct ReservationFactory<'a> {
    db: &'a DatabaseConnection,
    room_id: i32,
    first_name: String,
    last_name: String,
    email: String,
    phone: String,
    start_date: NaiveDate,
    end_date: NaiveDate,
    processed: bool,
}

impl<'a> ReservationFactory<'a> {
    /// Creates a new ReservationFactory with default values.
    ///
    /// Defaults:
    /// - dates: 2050-01-01 to 2050-01-02 (one night)
    /// - email: `"guest{id}@example.com"`
    /// - processed: `false`
    pub fn new(db: &'a DatabaseConnection, room_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            room_id,
            first_name: "Guest".to_string(),
            last_name: format!("Number {}", id),
            email: format!("guest{}@example.com", id),
            phone: "555-555-5555".to_string(),
            start_date: future_date(0),
            end_date: future_date(1),
            processed: false,
        }
    }

    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self
    }

    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = last_name.into();
        self
    }

    /// Sets the stay; `end_date` is the checkout day.
    pub fn dates(mut self, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        self.start_date = start_date;
        self.end_date = end_date;
        self
    }

    pub fn processed(mut self, processed: bool) -> Self {
        self.processed = processed;
        self
    }

    /// Builds and inserts the reservation entity into the database.
    ///
    /// Does not create the matching room restriction; use
    /// `room_restriction::create_reservation_restriction` for that.
    pub async fn build(self) -> Result<entity::reservation::Model, DbErr> {
        let now = Utc::now();
        entity::reservation::ActiveModel {
            first_name: ActiveValue::Set(self.first_name),
            last_name: ActiveValue::Set(self.last_name),
            email: ActiveValue::Set(self.email),
            phone: ActiveValue::Set(self.phone),
            start_date: ActiveValue::Set(self.start_date),
            end_date: ActiveValue::Set(self.end_date),
            room_id: ActiveValue::Set(self.room_id),
            processed: ActiveValue::Set(self.processed),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a reservation with default values in the given room.
pub async fn create_reservation(
    db: &DatabaseConnection,
    room_id: i32,
) -> Result<entity::reservation::Model, DbErr> {
    ReservationFactory::new(db, room_id).build().await
}
