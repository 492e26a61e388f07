//! Reservation data repository for database operations.
//!
//! Provides `ReservationRepository` for the booking flow and the admin pages. Reads
//! load the reservation's room alongside it; reservations are listed by arrival.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::reservation::{
    NewReservationParam, Reservation, UpdateReservationParam,
};

/// Repository providing database operations for reservations.
pub struct ReservationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ReservationRepository<'a, C> {
    /// Creates a new ReservationRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a reservation.
    ///
    /// Does not create the matching room restriction; the reservation service does
    /// both inside one transaction.
    ///
    /// # Returns
    /// - `Ok(Reservation)` - The created reservation with its new id (room not loaded)
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: NewReservationParam) -> Result<Reservation, DbErr> {
        let now = Utc::now();
        let entity = entity::reservation::ActiveModel {
            first_name: ActiveValue::Set(param.first_name),
            last_name: ActiveValue::Set(param.last_name),
            email: ActiveValue::Set(param.email),
            phone: ActiveValue::Set(param.phone),
            start_date: ActiveValue::Set(param.start_date),
            end_date: ActiveValue::Set(param.end_date),
            room_id: ActiveValue::Set(param.room_id),
            processed: ActiveValue::Set(false),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Reservation::from_entity(entity, None))
    }

    /// Finds a reservation by id, including its room.
    ///
    /// # Returns
    /// - `Ok(Some(Reservation))` - Reservation found
    /// - `Ok(None)` - No reservation with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Reservation>, DbErr> {
        let result = entity::prelude::Reservation::find_by_id(id)
            .find_also_related(entity::prelude::Room)
            .one(self.db)
            .await?;

        Ok(result.map(|(reservation, room)| Reservation::from_entity(reservation, room)))
    }

    /// Gets every reservation, earliest arrival first.
    pub async fn get_all(&self) -> Result<Vec<Reservation>, DbErr> {
        self.list(false).await
    }

    /// Gets reservations not yet marked as processed, earliest arrival first.
    pub async fn get_all_new(&self) -> Result<Vec<Reservation>, DbErr> {
        self.list(true).await
    }

    async fn list(&self, only_new: bool) -> Result<Vec<Reservation>, DbErr> {
        let mut query = entity::prelude::Reservation::find()
            .find_also_related(entity::prelude::Room)
            .order_by_asc(entity::reservation::Column::StartDate)
            .order_by_asc(entity::reservation::Column::Id);

        if only_new {
            query = query.filter(entity::reservation::Column::Processed.eq(false));
        }

        let results = query.all(self.db).await?;

        Ok(results
            .into_iter()
            .map(|(reservation, room)| Reservation::from_entity(reservation, room))
            .collect())
    }

    /// Updates the guest's contact details and `updated_at`.
    ///
    /// Updating a missing reservation is a no-op.
    pub async fn update(&self, param: UpdateReservationParam) -> Result<(), DbErr> {
        entity::prelude::Reservation::update_many()
            .filter(entity::reservation::Column::Id.eq(param.id))
            .col_expr(
                entity::reservation::Column::FirstName,
                Expr::value(param.first_name),
            )
            .col_expr(
                entity::reservation::Column::LastName,
                Expr::value(param.last_name),
            )
            .col_expr(entity::reservation::Column::Email, Expr::value(param.email))
            .col_expr(entity::reservation::Column::Phone, Expr::value(param.phone))
            .col_expr(
                entity::reservation::Column::UpdatedAt,
                Expr::value(Utc::now()),
            )
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Sets the processed flag.
    pub async fn set_processed(&self, id: i32, processed: bool) -> Result<(), DbErr> {
        entity::prelude::Reservation::update_many()
            .filter(entity::reservation::Column::Id.eq(id))
            .col_expr(
                entity::reservation::Column::Processed,
                Expr::value(processed),
            )
            .col_expr(
                entity::reservation::Column::UpdatedAt,
                Expr::value(Utc::now()),
            )
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Deletes a reservation and the room restrictions it holds.
    ///
    /// Restrictions go first so no row references the reservation when it is deleted.
    ///
    /// # Returns
    /// - `Ok(true)` - Reservation deleted
    /// - `Ok(false)` - No reservation with that id
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        entity::prelude::RoomRestriction::delete_many()
            .filter(entity::room_restriction::Column::ReservationId.eq(id))
            .exec(self.db)
            .await?;

        let result = entity::prelude::Reservation::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
