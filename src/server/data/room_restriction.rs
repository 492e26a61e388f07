//! Room restriction data repository.
//!
//! Restrictions are what make a room unavailable. Two restrictions overlap when
//! `start_date < other.end_date AND end_date > other.start_date`, so a stay
//! ending on a given day never collides with one starting on it.

use chrono::{Duration, NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::{
    reservation::{NewRoomRestrictionParam, RestrictionKind, RoomRestriction},
    room::Room,
};

/// Repository providing database operations for room restrictions.
pub struct RoomRestrictionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RoomRestrictionRepository<'a, C> {
    /// Creates a new RoomRestrictionRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a room restriction.
    pub async fn create(&self, param: NewRoomRestrictionParam) -> Result<RoomRestriction, DbErr> {
        let now = Utc::now();
        let entity = entity::room_restriction::ActiveModel {
            start_date: ActiveValue::Set(param.start_date),
            end_date: ActiveValue::Set(param.end_date),
            room_id: ActiveValue::Set(param.room_id),
            reservation_id: ActiveValue::Set(param.reservation_id),
            restriction_id: ActiveValue::Set(param.kind.id()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(RoomRestriction::from_entity(entity))
    }

    /// Checks whether a room is free for the nights in `[start, end)`.
    ///
    /// # Returns
    /// - `Ok(true)` - No restriction on the room overlaps the range
    /// - `Ok(false)` - At least one restriction overlaps
    /// - `Err(DbErr)` - Database error during query
    pub async fn is_room_available(
        &self,
        room_id: i32,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<bool, DbErr> {
        let overlapping = entity::prelude::RoomRestriction::find()
            .filter(entity::room_restriction::Column::RoomId.eq(room_id))
            .filter(entity::room_restriction::Column::StartDate.lt(end))
            .filter(entity::room_restriction::Column::EndDate.gt(start))
            .count(self.db)
            .await?;

        Ok(overlapping == 0)
    }

    /// Gets rooms with no restriction overlapping `[start, end)`, ordered by name.
    pub async fn get_available_rooms(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Room>, DbErr> {
        let busy_room_ids: Vec<i32> = entity::prelude::RoomRestriction::find()
            .select_only()
            .column(entity::room_restriction::Column::RoomId)
            .filter(entity::room_restriction::Column::StartDate.lt(end))
            .filter(entity::room_restriction::Column::EndDate.gt(start))
            .distinct()
            .into_tuple()
            .all(self.db)
            .await?;

        let mut query =
            entity::prelude::Room::find().order_by_asc(entity::room::Column::RoomName);

        if !busy_room_ids.is_empty() {
            query = query.filter(entity::room::Column::Id.is_not_in(busy_room_ids));
        }

        let entities = query.all(self.db).await?;

        Ok(entities.into_iter().map(Room::from_entity).collect())
    }

    /// Gets a room's restrictions touching the days `first..=last`.
    ///
    /// Used by the calendar to build a month's reservation and block maps.
    pub async fn get_for_room_by_date(
        &self,
        room_id: i32,
        first: NaiveDate,
        last: NaiveDate,
    ) -> Result<Vec<RoomRestriction>, DbErr> {
        let entities = entity::prelude::RoomRestriction::find()
            .filter(entity::room_restriction::Column::RoomId.eq(room_id))
            .filter(entity::room_restriction::Column::StartDate.lte(last))
            .filter(entity::room_restriction::Column::EndDate.gt(first))
            .order_by_asc(entity::room_restriction::Column::StartDate)
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(RoomRestriction::from_entity)
            .collect())
    }

    /// Blocks a room for the night of `date`.
    pub async fn insert_block(
        &self,
        room_id: i32,
        date: NaiveDate,
    ) -> Result<RoomRestriction, DbErr> {
        self.create(NewRoomRestrictionParam {
            start_date: date,
            end_date: date + Duration::days(1),
            room_id,
            reservation_id: None,
            kind: RestrictionKind::OwnerBlock,
        })
        .await
    }

    /// Deletes an owner block. Restrictions held by a reservation are never touched.
    ///
    /// # Returns
    /// - `Ok(true)` - Block deleted
    /// - `Ok(false)` - No owner block with that id
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete_block(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::RoomRestriction::delete_many()
            .filter(entity::room_restriction::Column::Id.eq(id))
            .filter(entity::room_restriction::Column::ReservationId.is_null())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
