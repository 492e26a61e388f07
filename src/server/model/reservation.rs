//! Reservation and room restriction domain models.
//!
//! A reservation occupies its room for the nights in `[start_date, end_date)`;
//! the checkout day is free for the next guest. Every reservation has a room
//! restriction with the same dates. Owner blocks are room restrictions without
//! a reservation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::room::Room;

/// Kind of room restriction, matching the rows seeded by the migrations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestrictionKind {
    /// The room is taken by a guest reservation.
    Reservation,
    /// The owner blocked the room.
    OwnerBlock,
}

impl RestrictionKind {
    /// Database id of the seeded restriction row.
    pub fn id(self) -> i32 {
        match self {
            Self::Reservation => 1,
            Self::OwnerBlock => 2,
        }
    }
}

/// A guest reservation.
///
/// Also carried in the session between the steps of the booking flow, where a
/// partially filled reservation (dates only, then dates and room) is normal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub room_id: i32,
    pub room: Room,
    pub processed: bool,
}

impl Reservation {
    /// Starts a reservation in the session from a searched date range.
    pub fn for_dates(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            start_date,
            end_date,
            ..Default::default()
        }
    }

    /// Converts entity models to a reservation domain model.
    ///
    /// # Arguments
    /// - `entity` - Reservation row
    /// - `room` - Related room row, if it was loaded
    pub fn from_entity(entity: entity::reservation::Model, room: Option<entity::room::Model>) -> Self {
        Self {
            id: entity.id,
            first_name: entity.first_name,
            last_name: entity.last_name,
            email: entity.email,
            phone: entity.phone,
            start_date: entity.start_date,
            end_date: entity.end_date,
            room_id: entity.room_id,
            room: room.map(Room::from_entity).unwrap_or_default(),
            processed: entity.processed,
        }
    }
}

/// Parameters for inserting a reservation.
#[derive(Debug, Clone)]
pub struct NewReservationParam {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub room_id: i32,
}

/// Parameters for the admin edit form.
#[derive(Debug, Clone)]
pub struct UpdateReservationParam {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
}

/// A room restriction row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomRestriction {
    pub id: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub room_id: i32,
    pub reservation_id: Option<i32>,
    pub restriction_id: i32,
}

impl RoomRestriction {
    pub fn from_entity(entity: entity::room_restriction::Model) -> Self {
        Self {
            id: entity.id,
            start_date: entity.start_date,
            end_date: entity.end_date,
            room_id: entity.room_id,
            reservation_id: entity.reservation_id,
            restriction_id: entity.restriction_id,
        }
    }

    /// Whether this restriction is an owner block rather than a reservation.
    pub fn is_block(&self) -> bool {
        self.reservation_id.is_none()
    }
}

/// Parameters for inserting a room restriction.
#[derive(Debug, Clone)]
pub struct NewRoomRestrictionParam {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub room_id: i32,
    pub reservation_id: Option<i32>,
    pub kind: RestrictionKind,
}

/// Where an admin reservation page was opened from, used to route back after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReservationSource {
    New,
    All,
    Cal,
}

impl ReservationSource {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::New => "new",
            Self::All => "all",
            Self::Cal => "cal",
        }
    }
}
