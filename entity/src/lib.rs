//! SeaORM entity models for the reservation database.

pub mod prelude;

pub mod reservation;
pub mod restriction;
pub mod room;
pub mod room_restriction;
pub mod user;
