//! Business logic between the controllers and the data layer.

pub mod auth;
pub mod availability;
pub mod calendar;
pub mod mail;
pub mod reservation;
