//! Test fixtures providing reusable test data without database insertion.
//!
//! Unlike factories, fixtures do NOT insert data into the database. Use them to test
//! entity-to-domain conversion and page rendering without a connection.

pub mod reservation;
pub mod room;

pub use reservation::entity as reservation_entity;
pub use room::entity as room_entity;
