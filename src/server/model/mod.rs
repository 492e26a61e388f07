//! Domain models and operation-specific parameter types.
//!
//! Models here are what services and pages work with. Entity models from the
//! `entity` crate are converted at the repository boundary via `from_entity`.

pub mod calendar;
pub mod mail;
pub mod reservation;
pub mod room;
pub mod user;
