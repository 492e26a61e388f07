//! Database repository layer for all domain entities.
//!
//! Repositories use SeaORM entity models internally and return domain models, keeping
//! the data layer separate from business logic. Each repository borrows any
//! `ConnectionTrait`, so the same code runs on the pool or inside a transaction.

pub mod reservation;
pub mod room;
pub mod room_restriction;
pub mod user;

#[cfg(test)]
mod test;
