//! Factory methods for creating test data.
//!
//! Each entity has a `Factory` builder for customization and a `create_*` convenience
//! function for quick default creation. Factories insert rows; see `fixture` for
//! in-memory models.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let room = factory::room::create_room(&db).await?;
//! let reservation = factory::reservation::ReservationFactory::new(&db, room.id)
//!     .dates(start, end)
//!     .build()
//!     .await?;
//!
//! // Reservation plus its room restriction in one call
//! let (room, reservation, restriction) =
//!     factory::helpers::create_reservation_with_dependencies(&db).await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Users with bcrypt-hashed passwords
//! - `room` - Rooms
//! - `restriction` - The two fixed restriction rows
//! - `reservation` - Reservations
//! - `room_restriction` - Reservation restrictions and owner blocks
//! - `helpers` - Unique ids and entities created with their dependencies

pub mod helpers;
pub mod reservation;
pub mod restriction;
pub mod room;
pub mod room_restriction;
pub mod user;

pub use reservation::create_reservation;
pub use room::create_room;
pub use room_restriction::{create_block, create_reservation_restriction};
pub use user::create_user;
