pub use super::reservation::Entity as Reservation;
pub use super::restriction::Entity as Restriction;
pub use super::room::Entity as Room;
pub use super::room_restriction::Entity as RoomRestriction;
pub use super::user::Entity as User;
