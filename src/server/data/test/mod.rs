mod reservation;
mod room;
mod room_restriction;
mod user;
