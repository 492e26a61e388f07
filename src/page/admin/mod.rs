mod calendar;
mod dashboard;
mod reservations;

pub use calendar::AdminCalendar;
pub use dashboard::AdminDashboard;
pub use reservations::{ReservationList, ShowReservation};
