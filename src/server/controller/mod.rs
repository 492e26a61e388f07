//! HTTP request handlers.
//!
//! Handlers read the session and call services, then either render a page or
//! redirect. Messages for the next page go through `FlashSession`.

pub mod admin;
pub mod auth;
pub mod availability;
pub mod calendar;
pub mod page;
pub mod reservation;

#[cfg(test)]
mod test;
