//! Types shared across the HTTP boundary.

pub mod api;
