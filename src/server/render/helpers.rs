//! Formatting helpers used by the pages.

use chrono::NaiveDate;

use crate::server::util::parse::DATE_FORMAT;

/// Formats a date as `YYYY-MM-DD`.
pub fn human_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Formats a date with a `chrono` format string.
pub fn format_date(date: NaiveDate, format: &str) -> String {
    date.format(format).to_string()
}

/// `0..count`, for rendering a fixed number of cells.
pub fn iterate(count: i32) -> impl Iterator<Item = i32> {
    0..count.max(0)
}

pub fn add(a: i32, b: i32) -> i32 {
    a + b
}
