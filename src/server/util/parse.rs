use chrono::NaiveDate;

/// Date format used by every date input and query parameter.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a `YYYY-MM-DD` date from a form or query value.
///
/// # Returns
/// - `Some(NaiveDate)` - The parsed date
/// - `None` - Blank or malformed value
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
}

/// Parses a database id from a form or query value; ids are positive.
pub fn parse_id(value: &str) -> Option<i32> {
    value.trim().parse::<i32>().ok().filter(|id| *id > 0)
}
