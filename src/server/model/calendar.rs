//! Admin reservation calendar models.
//!
//! The calendar shows one month. For each room it holds two maps keyed by day
//! (`YYYY-MM-D`): the reservation occupying each night and the owner block
//! starting on each day. A room's block map is kept in the session after a GET
//! and is the baseline the next POST is reconciled against.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{Datelike, Duration, Months, NaiveDate};

use super::{reservation::RoomRestriction, room::Room};
use crate::server::form::Form;

/// `chrono` format of calendar day keys; the day is not zero-padded.
pub const DAY_KEY_FORMAT: &str = "%Y-%m-%-d";

const ADD_BLOCK_PREFIX: &str = "add_block_";
const REMOVE_BLOCK_PREFIX: &str = "remove_block_";

/// Per-day ids keyed by `YYYY-MM-D`; `0` means nothing on that day.
pub type DayMap = BTreeMap<String, i32>;

pub fn day_key(date: NaiveDate) -> String {
    date.format(DAY_KEY_FORMAT).to_string()
}

/// Form field name of the checkbox that keeps an existing block.
pub fn remove_block_field(room_id: i32, day: &str) -> String {
    format!("{}{}_{}", REMOVE_BLOCK_PREFIX, room_id, day)
}

/// Form field name of the checkbox that adds a block.
pub fn add_block_field(room_id: i32, day: &str) -> String {
    format!("{}{}_{}", ADD_BLOCK_PREFIX, room_id, day)
}

/// A calendar month, from its first to its last day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarMonth {
    first: NaiveDate,
}

impl CalendarMonth {
    /// Returns `None` for an invalid month or out-of-range year.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|first| Self { first })
    }

    pub fn containing(date: NaiveDate) -> Self {
        Self {
            first: date.with_day(1).unwrap_or(date),
        }
    }

    /// Month requested through `y`/`m` query values, or the month of `today`
    /// when either is missing or invalid.
    pub fn from_query(year: Option<i32>, month: Option<u32>, today: NaiveDate) -> Self {
        match (year, month) {
            (Some(year), Some(month)) => {
                Self::new(year, month).unwrap_or_else(|| Self::containing(today))
            }
            _ => Self::containing(today),
        }
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first
    }

    pub fn last_day(&self) -> NaiveDate {
        self.next().first - Duration::days(1)
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    pub fn month(&self) -> u32 {
        self.first.month()
    }

    pub fn days_in_month(&self) -> u32 {
        self.last_day().day()
    }

    pub fn next(&self) -> Self {
        Self {
            first: self
                .first
                .checked_add_months(Months::new(1))
                .unwrap_or(self.first),
        }
    }

    pub fn previous(&self) -> Self {
        Self {
            first: self
                .first
                .checked_sub_months(Months::new(1))
                .unwrap_or(self.first),
        }
    }

    /// Every day of the month in order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let first = self.first;
        (0..self.days_in_month()).map(move |offset| first + Duration::days(offset as i64))
    }

    /// Whether a `YYYY-MM-D` day key names a day of this month.
    pub fn contains_key(&self, day: &str) -> bool {
        NaiveDate::parse_from_str(day, "%Y-%m-%d")
            .is_ok_and(|date| date >= self.first && date <= self.last_day())
    }

    /// Zero-padded month number, as used in calendar links.
    pub fn padded_month(&self) -> String {
        format!("{:02}", self.month())
    }
}

/// One room's row in the calendar.
#[derive(Debug, Clone, PartialEq)]
pub struct RoomCalendar {
    pub room: Room,
    /// Reservation id for each night covered by a reservation.
    pub reservations: DayMap,
    /// Restriction id of the owner block starting on each day.
    pub blocks: DayMap,
}

impl RoomCalendar {
    /// Builds the room's maps for `month` from the restrictions overlapping it.
    ///
    /// Every day of the month has an entry in both maps. Reservations mark the
    /// nights in `[start_date, end_date)` clamped to the month. Blocks mark only
    /// their start day.
    pub fn build(room: Room, month: &CalendarMonth, restrictions: &[RoomRestriction]) -> Self {
        let mut reservations: DayMap = month.days().map(|day| (day_key(day), 0)).collect();
        let mut blocks = reservations.clone();

        for restriction in restrictions {
            match restriction.reservation_id {
                Some(reservation_id) => {
                    let from = restriction.start_date.max(month.first_day());
                    let until = restriction.end_date.min(month.next().first_day());

                    let mut day = from;
                    while day < until {
                        reservations.insert(day_key(day), reservation_id);
                        day += Duration::days(1);
                    }
                }
                None => {
                    let key = day_key(restriction.start_date);
                    if let Some(entry) = blocks.get_mut(&key) {
                        *entry = restriction.id;
                    }
                }
            }
        }

        Self {
            room,
            reservations,
            blocks,
        }
    }
}

/// Month and rooms shown on the calendar page.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarView {
    pub month: CalendarMonth,
    pub rooms: Vec<RoomCalendar>,
}

/// Block deletions and insertions derived from a calendar form submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockChanges {
    /// Restriction ids of owner blocks to delete.
    pub remove: Vec<i32>,
    /// `(room_id, date)` pairs to block for one night.
    pub add: Vec<(i32, NaiveDate)>,
}

impl BlockChanges {
    /// Compares the session baselines against the posted checkboxes.
    ///
    /// A block in a room's baseline is removed when its day falls in `month` and
    /// its `remove_block_*` box was not posted. Without a posted month nothing is
    /// removed, so a baseline left from another month cannot delete blocks that
    /// were never shown. Every posted `add_block_{room}_{day}` adds a block, provided
    /// the room is one of `baselines` and the day parses. Other field names are
    /// ignored and duplicate additions collapse into one.
    ///
    /// # Arguments
    /// - `baselines` - Each room id with the block map shown to the admin
    /// - `form` - The posted calendar form
    /// - `month` - The month named by the form's `y` and `m` fields
    pub fn reconcile(
        baselines: &[(i32, DayMap)],
        form: &Form,
        month: Option<&CalendarMonth>,
    ) -> Self {
        let mut remove = Vec::new();
        for (room_id, blocks) in baselines {
            for (day, restriction_id) in blocks {
                let shown = month.is_some_and(|month| month.contains_key(day));
                if shown
                    && *restriction_id > 0
                    && !form.has(&remove_block_field(*room_id, day))
                {
                    remove.push(*restriction_id);
                }
            }
        }

        let rooms: BTreeSet<i32> = baselines.iter().map(|(room_id, _)| *room_id).collect();
        let mut seen = BTreeSet::new();
        let add = form
            .keys()
            .filter_map(parse_add_block_field)
            .filter(|(room_id, _)| rooms.contains(room_id))
            .filter(|pair| seen.insert(*pair))
            .collect();

        Self { remove, add }
    }

    pub fn is_empty(&self) -> bool {
        self.remove.is_empty() && self.add.is_empty()
    }
}

/// Splits `add_block_{room}_{YYYY-MM-D}` into its room id and date.
fn parse_add_block_field(field: &str) -> Option<(i32, NaiveDate)> {
    let rest = field.strip_prefix(ADD_BLOCK_PREFIX)?;
    let (room_id, day) = rest.split_once('_')?;
    let room_id = room_id.parse().ok()?;
    let date = NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()?;

    Some((room_id, date))
}
