//! Mapping the current time onto a puzzle day

use crate::error::CalendarError;
use chrono::{DateTime, Datelike, TimeDelta, TimeZone};

/// The year of the event the solvers belong to
pub const EVENT_YEAR: i32 = 2023;

/// Puzzles unlock at midnight UTC-5
pub const UNLOCK_UTC_OFFSET_HOURS: i64 = -5;

/// Last day of the event
pub const LAST_DAY: u32 = 25;

/// The puzzle day that `now` falls on
///
/// Any December 1-25 of [`EVENT_YEAR`] in the unlock time zone maps to that
/// day of the month. Every other date is outside the event.
///
/// ```
/// use aoc_harness::calendar::puzzle_day;
/// use chrono::{TimeZone, Utc};
///
/// let now = Utc.with_ymd_and_hms(2023, 12, 7, 12, 0, 0).unwrap();
/// assert_eq!(puzzle_day(&now).unwrap(), 7);
/// ```
pub fn puzzle_day<Tz: TimeZone>(now: &DateTime<Tz>) -> Result<u8, CalendarError> {
    let date = (now.naive_utc() + TimeDelta::hours(UNLOCK_UTC_OFFSET_HOURS)).date();

    if date.year() == EVENT_YEAR && date.month() == 12 && (1..=LAST_DAY).contains(&date.day()) {
        Ok(date.day() as u8)
    } else {
        Err(CalendarError::OutsideEvent { date })
    }
}
