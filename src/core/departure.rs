//! Departure-time pinning.
//!
//! Every request departs at 13:00 local time on the current date, so repeated
//! checks within a day hit comparable traffic conditions.

use chrono::{DateTime, Local};

use crate::config;

/// Unix seconds for 13:00:00 local time today.
pub fn departure_time_today() -> i64 {
    pinned_departure(Local::now())
}

fn pinned_departure(now: DateTime<Local>) -> i64 {
    let wall_clock = now
        .date_naive()
        .and_hms_opt(config::DEPARTURE_HOUR, 0, 0)
        .unwrap_or_else(|| now.naive_local());
    // A DST transition can make the pinned wall-clock time ambiguous or
    // nonexistent; take the earliest mapping, or fall back to now.
    wall_clock
        .and_local_timezone(Local)
        .earliest()
        .map(|dt| dt.timestamp())
        .unwrap_or_else(|| now.timestamp())
}
