//! Periodic Occurrences
//!
//! Pure modulo cadences with no RNG involved.

use chrono::Weekday;

use crate::core::calendar::{
    elapsed_days, hour_of_day, hours_since_weekly_anchor, Timestamp, WeeklyAnchor, MS_PER_DAY,
};

/// Guthixian Cache full-reward cadence in hours, anchored at 00:00 UTC daily.
pub const GUTHIXIAN_CACHE_PERIOD_HOURS: i64 = 3;

/// First Prifddinas raven spawn: 2014-10-04 00:00 UTC.
pub const RAVEN_EPOCH: Timestamp = Timestamp::from_millis(1_412_380_800_000);

/// Days between raven spawns.
pub const RAVEN_PERIOD_DAYS: i64 = 13;

/// Wilderness Warbands weekly reset: Monday 02:00 UTC.
pub const WARBANDS_ANCHOR: WeeklyAnchor = WeeklyAnchor { weekday: Weekday::Mon, hour: 2 };

/// Hours between Warbands camps within a week.
pub const WARBANDS_PERIOD_HOURS: i64 = 7;

/// Whether a Guthixian Cache at `timestamp` is a full-reward one.
#[inline]
pub fn guthixian_cache(timestamp: Timestamp) -> bool {
    hour_of_day(timestamp) % GUTHIXIAN_CACHE_PERIOD_HOURS == 0
}

/// Whether the raven is spawned in Prifddinas at `timestamp`.
#[inline]
pub fn raven(timestamp: Timestamp) -> bool {
    elapsed_days(timestamp, RAVEN_EPOCH).rem_euclid(RAVEN_PERIOD_DAYS) == 0
}

/// Start of the first raven day on or after the day containing `from`.
pub fn next_raven(from: Timestamp) -> Timestamp {
    let days = elapsed_days(from, RAVEN_EPOCH);
    let wait = (RAVEN_PERIOD_DAYS - days.rem_euclid(RAVEN_PERIOD_DAYS)) % RAVEN_PERIOD_DAYS;
    let day = days.saturating_add(wait);
    Timestamp::from_millis(RAVEN_EPOCH.as_millis().saturating_add(day.saturating_mul(MS_PER_DAY)))
}

/// Whether a Wilderness Warbands camp is set up during the hour of `timestamp`.
#[inline]
pub fn wilderness_warbands(timestamp: Timestamp) -> bool {
    hours_since_weekly_anchor(timestamp, WARBANDS_ANCHOR) % WARBANDS_PERIOD_HOURS == 0
}
