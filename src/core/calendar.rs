//! Runedate Calendar
//!
//! Integer time arithmetic shared by every rotation. All divisions floor
//! toward negative infinity, so instants before an epoch keep the same
//! phase as instants after it.

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{AlmanacError, AlmanacResult};

/// Milliseconds in one hour.
pub const MS_PER_HOUR: i64 = 3_600_000;

/// Milliseconds in one day.
pub const MS_PER_DAY: i64 = 86_400_000;

/// Hours in one week.
pub const HOURS_PER_WEEK: i64 = 168;

/// Runedate zero: 2002-02-27 00:00:00 UTC.
pub const RUNEDATE_EPOCH: Timestamp = Timestamp(1_014_768_000_000);

/// The Unix epoch fell on a Thursday; hour-of-week counts from Monday 00:00.
const UNIX_EPOCH_HOUR_OF_WEEK: i64 = 3 * 24;

/// An instant in Unix milliseconds, UTC.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(i64);

impl Timestamp {
    /// Wrap raw Unix milliseconds.
    #[inline]
    pub const fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    /// Raw Unix milliseconds.
    #[inline]
    pub const fn as_millis(self) -> i64 {
        self.0
    }

    /// The current wall-clock instant.
    ///
    /// Only entry points at the edge of the crate should call this; the
    /// resolvers take an explicit timestamp.
    pub fn now() -> Self {
        Self::from_datetime(Utc::now())
    }

    /// Convert from a chrono UTC datetime.
    pub fn from_datetime(datetime: DateTime<Utc>) -> Self {
        Self(datetime.timestamp_millis())
    }

    /// Build a UTC instant from calendar fields.
    pub fn from_ymd_hms(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> AlmanacResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|date| date.and_hms_opt(hour, minute, second))
            .map(|naive| Self::from_datetime(naive.and_utc()))
            .ok_or_else(|| {
                AlmanacError::InvalidTimestamp(format!(
                    "{year:04}-{month:02}-{day:02} {hour:02}:{minute:02}:{second:02}"
                ))
            })
    }

    /// Parse an RFC 3339 string such as `2024-02-05T07:00:00Z`.
    pub fn parse_rfc3339(input: &str) -> AlmanacResult<Self> {
        DateTime::parse_from_rfc3339(input)
            .map(|parsed| Self::from_datetime(parsed.with_timezone(&Utc)))
            .map_err(|e| AlmanacError::InvalidTimestamp(format!("{input}: {e}")))
    }

    /// Convert to a chrono UTC datetime.
    pub fn to_datetime(self) -> AlmanacResult<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.0)
            .ok_or_else(|| AlmanacError::InvalidTimestamp(format!("{} ms is out of range", self.0)))
    }

    /// Offset by whole days.
    pub fn checked_add_days(self, days: i64) -> AlmanacResult<Self> {
        self.checked_add_scaled(days, MS_PER_DAY)
    }

    /// Offset by whole hours.
    pub fn checked_add_hours(self, hours: i64) -> AlmanacResult<Self> {
        self.checked_add_scaled(hours, MS_PER_HOUR)
    }

    fn checked_add_scaled(self, count: i64, unit_ms: i64) -> AlmanacResult<Self> {
        let overflow = AlmanacError::TimestampOverflow {
            millis: self.0,
            delta_ms: count.saturating_mul(unit_ms),
        };
        count
            .checked_mul(unit_ms)
            .and_then(|delta| self.0.checked_add(delta))
            .map(Self)
            .ok_or(overflow)
    }

    /// Truncate to the start of the containing UTC hour.
    #[inline]
    pub const fn floor_hour(self) -> Self {
        Self(self.0.saturating_sub(self.0.rem_euclid(MS_PER_HOUR)))
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(datetime: DateTime<Utc>) -> Self {
        Self::from_datetime(datetime)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_datetime() {
            Ok(datetime) => write!(f, "{}", datetime.format("%Y-%m-%dT%H:%M:%SZ")),
            Err(_) => write!(f, "{}ms", self.0),
        }
    }
}

/// Day count since [`RUNEDATE_EPOCH`]. Negative before 2002-02-27.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuneDate(pub i64);

impl RuneDate {
    /// Raw day count.
    #[inline]
    pub const fn value(self) -> i64 {
        self.0
    }

    /// The following day. Saturates at `i64::MAX`.
    #[inline]
    pub const fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// First millisecond of this runedate.
    #[inline]
    pub const fn start(self) -> Timestamp {
        Timestamp(RUNEDATE_EPOCH.0.saturating_add(self.0.saturating_mul(MS_PER_DAY)))
    }
}

impl fmt::Display for RuneDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// A weekly recurring instant: a UTC weekday and hour.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WeeklyAnchor {
    /// Day of the week.
    pub weekday: Weekday,
    /// Hour of the day, 0-23.
    pub hour: u32,
}

impl WeeklyAnchor {
    /// Hours from Monday 00:00 to this anchor.
    #[inline]
    pub fn hour_of_week(&self) -> i64 {
        i64::from(self.weekday.num_days_from_monday()) * 24 + i64::from(self.hour % 24)
    }
}

/// Runedate containing `timestamp`.
#[inline]
pub fn runedate(timestamp: Timestamp) -> RuneDate {
    RuneDate(elapsed_days(timestamp, RUNEDATE_EPOCH))
}

/// `days` consecutive runedates starting at `first`.
///
/// The iterator only promises one item in its size hint, so collecting a
/// long horizon grows the buffer as it goes instead of reserving it all.
pub fn runedates(first: RuneDate, days: u32) -> impl Iterator<Item = RuneDate> {
    std::iter::successors(Some(first), |day| Some(day.next())).take(days as usize)
}

/// Runedate of `now` shifted by `offset_days`.
///
/// Agrees with [`runedate`] applied to the shifted instant.
pub fn runedate_with_offset(now: Timestamp, offset_days: i64) -> AlmanacResult<RuneDate> {
    now.checked_add_days(offset_days).map(runedate)
}

/// Runedate of the wall clock shifted by `offset_days`.
pub fn current_runedate(offset_days: i64) -> AlmanacResult<RuneDate> {
    runedate_with_offset(Timestamp::now(), offset_days)
}

/// Whole hours from `epoch` to `timestamp`, floored.
#[inline]
pub fn elapsed_hours(timestamp: Timestamp, epoch: Timestamp) -> i64 {
    elapsed(timestamp, epoch, MS_PER_HOUR)
}

/// Whole days from `epoch` to `timestamp`, floored.
#[inline]
pub fn elapsed_days(timestamp: Timestamp, epoch: Timestamp) -> i64 {
    elapsed(timestamp, epoch, MS_PER_DAY)
}

#[inline]
fn elapsed(timestamp: Timestamp, epoch: Timestamp, unit_ms: i64) -> i64 {
    // i128 keeps the difference exact across the full i64 range.
    let delta = i128::from(timestamp.0) - i128::from(epoch.0);
    delta.div_euclid(i128::from(unit_ms)) as i64
}

/// UTC hour of the day, 0-23.
#[inline]
pub fn hour_of_day(timestamp: Timestamp) -> i64 {
    timestamp.0.div_euclid(MS_PER_HOUR).rem_euclid(24)
}

/// Whole hours since the most recent `anchor` at or before `timestamp`.
///
/// Always in `0..168`.
#[inline]
pub fn hours_since_weekly_anchor(timestamp: Timestamp, anchor: WeeklyAnchor) -> i64 {
    let hour_of_week = (timestamp.0.div_euclid(MS_PER_HOUR) + UNIX_EPOCH_HOUR_OF_WEEK).rem_euclid(HOURS_PER_WEEK);
    (hour_of_week - anchor.hour_of_week()).rem_euclid(HOURS_PER_WEEK)
}

// =============================================================================
// TESTS
// =============================================================================
