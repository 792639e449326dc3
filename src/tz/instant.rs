//! # Instant
//!
//! An absolute point on the UTC timeline, stored as signed milliseconds
//! since the Unix epoch.
//!
//! [`Instant`] is the currency of the whole engine: rule lookups, wall-clock
//! interpretation and conversions all operate on it. It carries no zone or
//! calendar information of its own; rendering into a wall-clock form always
//! goes through an explicit UTC offset.
//!
//! # Examples
//! ```rust
//! use zonetime_web::tz::Instant;
//!
//! let at = Instant::from_epoch_millis(1_710_052_200_000);
//! assert_eq!(at.epoch_millis(), 1_710_052_200_000);
//! assert_eq!(
//!     at.rfc3339_at(-240).unwrap(),
//!     "2024-03-10T02:30:00-04:00"
//! );
//! ```

use std::fmt;

use chrono::{DateTime, FixedOffset, NaiveDateTime, SecondsFormat, Utc};

use crate::error::TzError;

/// Milliseconds in one minute.
const MINUTE_MS: i64 = 60_000;

/// An absolute instant, as milliseconds since `1970-01-01T00:00:00Z`.
///
/// Ordering follows the timeline: an earlier instant compares less than a
/// later one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Instant(i64);

impl Instant {
    /// The earliest representable instant. Used as the anchor of the
    /// open-ended first rule in a zone timeline.
    pub const MIN: Instant = Instant(i64::MIN);

    /// Wraps a raw epoch-millisecond count.
    pub const fn from_epoch_millis(ms: i64) -> Self {
        Self(ms)
    }

    /// Returns the raw epoch-millisecond count.
    pub const fn epoch_millis(self) -> i64 {
        self.0
    }

    /// Captures a chrono UTC date-time as an [`Instant`].
    pub fn from_utc(at: DateTime<Utc>) -> Self {
        Self(at.timestamp_millis())
    }

    /// Parses a decimal epoch-millisecond string.
    ///
    /// # Errors
    /// Returns [`TzError::InvalidInstant`] when the string is not a valid
    /// signed 64-bit integer.
    pub fn parse_epoch_millis(value: &str) -> Result<Self, TzError> {
        value
            .trim()
            .parse::<i64>()
            .map(Self)
            .map_err(|_| TzError::invalid_instant(value))
    }

    /// Adds a millisecond delta, returning `None` on overflow.
    pub fn checked_add_millis(self, delta: i64) -> Option<Self> {
        self.0.checked_add(delta).map(Self)
    }

    /// Converts to a chrono UTC date-time.
    ///
    /// # Errors
    /// Returns [`TzError::InvalidInstant`] when the instant lies outside the
    /// range chrono can represent on a calendar.
    pub fn to_utc(self) -> Result<DateTime<Utc>, TzError> {
        DateTime::<Utc>::from_timestamp_millis(self.0)
            .ok_or_else(|| TzError::invalid_instant(self.to_string()))
    }

    /// Renders this instant as the wall-clock date-time observed at the
    /// given UTC offset.
    ///
    /// The result is a plain calendar value with the offset already applied;
    /// it is *not* a UTC time.
    ///
    /// # Errors
    /// Returns [`TzError::InvalidInstant`] when the shifted value falls
    /// outside the representable calendar range.
    pub fn wall_clock_at(self, offset_minutes: i32) -> Result<NaiveDateTime, TzError> {
        let shifted = self
            .0
            .checked_add(i64::from(offset_minutes) * MINUTE_MS)
            .ok_or_else(|| TzError::invalid_instant(self.to_string()))?;
        DateTime::<Utc>::from_timestamp_millis(shifted)
            .map(|at| at.naive_utc())
            .ok_or_else(|| TzError::invalid_instant(self.to_string()))
    }

    /// Renders this instant as an RFC 3339 string carrying the given UTC
    /// offset, e.g. `2024-03-10T02:30:00-05:00`.
    ///
    /// # Errors
    /// Returns [`TzError::InvalidInstant`] when the instant cannot be placed
    /// on a calendar or the offset is out of range for chrono.
    pub fn rfc3339_at(self, offset_minutes: i32) -> Result<String, TzError> {
        let offset = FixedOffset::east_opt(offset_minutes * 60)
            .ok_or_else(|| TzError::invalid_instant(self.to_string()))?;
        let utc = self.to_utc()?;
        Ok(utc
            .with_timezone(&offset)
            .to_rfc3339_opts(SecondsFormat::Secs, false))
    }
}

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<DateTime<Utc>> for Instant {
    fn from(at: DateTime<Utc>) -> Self {
        Self::from_utc(at)
    }
}
