//! # Wall-Clock Interpretation
//!
//! Maps a zone-less calendar date-time ("March 10, 2024, 02:30") plus a
//! zone onto the UTC timeline. Around daylight-saving transitions that
//! mapping is not one-to-one: a spring-forward skips an hour of wall-clock
//! readings and a fall-back repeats one.
//!
//! The interpreter never fails on such readings. It classifies every input
//! as [`Unique`](Interpretation::Unique), [`Gap`](Interpretation::Gap) or
//! [`Overlap`](Interpretation::Overlap), reports the candidate instants,
//! and nominates a canonical one so callers that just want "a" result can
//! proceed:
//!
//! - a gapped reading maps to the instant after the clocks jumped, so
//!   02:30 during the New York spring-forward renders as 03:30 EDT;
//! - an overlapped reading maps to its first occurrence, the one under the
//!   pre-transition offset.

use chrono::NaiveDateTime;

use crate::error::TzError;

use super::instant::Instant;
use super::resolver::{OffsetInfo, OffsetResolver};
use super::zone_id::ZoneId;

/// One day in milliseconds; the probe distance around a wall-clock reading.
/// No tz-database zone changes regime twice within this span.
const DAY_MS: i64 = 86_400_000;

/// Accepted layouts for wall-clock input, tried in order.
const LOCAL_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// How a wall-clock reading relates to the zone's timeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LocalTimeKind {
    /// Exactly one instant shows this reading.
    Unique,
    /// No instant shows this reading; clocks jumped over it.
    Gap,
    /// Two instants show this reading; clocks repeated it.
    Overlap,
}

impl LocalTimeKind {
    /// Lower-case wire form of the kind.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unique => "unique",
            Self::Gap => "gap",
            Self::Overlap => "overlap",
        }
    }
}

impl std::fmt::Display for LocalTimeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of interpreting a wall-clock reading in a zone.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Interpretation {
    /// The reading exists exactly once.
    Unique(Instant),
    /// The reading was skipped. `before` is the candidate on the
    /// pre-transition side of the jump, `after` the one past it.
    Gap { before: Instant, after: Instant },
    /// The reading occurs twice. `earlier` is the occurrence under the
    /// pre-transition offset.
    Overlap { earlier: Instant, later: Instant },
}

impl Interpretation {
    /// The nominated instant: gaps resolve past the jump, overlaps to the
    /// first occurrence.
    pub fn canonical(&self) -> Instant {
        match *self {
            Self::Unique(at) => at,
            Self::Gap { after, .. } => after,
            Self::Overlap { earlier, .. } => earlier,
        }
    }

    /// The non-canonical candidate, when the reading was ambiguous.
    pub fn alternative(&self) -> Option<Instant> {
        match *self {
            Self::Unique(_) => None,
            Self::Gap { before, .. } => Some(before),
            Self::Overlap { later, .. } => Some(later),
        }
    }

    /// Classification of the reading.
    pub fn kind(&self) -> LocalTimeKind {
        match self {
            Self::Unique(_) => LocalTimeKind::Unique,
            Self::Gap { .. } => LocalTimeKind::Gap,
            Self::Overlap { .. } => LocalTimeKind::Overlap,
        }
    }

    /// Returns `true` for readings untouched by any transition.
    pub fn is_unique(&self) -> bool {
        matches!(self, Self::Unique(_))
    }
}

/// Interprets wall-clock readings against a zone's rule timeline.
#[derive(Clone)]
pub struct WallClockInterpreter {
    resolver: OffsetResolver,
}

impl WallClockInterpreter {
    /// Builds an interpreter over the given resolver.
    pub fn new(resolver: OffsetResolver) -> Self {
        Self { resolver }
    }

    /// Interprets `local` as a reading on `zone`'s clocks.
    ///
    /// The candidate instants are found by applying the offsets in effect a
    /// day before and a day after the reading, then checking which
    /// candidates actually render back to it.
    ///
    /// # Errors
    /// Returns [`TzError::UnknownZone`] when the store does not know the
    /// zone.
    pub fn interpret(
        &self,
        zone: &ZoneId,
        local: NaiveDateTime,
    ) -> Result<Interpretation, TzError> {
        let nominal = local.and_utc().timestamp_millis();

        let offset_before = self
            .resolver
            .resolve(zone, Instant::from_epoch_millis(nominal - DAY_MS))?;
        let offset_after = self
            .resolver
            .resolve(zone, Instant::from_epoch_millis(nominal + DAY_MS))?;

        let candidate =
            |offset: &OffsetInfo| Instant::from_epoch_millis(nominal - offset.offset_millis());
        let c_before = candidate(&offset_before);
        if offset_before.utc_offset_minutes == offset_after.utc_offset_minutes {
            return Ok(Interpretation::Unique(c_before));
        }
        let c_after = candidate(&offset_after);

        let holds_before = self.resolver.resolve(zone, c_before)?.utc_offset_minutes
            == offset_before.utc_offset_minutes;
        let holds_after = self.resolver.resolve(zone, c_after)?.utc_offset_minutes
            == offset_after.utc_offset_minutes;

        Ok(match (holds_before, holds_after) {
            (true, true) => Interpretation::Overlap {
                earlier: c_before.min(c_after),
                later: c_before.max(c_after),
            },
            (true, false) => Interpretation::Unique(c_before),
            (false, true) => Interpretation::Unique(c_after),
            (false, false) => Interpretation::Gap {
                before: c_before.min(c_after),
                after: c_before.max(c_after),
            },
        })
    }
}

/// Parses a wall-clock date-time such as `2024-03-10T02:30` or
/// `2024-07-01T10:20:30.250`.
///
/// # Errors
/// Returns [`TzError::InvalidInstant`] when no accepted layout matches.
pub fn parse_local_datetime(value: &str) -> Result<NaiveDateTime, TzError> {
    let trimmed = value.trim();
    LOCAL_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        .ok_or_else(|| TzError::invalid_instant(value))
}
