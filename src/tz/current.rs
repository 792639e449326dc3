//! # Current-Time Snapshots
//!
//! Builds the display-ready view of "what time is it in this zone":
//! formatted time and date strings, the offset label, DST state and the
//! next transition on record.
//!
//! The provider leans on three ports. The [`OffsetResolver`] answers the
//! zone questions, the [`Clock`] supplies "now" so tests can freeze it,
//! and the [`TimeFormatter`] owns how the strings read.

use std::sync::Arc;

use chrono::NaiveDateTime;

use crate::error::TzError;
use crate::format::TimeFormatter;
use crate::time::Clock;

use super::instant::Instant;
use super::resolver::OffsetResolver;
use super::zone_id::ZoneId;

/// Display-ready snapshot of one zone at one instant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurrentTimeInfo {
    /// The zone described.
    pub zone: ZoneId,
    /// The instant the snapshot was taken for.
    pub instant: Instant,
    /// The instant on the zone's clocks.
    pub local: NaiveDateTime,
    /// Formatted time of day, e.g. `03:30:00 PM`.
    pub formatted_time: String,
    /// Formatted calendar date, e.g. `Sunday, March 10, 2024`.
    pub formatted_date: String,
    /// Offset label, e.g. `UTC-04:00`.
    pub utc_offset: String,
    /// Whether daylight saving is active.
    pub dst_active: bool,
    /// Zone abbreviation, e.g. `EDT`.
    pub abbreviation: String,
    /// When the next offset regime takes effect, if one is on record.
    pub next_transition: Option<Instant>,
}

/// Produces [`CurrentTimeInfo`] snapshots.
#[derive(Clone)]
pub struct CurrentTimeInfoProvider {
    resolver: OffsetResolver,
    clock: Arc<dyn Clock>,
    formatter: Arc<dyn TimeFormatter>,
}

impl CurrentTimeInfoProvider {
    /// Builds a provider over the given ports.
    pub fn new(
        resolver: OffsetResolver,
        clock: Arc<dyn Clock>,
        formatter: Arc<dyn TimeFormatter>,
    ) -> Self {
        Self {
            resolver,
            clock,
            formatter,
        }
    }

    /// Snapshot of `zone` at the clock's current instant.
    ///
    /// # Errors
    /// Returns [`TzError::UnknownZone`] when the store does not know the
    /// zone.
    pub fn now_in(&self, zone: &ZoneId) -> Result<CurrentTimeInfo, TzError> {
        self.at(zone, self.clock.now())
    }

    /// Snapshot of `zone` at an explicit instant.
    ///
    /// # Errors
    /// Returns [`TzError::UnknownZone`] when the store does not know the
    /// zone and [`TzError::InvalidInstant`] when the instant cannot be
    /// rendered on a calendar.
    pub fn at(&self, zone: &ZoneId, at: Instant) -> Result<CurrentTimeInfo, TzError> {
        let offset = self.resolver.resolve(zone, at)?;
        let local = at.wall_clock_at(offset.utc_offset_minutes)?;
        let next_transition = self
            .resolver
            .next_transition(zone, at)?
            .map(|rule| rule.effective_from);

        Ok(CurrentTimeInfo {
            zone: zone.clone(),
            instant: at,
            local,
            formatted_time: self.formatter.format_time(local),
            formatted_date: self.formatter.format_date(local),
            utc_offset: offset.utc_label(),
            dst_active: offset.is_dst,
            abbreviation: offset.abbreviation,
            next_transition,
        })
    }
}
