//! # Conversion Engine
//!
//! Converts a moment between two zones by pivoting on the absolute instant:
//! resolve both zones at the same [`Instant`], then render each side with
//! its own offset. The two renderings can disagree about the date, never
//! about the moment.
//!
//! Wall-clock input goes through the
//! [`WallClockInterpreter`](super::interpret::WallClockInterpreter) first;
//! its canonical instant drives the conversion and its classification is
//! carried along, so callers can tell when a skipped or repeated reading
//! was nudged.

use chrono::NaiveDateTime;

use crate::error::TzError;

use super::instant::Instant;
use super::interpret::{LocalTimeKind, WallClockInterpreter};
use super::resolver::{OffsetInfo, OffsetResolver};
use super::zone_id::ZoneId;

/// How one zone renders the conversion instant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ZoneRendering {
    /// The zone doing the rendering.
    pub zone: ZoneId,
    /// Offset regime the zone observes at the instant.
    pub offset: OffsetInfo,
    /// The instant on that zone's clocks.
    pub local: NaiveDateTime,
}

/// A single instant rendered in a source and a target zone.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Conversion {
    /// The absolute instant both renderings describe.
    pub instant: Instant,
    /// Rendering in the zone the input was expressed in.
    pub source: ZoneRendering,
    /// Rendering in the zone converted to.
    pub target: ZoneRendering,
    /// Target offset minus source offset, in minutes.
    pub difference_minutes: i32,
    /// How the wall-clock input mapped onto the timeline. Always
    /// [`LocalTimeKind::Unique`] for instant input.
    pub local_time_kind: LocalTimeKind,
}

impl Conversion {
    /// RFC 3339 form of the instant in the source zone's offset.
    ///
    /// # Errors
    /// Returns [`TzError::InvalidInstant`] when the instant cannot be
    /// rendered on a calendar.
    pub fn source_iso(&self) -> Result<String, TzError> {
        self.instant
            .rfc3339_at(self.source.offset.utc_offset_minutes)
    }

    /// RFC 3339 form of the instant in the target zone's offset.
    ///
    /// # Errors
    /// Returns [`TzError::InvalidInstant`] when the instant cannot be
    /// rendered on a calendar.
    pub fn target_iso(&self) -> Result<String, TzError> {
        self.instant
            .rfc3339_at(self.target.offset.utc_offset_minutes)
    }
}

/// Converts moments between zones.
#[derive(Clone)]
pub struct ConversionEngine {
    resolver: OffsetResolver,
    interpreter: WallClockInterpreter,
}

impl ConversionEngine {
    /// Builds an engine over the given resolver.
    pub fn new(resolver: OffsetResolver) -> Self {
        let interpreter = WallClockInterpreter::new(resolver.clone());
        Self {
            resolver,
            interpreter,
        }
    }

    /// Converts the absolute instant `at` from `source` to `target`.
    ///
    /// # Errors
    /// Returns [`TzError::UnknownZone`] for an unresolvable zone and
    /// [`TzError::InvalidInstant`] when a rendering falls outside the
    /// calendar range.
    pub fn convert_at(
        &self,
        source: &ZoneId,
        target: &ZoneId,
        at: Instant,
    ) -> Result<Conversion, TzError> {
        self.render(source, target, at, LocalTimeKind::Unique)
    }

    /// Converts the wall-clock reading `local`, understood on `source`'s
    /// clocks, to `target`.
    ///
    /// Skipped or repeated readings convert via their canonical instant;
    /// the returned [`Conversion::local_time_kind`] says which case
    /// applied. The source rendering always shows the canonical instant,
    /// so a gapped input comes back adjusted rather than echoed.
    ///
    /// # Errors
    /// Returns [`TzError::UnknownZone`] for an unresolvable zone and
    /// [`TzError::InvalidInstant`] when a rendering falls outside the
    /// calendar range.
    pub fn convert_local(
        &self,
        source: &ZoneId,
        target: &ZoneId,
        local: NaiveDateTime,
    ) -> Result<Conversion, TzError> {
        let interpretation = self.interpreter.interpret(source, local)?;
        self.render(
            source,
            target,
            interpretation.canonical(),
            interpretation.kind(),
        )
    }

    fn render(
        &self,
        source: &ZoneId,
        target: &ZoneId,
        at: Instant,
        local_time_kind: LocalTimeKind,
    ) -> Result<Conversion, TzError> {
        let source_offset = self.resolver.resolve(source, at)?;
        let target_offset = self.resolver.resolve(target, at)?;
        let difference_minutes =
            target_offset.utc_offset_minutes - source_offset.utc_offset_minutes;

        let source_local = at.wall_clock_at(source_offset.utc_offset_minutes)?;
        let target_local = at.wall_clock_at(target_offset.utc_offset_minutes)?;

        Ok(Conversion {
            instant: at,
            source: ZoneRendering {
                zone: source.clone(),
                offset: source_offset,
                local: source_local,
            },
            target: ZoneRendering {
                zone: target.clone(),
                offset: target_offset,
                local: target_local,
            },
            difference_minutes,
            local_time_kind,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::tz::interpret::parse_local_datetime;
    use crate::tz::memory_store::MemoryRuleStore;
    use crate::tz::rules::{TransitionRule, ZoneTimeline};

    fn new_york_2024() -> ZoneTimeline {
        ZoneTimeline::new(vec![
            TransitionRule::new(Instant::MIN, -300, false, "EST"),
            TransitionRule::new(
                Instant::from_epoch_millis(1_710_054_000_000),
                -240,
                true,
                "EDT",
            ),
            TransitionRule::new(
                Instant::from_epoch_millis(1_730_613_600_000),
                -300,
                false,
                "EST",
            ),
        ])
        .unwrap()
    }

    fn fixed(offset: i32, abbr: &str) -> ZoneTimeline {
        ZoneTimeline::new(vec![TransitionRule::new(Instant::MIN, offset, false, abbr)]).unwrap()
    }

    fn engine() -> ConversionEngine {
        let store = MemoryRuleStore::new(vec![
            (zone("America/New_York"), new_york_2024()),
            (zone("Asia/Tokyo"), fixed(540, "JST")),
            (zone("Etc/UTC"), fixed(0, "UTC")),
        ]);
        ConversionEngine::new(OffsetResolver::new(Arc::new(store)))
    }

    fn zone(id: &str) -> ZoneId {
        ZoneId::new(id).unwrap()
    }

    fn local(value: &str) -> NaiveDateTime {
        parse_local_datetime(value).unwrap()
    }

    #[test]
    fn renders_both_zones_from_the_same_instant() {
        // 2024-06-15T16:00:00Z.
        let at = Instant::from_epoch_millis(1_718_467_200_000);
        let conv = engine()
            .convert_at(&zone("America/New_York"), &zone("Asia/Tokyo"), at)
            .unwrap();

        assert_eq!(conv.instant, at);
        assert_eq!(conv.source.local, local("2024-06-15T12:00"));
        assert_eq!(conv.source.offset.abbreviation, "EDT");
        // Tokyo is already past midnight.
        assert_eq!(conv.target.local, local("2024-06-16T01:00"));
        assert_eq!(conv.target.offset.abbreviation, "JST");
        assert_eq!(conv.difference_minutes, 780);
        assert_eq!(conv.local_time_kind, LocalTimeKind::Unique);
    }

    #[test]
    fn difference_widens_when_source_leaves_dst() {
        // 2024-01-15T17:00:00Z; New York is on standard time.
        let at = Instant::from_epoch_millis(1_705_338_000_000);
        let conv = engine()
            .convert_at(&zone("America/New_York"), &zone("Asia/Tokyo"), at)
            .unwrap();
        assert_eq!(conv.difference_minutes, 840);
    }

    #[test]
    fn difference_is_antisymmetric() {
        let at = Instant::from_epoch_millis(1_718_467_200_000);
        let forward = engine()
            .convert_at(&zone("America/New_York"), &zone("Asia/Tokyo"), at)
            .unwrap();
        let backward = engine()
            .convert_at(&zone("Asia/Tokyo"), &zone("America/New_York"), at)
            .unwrap();
        assert_eq!(forward.difference_minutes, -backward.difference_minutes);
        assert_eq!(forward.instant, backward.instant);
    }

    #[test]
    fn same_zone_conversion_is_an_identity() {
        let at = Instant::from_epoch_millis(1_718_467_200_000);
        let conv = engine()
            .convert_at(&zone("Asia/Tokyo"), &zone("Asia/Tokyo"), at)
            .unwrap();
        assert_eq!(conv.difference_minutes, 0);
        assert_eq!(conv.source.local, conv.target.local);
    }

    #[test]
    fn wall_clock_input_pivots_on_one_instant() {
        let conv = engine()
            .convert_local(
                &zone("America/New_York"),
                &zone("Asia/Tokyo"),
                local("2024-06-15T12:00"),
            )
            .unwrap();
        assert_eq!(conv.instant.epoch_millis(), 1_718_467_200_000);
        assert_eq!(conv.target.local, local("2024-06-16T01:00"));
        assert_eq!(conv.local_time_kind, LocalTimeKind::Unique);
    }

    #[test]
    fn gapped_input_converts_adjusted_not_echoed() {
        let conv = engine()
            .convert_local(
                &zone("America/New_York"),
                &zone("Etc/UTC"),
                local("2024-03-10T02:30"),
            )
            .unwrap();
        // Canonical instant is past the jump: 07:30Z, which New York
        // renders as 03:30 EDT.
        assert_eq!(conv.instant.epoch_millis(), 1_710_055_800_000);
        assert_eq!(conv.source.local, local("2024-03-10T03:30"));
        assert_eq!(conv.target.local, local("2024-03-10T07:30"));
        assert_eq!(conv.local_time_kind, LocalTimeKind::Gap);
    }

    #[test]
    fn overlapped_input_converts_first_occurrence() {
        let conv = engine()
            .convert_local(
                &zone("America/New_York"),
                &zone("Etc/UTC"),
                local("2024-11-03T01:30"),
            )
            .unwrap();
        assert_eq!(conv.instant.epoch_millis(), 1_730_611_800_000);
        assert_eq!(conv.source.local, local("2024-11-03T01:30"));
        assert_eq!(conv.source.offset.abbreviation, "EDT");
        assert_eq!(conv.target.local, local("2024-11-03T05:30"));
        assert_eq!(conv.local_time_kind, LocalTimeKind::Overlap);
        assert_eq!(conv.difference_minutes, 240);
    }

    #[test]
    fn iso_forms_carry_each_side_offset() {
        let at = Instant::from_epoch_millis(1_718_467_200_000);
        let conv = engine()
            .convert_at(&zone("America/New_York"), &zone("Asia/Tokyo"), at)
            .unwrap();
        assert_eq!(conv.source_iso().unwrap(), "2024-06-15T12:00:00-04:00");
        assert_eq!(conv.target_iso().unwrap(), "2024-06-16T01:00:00+09:00");
    }

    #[test]
    fn unknown_source_or_target_is_an_error() {
        let at = Instant::from_epoch_millis(0);
        let err = engine()
            .convert_at(&zone("Mars/Phobos"), &zone("Asia/Tokyo"), at)
            .unwrap_err();
        assert_eq!(err, TzError::unknown_zone("Mars/Phobos"));

        let err = engine()
            .convert_at(&zone("Asia/Tokyo"), &zone("Mars/Deimos"), at)
            .unwrap_err();
        assert_eq!(err, TzError::unknown_zone("Mars/Deimos"));
    }
}
