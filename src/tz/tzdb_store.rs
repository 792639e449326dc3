//! # Rule Store Backed by the tz Database
//!
//! A [`ZoneRuleStore`] whose timelines are derived from the tz database
//! bundled with [`chrono_tz`].
//!
//! `chrono_tz` answers "what offset applies at this instant" but does not
//! expose transition instants directly, so the store derives them: each zone
//! is probed once per day across the configured scan window, and whenever
//! two neighbouring probes disagree the exact transition second is located
//! by bisection. Real zones never change regime twice within a day, so the
//! daily stride loses nothing.
//!
//! History before the window start is flattened into the anchor rule: the
//! regime observed at the window start is treated as having always been in
//! effect. Hosts that care about older history widen the window through
//! [`TzdataConfig`].
//!
//! Building the full store walks every zone in the database and is meant to
//! happen once at startup, behind an `Arc`.

use std::collections::BTreeMap;

use anyhow::{anyhow, bail, Context, Result};
use chrono::{DateTime, NaiveDate, Offset, TimeZone, Utc};
use chrono_tz::{OffsetComponents, OffsetName, Tz, TzOffset, TZ_VARIANTS};
use tracing::info;

use crate::config::tzdata::TzdataConfig;
use crate::error::TzError;

use super::instant::Instant;
use super::rules::{TransitionRule, ZoneTimeline};
use super::store::ZoneRuleStore;
use super::zone_id::ZoneId;

/// Probe stride while scanning a zone, in seconds.
const SCAN_STEP_SECS: i64 = 86_400;

/// Zone rule store derived from the bundled tz database.
#[derive(Clone, Debug)]
pub struct TzdbRuleStore {
    ids: Vec<ZoneId>,
    timelines: BTreeMap<ZoneId, ZoneTimeline>,
}

impl TzdbRuleStore {
    /// Builds timelines for every zone the tz database knows.
    ///
    /// # Errors
    /// Fails when the scan window is invalid or a timeline cannot be
    /// derived.
    pub fn from_tzdb(cfg: &TzdataConfig) -> Result<Self> {
        Self::with_zones(cfg, TZ_VARIANTS.iter().map(|tz| tz.name()))
    }

    /// Builds timelines for the named zones only.
    ///
    /// # Errors
    /// Fails when the scan window is invalid, a name is not a tz-database
    /// zone, or a timeline cannot be derived.
    pub fn with_zones<I, S>(cfg: &TzdataConfig, zones: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if !cfg.is_valid() {
            bail!(
                "scan window {}..{} is invalid",
                cfg.from_year,
                cfg.to_year
            );
        }
        let start_secs = year_start_secs(cfg.from_year)?;
        let end_secs = year_start_secs(cfg.to_year)?;

        let mut timelines = BTreeMap::new();
        for name in zones {
            let name = name.as_ref();
            let tz: Tz = name
                .parse()
                .map_err(|_| anyhow!("not a tz-database zone: {name}"))?;
            let timeline = scan_zone(&tz, start_secs, end_secs)
                .with_context(|| format!("deriving rules for {name}"))?;
            timelines.insert(ZoneId::new(name)?, timeline);
        }
        let ids: Vec<ZoneId> = timelines.keys().cloned().collect();

        info!(
            zones = ids.len(),
            from_year = cfg.from_year,
            to_year = cfg.to_year,
            "zone rule store ready"
        );
        Ok(Self { ids, timelines })
    }
}

impl ZoneRuleStore for TzdbRuleStore {
    fn timeline(&self, zone: &ZoneId) -> Result<&ZoneTimeline, TzError> {
        self.timelines
            .get(zone)
            .ok_or_else(|| TzError::unknown_zone(zone.as_str()))
    }

    fn zone_ids(&self) -> &[ZoneId] {
        &self.ids
    }
}

/// Epoch seconds of `year-01-01T00:00:00Z`.
fn year_start_secs(year: i32) -> Result<i64> {
    let start = NaiveDate::from_ymd_opt(year, 1, 1)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .with_context(|| format!("year {year} is outside the calendar range"))?;
    Ok(start.and_utc().timestamp())
}

/// Offset regime the zone observes at the given epoch second.
fn offset_at(tz: &Tz, secs: i64) -> Result<TzOffset> {
    let utc = DateTime::<Utc>::from_timestamp(secs, 0)
        .with_context(|| format!("probe instant {secs}s is out of range"))?;
    Ok(tz.offset_from_utc_datetime(&utc.naive_utc()))
}

/// Two probes belong to different regimes when the total offset, the DST
/// component or the designation changes.
fn regimes_differ(a: &TzOffset, b: &TzOffset) -> bool {
    a.fix() != b.fix()
        || a.dst_offset() != b.dst_offset()
        || a.abbreviation() != b.abbreviation()
}

/// Walks one zone across the window and collects its transition rules.
fn scan_zone(tz: &Tz, start_secs: i64, end_secs: i64) -> Result<ZoneTimeline> {
    let first = offset_at(tz, start_secs)?;
    let mut rules = vec![rule_from(Instant::MIN, &first)];

    let mut prev = first;
    let mut prev_secs = start_secs;
    let mut probe_secs = start_secs + SCAN_STEP_SECS;
    while probe_secs <= end_secs {
        let cur = offset_at(tz, probe_secs)?;
        if regimes_differ(&prev, &cur) {
            let boundary_secs = refine_boundary(tz, prev_secs, probe_secs, &prev)?;
            let at_boundary = offset_at(tz, boundary_secs)?;
            rules.push(rule_from(
                Instant::from_epoch_millis(boundary_secs * 1000),
                &at_boundary,
            ));
        }
        prev = cur;
        prev_secs = probe_secs;
        probe_secs += SCAN_STEP_SECS;
    }

    ZoneTimeline::new(rules)
}

/// Bisects `(lo, hi]` down to the first second governed by a regime other
/// than `prev`.
fn refine_boundary(tz: &Tz, mut lo: i64, mut hi: i64, prev: &TzOffset) -> Result<i64> {
    while hi - lo > 1 {
        let mid = lo + (hi - lo) / 2;
        let at_mid = offset_at(tz, mid)?;
        if regimes_differ(prev, &at_mid) {
            hi = mid;
        } else {
            lo = mid;
        }
    }
    Ok(hi)
}

fn rule_from(effective_from: Instant, offset: &TzOffset) -> TransitionRule {
    let minutes = offset.fix().local_minus_utc() / 60;
    let is_dst = !offset.dst_offset().is_zero();
    let abbreviation = match offset.abbreviation() {
        Some(name) => name.to_owned(),
        None => numeric_abbreviation(minutes),
    };
    TransitionRule::new(effective_from, minutes, is_dst, abbreviation)
}

/// tzdb-style numeric designation for zones without a letter abbreviation,
/// e.g. `+0530`, `-03`.
fn numeric_abbreviation(offset_minutes: i32) -> String {
    let hours = offset_minutes / 60;
    let minutes = (offset_minutes % 60).abs();
    if minutes == 0 {
        format!("{hours:+03}")
    } else {
        format!("{hours:+03}{minutes:02}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tz::rules::{MAX_OFFSET_MINUTES, MIN_OFFSET_MINUTES};

    fn window(from_year: i32, to_year: i32) -> TzdataConfig {
        TzdataConfig {
            from_year,
            to_year,
        }
    }

    fn build<const N: usize>(
        cfg: &TzdataConfig,
        zones: [&str; N],
    ) -> Result<TzdbRuleStore> {
        TzdbRuleStore::with_zones(cfg, zones)
    }

    fn zone(id: &str) -> ZoneId {
        ZoneId::new(id).unwrap()
    }

    #[test]
    fn new_york_2024_transitions_land_on_exact_seconds() {
        let store = build(&window(2024, 2025), ["America/New_York"]).unwrap();
        let tl = store.timeline(&zone("America/New_York")).unwrap();
        let rules = tl.rules();

        assert_eq!(rules.len(), 3);
        assert_eq!(rules[0].effective_from, Instant::MIN);
        assert_eq!(rules[0].utc_offset_minutes, -300);
        assert!(!rules[0].is_dst);
        assert_eq!(rules[0].abbreviation, "EST");

        // 2024-03-10T07:00:00Z: 02:00 EST springs forward to 03:00 EDT.
        assert_eq!(rules[1].effective_from.epoch_millis(), 1_710_054_000_000);
        assert_eq!(rules[1].utc_offset_minutes, -240);
        assert!(rules[1].is_dst);
        assert_eq!(rules[1].abbreviation, "EDT");

        // 2024-11-03T06:00:00Z: 02:00 EDT falls back to 01:00 EST.
        assert_eq!(rules[2].effective_from.epoch_millis(), 1_730_613_600_000);
        assert_eq!(rules[2].utc_offset_minutes, -300);
        assert!(!rules[2].is_dst);
    }

    #[test]
    fn kolkata_is_a_fixed_half_hour_offset() {
        let store = build(&window(2024, 2025), ["Asia/Kolkata"]).unwrap();
        let tl = store.timeline(&zone("Asia/Kolkata")).unwrap();

        assert_eq!(tl.rules().len(), 1);
        let rule = tl.rule_at(Instant::from_epoch_millis(1_710_000_000_000));
        assert_eq!(rule.utc_offset_minutes, 330);
        assert!(!rule.is_dst);
        assert_eq!(rule.abbreviation, "IST");
    }

    #[test]
    fn lord_howe_half_hour_dst_is_detected() {
        let store = build(&window(2024, 2025), ["Australia/Lord_Howe"]).unwrap();
        let tl = store.timeline(&zone("Australia/Lord_Howe")).unwrap();

        // Standard +10:30, daylight +11:00; the DST shift is 30 minutes.
        let offsets: Vec<(i32, bool)> = tl
            .rules()
            .iter()
            .map(|r| (r.utc_offset_minutes, r.is_dst))
            .collect();
        assert!(offsets.contains(&(630, false)), "offsets: {offsets:?}");
        assert!(offsets.contains(&(660, true)), "offsets: {offsets:?}");
    }

    #[test]
    fn unknown_zone_name_fails_the_build() {
        let result = build(&window(2024, 2025), ["Mars/Phobos"]);
        let err = result.unwrap_err().to_string();
        assert!(err.contains("Mars/Phobos"), "message: {err}");
    }

    #[test]
    fn inverted_window_fails_the_build() {
        let result = build(&window(2030, 2020), ["Etc/UTC"]);
        assert!(result.is_err());
    }

    #[test]
    fn utc_collapses_to_the_anchor_rule() {
        let store = build(&window(2024, 2025), ["Etc/UTC"]).unwrap();
        let tl = store.timeline(&zone("Etc/UTC")).unwrap();
        assert_eq!(tl.rules().len(), 1);
        assert_eq!(tl.rules()[0].utc_offset_minutes, 0);
        assert!(!tl.rules()[0].is_dst);
    }

    #[test]
    fn full_database_build_covers_every_zone_within_offset_range() {
        let cfg = window(2024, 2025);
        let store = TzdbRuleStore::from_tzdb(&cfg).unwrap();

        assert_eq!(store.zone_ids().len(), TZ_VARIANTS.len());
        assert!(store.contains(&zone("America/New_York")));
        assert!(store.contains(&zone("Pacific/Kiritimati")));
        assert!(store.zone_ids().windows(2).all(|pair| pair[0] < pair[1]));

        for id in store.zone_ids() {
            let tl = store.timeline(id).unwrap();
            for rule in tl.rules() {
                assert!(
                    (MIN_OFFSET_MINUTES..=MAX_OFFSET_MINUTES)
                        .contains(&rule.utc_offset_minutes),
                    "{id}: offset {} out of range",
                    rule.utc_offset_minutes
                );
            }
        }
    }

    #[test]
    fn numeric_designations_match_tzdb_style() {
        assert_eq!(numeric_abbreviation(330), "+0530");
        assert_eq!(numeric_abbreviation(-180), "-03");
        assert_eq!(numeric_abbreviation(0), "+00");
        assert_eq!(numeric_abbreviation(-210), "-0330");
        assert_eq!(numeric_abbreviation(840), "+14");
    }
}
