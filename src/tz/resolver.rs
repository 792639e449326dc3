//! # Offset Resolver
//!
//! Point lookups against a [`ZoneRuleStore`]: which offset regime governs a
//! given zone at a given instant, and when does the next regime begin.
//!
//! The resolver is a thin, cloneable handle over a shared store. Results
//! never depend on the clock of the machine asking; the same zone and
//! instant always resolve to the same [`OffsetInfo`].

use std::sync::Arc;

use crate::error::TzError;

use super::instant::Instant;
use super::rules::TransitionRule;
use super::store::ZoneRuleStore;
use super::zone_id::ZoneId;

/// The offset regime one zone observes at one instant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OffsetInfo {
    /// Signed offset from UTC, in minutes.
    pub utc_offset_minutes: i32,
    /// Whether daylight saving is active.
    pub is_dst: bool,
    /// Zone abbreviation such as `EDT` or `+0530`.
    pub abbreviation: String,
}

impl OffsetInfo {
    fn from_rule(rule: &TransitionRule) -> Self {
        Self {
            utc_offset_minutes: rule.utc_offset_minutes,
            is_dst: rule.is_dst,
            abbreviation: rule.abbreviation.clone(),
        }
    }

    /// The offset as milliseconds, for timeline arithmetic.
    pub fn offset_millis(&self) -> i64 {
        i64::from(self.utc_offset_minutes) * 60_000
    }

    /// Human-readable label in the form `UTC+05:30` or `UTC-05:00`.
    pub fn utc_label(&self) -> String {
        let sign = if self.utc_offset_minutes < 0 { '-' } else { '+' };
        let magnitude = self.utc_offset_minutes.unsigned_abs();
        format!("UTC{sign}{:02}:{:02}", magnitude / 60, magnitude % 60)
    }
}

/// Resolves zone offsets at arbitrary instants.
#[derive(Clone)]
pub struct OffsetResolver {
    store: Arc<dyn ZoneRuleStore>,
}

impl OffsetResolver {
    /// Builds a resolver over the given store.
    pub fn new(store: Arc<dyn ZoneRuleStore>) -> Self {
        Self { store }
    }

    /// The underlying rule store.
    pub fn store(&self) -> &Arc<dyn ZoneRuleStore> {
        &self.store
    }

    /// Returns the offset regime `zone` observes at `at`.
    ///
    /// # Errors
    /// Returns [`TzError::UnknownZone`] when the store does not know the
    /// zone.
    pub fn resolve(&self, zone: &ZoneId, at: Instant) -> Result<OffsetInfo, TzError> {
        let timeline = self.store.timeline(zone)?;
        Ok(OffsetInfo::from_rule(timeline.rule_at(at)))
    }

    /// Returns the first rule taking effect strictly after `after`, or
    /// `None` when no further transition is on record.
    ///
    /// # Errors
    /// Returns [`TzError::UnknownZone`] when the store does not know the
    /// zone.
    pub fn next_transition(
        &self,
        zone: &ZoneId,
        after: Instant,
    ) -> Result<Option<TransitionRule>, TzError> {
        let timeline = self.store.timeline(zone)?;
        Ok(timeline.next_transition_after(after).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tz::memory_store::MemoryRuleStore;
    use crate::tz::rules::ZoneTimeline;

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

    fn resolver() -> OffsetResolver {
        let store = MemoryRuleStore::new(vec![(
            ZoneId::new("America/New_York").unwrap(),
            new_york_2024(),
        )]);
        OffsetResolver::new(Arc::new(store))
    }

    fn new_york() -> ZoneId {
        ZoneId::new("America/New_York").unwrap()
    }

    #[test]
    fn resolves_standard_time_before_spring_forward() {
        // 2024-03-10T06:00:00Z, one hour before the transition.
        let info = resolver()
            .resolve(&new_york(), Instant::from_epoch_millis(1_710_050_400_000))
            .unwrap();
        assert_eq!(info.utc_offset_minutes, -300);
        assert!(!info.is_dst);
        assert_eq!(info.abbreviation, "EST");
    }

    #[test]
    fn resolves_daylight_time_after_spring_forward() {
        // 2024-03-10T08:00:00Z, one hour after the transition.
        let info = resolver()
            .resolve(&new_york(), Instant::from_epoch_millis(1_710_057_600_000))
            .unwrap();
        assert_eq!(info.utc_offset_minutes, -240);
        assert!(info.is_dst);
        assert_eq!(info.abbreviation, "EDT");
    }

    #[test]
    fn transition_instant_belongs_to_the_new_regime() {
        let info = resolver()
            .resolve(&new_york(), Instant::from_epoch_millis(1_710_054_000_000))
            .unwrap();
        assert_eq!(info.abbreviation, "EDT");
    }

    #[test]
    fn unknown_zone_is_an_error() {
        let err = resolver()
            .resolve(
                &ZoneId::new("Mars/Phobos").unwrap(),
                Instant::from_epoch_millis(0),
            )
            .unwrap_err();
        assert_eq!(err, TzError::unknown_zone("Mars/Phobos"));
    }

    #[test]
    fn next_transition_is_cloned_rule_or_none() {
        let r = resolver();
        let next = r
            .next_transition(&new_york(), Instant::from_epoch_millis(1_710_057_600_000))
            .unwrap()
            .unwrap();
        assert_eq!(next.effective_from.epoch_millis(), 1_730_613_600_000);

        let none = r
            .next_transition(&new_york(), Instant::from_epoch_millis(1_800_000_000_000))
            .unwrap();
        assert!(none.is_none());
    }

    #[test]
    fn utc_label_covers_sign_and_half_hours() {
        let label = |minutes: i32| {
            OffsetInfo {
                utc_offset_minutes: minutes,
                is_dst: false,
                abbreviation: String::new(),
            }
            .utc_label()
        };
        assert_eq!(label(-300), "UTC-05:00");
        assert_eq!(label(330), "UTC+05:30");
        assert_eq!(label(0), "UTC+00:00");
        assert_eq!(label(840), "UTC+14:00");
        assert_eq!(label(-720), "UTC-12:00");
        assert_eq!(label(-210), "UTC-03:30");
    }

    #[test]
    fn offset_millis_is_minutes_scaled() {
        let info = OffsetInfo {
            utc_offset_minutes: -240,
            is_dst: true,
            abbreviation: "EDT".into(),
        };
        assert_eq!(info.offset_millis(), -14_400_000);
    }

    #[test]
    fn resolver_clones_share_the_store() {
        let r = resolver();
        let clone = r.clone();
        assert!(Arc::ptr_eq(r.store(), clone.store()));
    }
}
