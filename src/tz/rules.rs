//! # Transition Rules and Zone Timelines
//!
//! The data model behind zone resolution: a [`TransitionRule`] describes the
//! offset regime that takes effect at one instant, and a [`ZoneTimeline`] is
//! the ordered sequence of such rules for a single zone.
//!
//! A timeline covers the whole axis: its first rule is anchored at
//! [`Instant::MIN`], every later rule starts strictly after its predecessor,
//! and each rule remains in effect until the next one begins. Lookup is a
//! binary search for the greatest `effective_from` not after the queried
//! instant.

use anyhow::{bail, Result};

use super::instant::Instant;

/// Lowest UTC offset carried by any real zone, in minutes (UTC-12:00).
pub const MIN_OFFSET_MINUTES: i32 = -720;
/// Highest UTC offset carried by any real zone, in minutes (UTC+14:00).
pub const MAX_OFFSET_MINUTES: i32 = 840;

/// One offset regime of a zone, effective from a given instant until the
/// next rule takes over.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransitionRule {
    /// First instant at which this rule is in effect (inclusive).
    pub effective_from: Instant,
    /// Signed offset from UTC, in minutes. East of Greenwich is positive.
    pub utc_offset_minutes: i32,
    /// Whether daylight saving is active under this rule.
    pub is_dst: bool,
    /// Zone abbreviation such as `EST` or `+0530`.
    pub abbreviation: String,
}

impl TransitionRule {
    /// Builds a rule effective from the given instant.
    pub fn new(
        effective_from: Instant,
        utc_offset_minutes: i32,
        is_dst: bool,
        abbreviation: impl Into<String>,
    ) -> Self {
        Self {
            effective_from,
            utc_offset_minutes,
            is_dst,
            abbreviation: abbreviation.into(),
        }
    }
}

/// The complete, ordered rule history of a single zone.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ZoneTimeline {
    rules: Vec<TransitionRule>,
}

impl ZoneTimeline {
    /// Builds a timeline from rules sorted by `effective_from`.
    ///
    /// # Errors
    /// Fails when the sequence is empty, its first rule is not anchored at
    /// [`Instant::MIN`], the anchors are not strictly increasing, or an
    /// offset falls outside `UTC-12:00..=UTC+14:00`.
    pub fn new(rules: Vec<TransitionRule>) -> Result<Self> {
        let Some(first) = rules.first() else {
            bail!("zone timeline must contain at least one rule");
        };
        if first.effective_from != Instant::MIN {
            bail!("first rule must be anchored at the minimum instant");
        }
        for pair in rules.windows(2) {
            if pair[1].effective_from <= pair[0].effective_from {
                bail!(
                    "rules must be strictly ordered: {} does not follow {}",
                    pair[1].effective_from,
                    pair[0].effective_from
                );
            }
        }
        for rule in &rules {
            if rule.utc_offset_minutes < MIN_OFFSET_MINUTES
                || rule.utc_offset_minutes > MAX_OFFSET_MINUTES
            {
                bail!(
                    "offset {} minutes is outside the representable range",
                    rule.utc_offset_minutes
                );
            }
        }
        Ok(Self { rules })
    }

    /// Returns the rule in effect at the given instant.
    ///
    /// An instant that equals a rule's `effective_from` is governed by that
    /// rule, not its predecessor.
    pub fn rule_at(&self, at: Instant) -> &TransitionRule {
        let idx = self
            .rules
            .partition_point(|rule| rule.effective_from <= at);
        // idx >= 1 because the first rule is anchored at Instant::MIN.
        &self.rules[idx - 1]
    }

    /// Returns the first rule whose regime begins strictly after `at`, or
    /// `None` when `at` falls under the final rule.
    pub fn next_transition_after(&self, at: Instant) -> Option<&TransitionRule> {
        let idx = self
            .rules
            .partition_point(|rule| rule.effective_from <= at);
        self.rules.get(idx)
    }

    /// All rules, ordered by `effective_from`.
    pub fn rules(&self) -> &[TransitionRule] {
        &self.rules
    }
}
