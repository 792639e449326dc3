//! # In-Memory Rule Store
//!
//! A [`ZoneRuleStore`] backed by a plain map, for curated rule sets. This is
//! the store used in tests and by embedders that ship their own transition
//! data instead of relying on the bundled tz database.

use std::collections::BTreeMap;

use crate::error::TzError;

use super::rules::ZoneTimeline;
use super::store::ZoneRuleStore;
use super::zone_id::ZoneId;

/// An immutable map of zone identifiers to timelines.
#[derive(Clone, Debug)]
pub struct MemoryRuleStore {
    ids: Vec<ZoneId>,
    timelines: BTreeMap<ZoneId, ZoneTimeline>,
}

impl MemoryRuleStore {
    /// Builds a store from `(zone, timeline)` pairs.
    ///
    /// When a zone appears more than once, the last timeline wins.
    pub fn new(zones: impl IntoIterator<Item = (ZoneId, ZoneTimeline)>) -> Self {
        let timelines: BTreeMap<ZoneId, ZoneTimeline> = zones.into_iter().collect();
        let ids = timelines.keys().cloned().collect();
        Self { ids, timelines }
    }

    /// Number of zones in the store.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns `true` when the store holds no zones.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl ZoneRuleStore for MemoryRuleStore {
    fn timeline(&self, zone: &ZoneId) -> Result<&ZoneTimeline, TzError> {
        self.timelines
            .get(zone)
            .ok_or_else(|| TzError::unknown_zone(zone.as_str()))
    }

    fn zone_ids(&self) -> &[ZoneId] {
        &self.ids
    }
}
