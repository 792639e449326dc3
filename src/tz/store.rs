//! # Zone Rule Store Port
//!
//! Trait boundary between the resolution engine and whatever supplies zone
//! rule data. The engine never reaches into a zone database directly; it
//! asks a [`ZoneRuleStore`] for the [`ZoneTimeline`] of a zone identifier.
//!
//! Production code uses [`TzdbRuleStore`](super::tzdb_store::TzdbRuleStore),
//! which derives timelines from the bundled tz database. Tests and embedders
//! with curated rule sets use [`MemoryRuleStore`](super::memory_store::MemoryRuleStore).

use crate::error::TzError;

use super::rules::ZoneTimeline;
use super::zone_id::ZoneId;

/// Source of zone rule timelines.
///
/// Implementations are immutable once built; lookups must be cheap enough
/// to sit on the request path.
pub trait ZoneRuleStore: Send + Sync {
    /// Returns the timeline for the given zone.
    ///
    /// # Errors
    /// Returns [`TzError::UnknownZone`] when the identifier names no zone
    /// this store knows.
    fn timeline(&self, zone: &ZoneId) -> Result<&ZoneTimeline, TzError>;

    /// All zone identifiers this store can resolve, sorted lexicographically.
    fn zone_ids(&self) -> &[ZoneId];

    /// Returns `true` if the store can resolve the given zone.
    fn contains(&self, zone: &ZoneId) -> bool {
        self.timeline(zone).is_ok()
    }
}
