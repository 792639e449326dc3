//! Time-zone resolution and conversion.
//!
//! The flow through this module: a [`ZoneRuleStore`] supplies ordered
//! [`ZoneTimeline`]s, the [`OffsetResolver`] answers point lookups against
//! them, the [`WallClockInterpreter`] maps ambiguous wall-clock readings
//! onto the timeline, and [`ConversionEngine`] /
//! [`CurrentTimeInfoProvider`] build the caller-facing results on top.

pub mod convert;
pub mod current;
pub mod instant;
pub mod interpret;
pub mod memory_store;
pub mod resolver;
pub mod rules;
pub mod store;
pub mod tzdb_store;
pub mod zone_id;

pub use convert::{Conversion, ConversionEngine, ZoneRendering};
pub use current::{CurrentTimeInfo, CurrentTimeInfoProvider};
pub use instant::Instant;
pub use interpret::{Interpretation, LocalTimeKind, WallClockInterpreter, parse_local_datetime};
pub use memory_store::MemoryRuleStore;
pub use resolver::{OffsetInfo, OffsetResolver};
pub use rules::{TransitionRule, ZoneTimeline};
pub use store::ZoneRuleStore;
pub use tzdb_store::TzdbRuleStore;
pub use zone_id::ZoneId;
