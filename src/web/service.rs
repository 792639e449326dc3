use std::sync::Arc;

use crate::error::TzError;
use crate::format::{ChronoFormatter, TimeFormatter};
use crate::time::{Clock, SystemClock};
use crate::tz::{
    Conversion, ConversionEngine, CurrentTimeInfo, CurrentTimeInfoProvider, Instant,
    OffsetResolver, ZoneId, ZoneRuleStore, parse_local_datetime,
};

/// Application service behind the timezone endpoints.
///
/// Owns the engine components and translates the string-typed values the
/// HTTP layer deals in (zone names, epoch strings, ISO readings) into the
/// engine's types.
#[derive(Clone)]
pub struct TimezoneService {
    store: Arc<dyn ZoneRuleStore>,
    clock: Arc<dyn Clock>,
    formatter: Arc<dyn TimeFormatter>,
    provider: CurrentTimeInfoProvider,
    engine: ConversionEngine,
}

impl TimezoneService {
    pub fn new(
        store: Arc<dyn ZoneRuleStore>,
        clock: Arc<dyn Clock>,
        formatter: Arc<dyn TimeFormatter>,
    ) -> Self {
        let resolver = OffsetResolver::new(store.clone());
        let provider =
            CurrentTimeInfoProvider::new(resolver.clone(), clock.clone(), formatter.clone());
        let engine = ConversionEngine::new(resolver);
        Self {
            store,
            clock,
            formatter,
            provider,
            engine,
        }
    }

    /// Composition with the system clock and the default formatter.
    pub fn with_defaults(store: Arc<dyn ZoneRuleStore>) -> Self {
        Self::new(
            store,
            Arc::new(SystemClock::new()),
            Arc::new(ChronoFormatter::new()),
        )
    }

    /// Snapshot of `zone` at `at`, or at the clock's current instant when
    /// `at` is `None`.
    pub fn time_info(&self, zone: &str, at: Option<Instant>) -> Result<CurrentTimeInfo, TzError> {
        let zone: ZoneId = zone.parse()?;
        match at {
            Some(at) => self.provider.at(&zone, at),
            None => self.provider.now_in(&zone),
        }
    }

    /// Converts an absolute instant between two zones. `None` converts the
    /// clock's current instant.
    pub fn convert_at(
        &self,
        source: &str,
        target: &str,
        at: Option<Instant>,
    ) -> Result<Conversion, TzError> {
        let source: ZoneId = source.parse()?;
        let target: ZoneId = target.parse()?;
        let at = at.unwrap_or_else(|| self.clock.now());
        self.engine.convert_at(&source, &target, at)
    }

    /// Converts a wall-clock reading, expressed on the source zone's
    /// clocks, to the target zone.
    pub fn convert_local(
        &self,
        source: &str,
        target: &str,
        local: &str,
    ) -> Result<Conversion, TzError> {
        let source: ZoneId = source.parse()?;
        let target: ZoneId = target.parse()?;
        let local = parse_local_datetime(local)?;
        self.engine.convert_local(&source, &target, local)
    }

    /// All zone identifiers the store can resolve, sorted.
    pub fn zone_ids(&self) -> &[ZoneId] {
        self.store.zone_ids()
    }

    /// The display formatter the service was composed with.
    pub fn formatter(&self) -> &dyn TimeFormatter {
        self.formatter.as_ref()
    }
}
