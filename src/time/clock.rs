use crate::tz::Instant;

/// A port that provides the **current instant** for the application.
///
/// # Purpose
/// This trait abstracts access to "now" so that:
///
/// - Application and domain logic do **not** depend on system time
/// - Implementations can be swapped (system clock, fixed clock, mock, etc.)
/// - Tests can be deterministic and time-independent
///
/// # Design Notes
/// - The clock deals in absolute instants only. Turning an instant into a
///   zone's wall-clock reading is the resolution engine's job, never the
///   clock's.
/// - This trait represents an **external capability**, similar to a
///   [`ZoneRuleStore`](crate::tz::ZoneRuleStore).
///
/// # Typical Implementations
/// - `SystemClock`: Uses the OS / runtime clock
/// - `FixedClock`: Returns a constant instant (for testing)
pub trait Clock: Send + Sync {
    /// Returns the current moment as an [`Instant`].
    ///
    /// Implementations decide how "now" is determined
    /// (e.g. system time, fixed value, mocked time source).
    fn now(&self) -> Instant;
}
