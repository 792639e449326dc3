use chrono::Utc;

use crate::time::clock::Clock;
use crate::tz::Instant;

/// A [`Clock`] implementation backed by the system clock.
///
/// # Overview
/// `SystemClock` captures the operating system's current time as an
/// absolute [`Instant`]. It carries no zone of its own; callers that want
/// a wall-clock view run the instant through the resolution engine.
///
/// # Responsibility
/// - Choosing the clock implementation is the responsibility of the
///   **composition root** (e.g. `main.rs`).
/// - Application and domain logic should treat `Clock` as a trusted source.
#[derive(Clone, Debug, Default)]
pub struct SystemClock;

impl SystemClock {
    /// Creates a new [`SystemClock`].
    pub fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::from_utc(Utc::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_clock_tracks_chrono_now() {
        let clock = SystemClock::new();

        let before = Utc::now().timestamp_millis();
        let now = clock.now().epoch_millis();
        let after = Utc::now().timestamp_millis();

        assert!(before <= now && now <= after, "{before} <= {now} <= {after}");
    }

    #[test]
    fn system_clock_never_runs_backwards_across_calls() {
        let clock = SystemClock::new();

        let first = clock.now();
        let second = clock.now();

        assert!(second >= first);
    }
}
