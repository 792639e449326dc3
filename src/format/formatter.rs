use chrono::NaiveDateTime;

/// A port that renders wall-clock values for display.
///
/// # Purpose
/// Display strings are a presentation concern: the engine hands out plain
/// calendar values and this trait decides how they read. Keeping it behind
/// a port lets hosts swap conventions without touching resolution logic,
/// and lets tests pin exact strings.
///
/// # Typical Implementations
/// - `ChronoFormatter`: 12-hour clock and long-form dates via chrono
pub trait TimeFormatter: Send + Sync {
    /// Renders the time of day, e.g. `03:30:00 PM`.
    fn format_time(&self, local: NaiveDateTime) -> String;

    /// Renders the calendar date, e.g. `Sunday, March 10, 2024`.
    fn format_date(&self, local: NaiveDateTime) -> String;
}
