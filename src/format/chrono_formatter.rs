use chrono::NaiveDateTime;

use super::formatter::TimeFormatter;

/// 12-hour time rendering, e.g. `03:30:00 PM`.
const TIME_FORMAT: &str = "%I:%M:%S %p";
/// Long-form date rendering, e.g. `Sunday, March 10, 2024`.
const DATE_FORMAT: &str = "%A, %B %-d, %Y";

/// A [`TimeFormatter`] backed by chrono's format machinery.
///
/// Renders the en-US style display strings the HTTP surface serves: a
/// 12-hour clock with an AM/PM marker and a long-form weekday date.
#[derive(Clone, Debug, Default)]
pub struct ChronoFormatter;

impl ChronoFormatter {
    /// Creates a new [`ChronoFormatter`].
    pub fn new() -> Self {
        Self
    }
}

impl TimeFormatter for ChronoFormatter {
    fn format_time(&self, local: NaiveDateTime) -> String {
        local.format(TIME_FORMAT).to_string()
    }

    fn format_date(&self, local: NaiveDateTime) -> String {
        local.format(DATE_FORMAT).to_string()
    }
}
