//! # Rule Scan Window Configuration
//!
//! Controls how much of each zone's history the rule store derives from
//! the tz database at startup.
//!
//! The window is expressed in whole years, `[from_year, to_year)`. Offsets
//! before the window are flattened into the zone's anchor rule; offsets
//! after it are simply not on record.
//!
//! # Examples
//! ```rust,no_run
//! use zonetime_web::config::tzdata::TzdataConfig;
//!
//! let cfg = TzdataConfig::from_env();
//! assert!(cfg.is_valid());
//! ```

use crate::config::env::read_i32;

/// Rule scan window configuration.
///
/// Reads from environment variables:
/// - `TZ_SCAN_FROM_YEAR` — first year covered by derived rules
/// - `TZ_SCAN_TO_YEAR` — first year *not* covered
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TzdataConfig {
    pub from_year: i32,
    pub to_year: i32,
}

impl TzdataConfig {
    /// Default start of the scan window.
    pub const DEFAULT_FROM_YEAR: i32 = 1970;
    /// Default end of the scan window, exclusive.
    pub const DEFAULT_TO_YEAR: i32 = 2037;

    /// Builds a [`TzdataConfig`] from environment variables.
    pub fn from_env() -> Self {
        Self {
            from_year: read_i32("TZ_SCAN_FROM_YEAR", Self::DEFAULT_FROM_YEAR),
            to_year: read_i32("TZ_SCAN_TO_YEAR", Self::DEFAULT_TO_YEAR),
        }
    }

    /// Returns `true` when the window is non-empty and both years sit in
    /// the range the calendar math supports.
    pub fn is_valid(&self) -> bool {
        (1..=9999).contains(&self.from_year)
            && (1..=9999).contains(&self.to_year)
            && self.from_year < self.to_year
    }
}

impl Default for TzdataConfig {
    fn default() -> Self {
        Self {
            from_year: Self::DEFAULT_FROM_YEAR,
            to_year: Self::DEFAULT_TO_YEAR,
        }
    }
}
