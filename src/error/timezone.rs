//! # Time-Zone Errors
//!
//! Typed errors raised by the resolution and conversion engine.
//!
//! Only genuinely unresolvable situations become errors: a zone identifier
//! that no rule set knows, or an instant that cannot be represented on a
//! calendar. Daylight-saving anomalies (skipped or repeated wall-clock
//! times) are *not* errors; they are reported through
//! [`LocalTimeKind`](crate::tz::LocalTimeKind) instead.
//!
//! # Examples
//! ```rust
//! use zonetime_web::error::TzError;
//!
//! let err = TzError::unknown_zone("Mars/Phobos");
//! assert_eq!(err.to_string(), "unknown time zone: Mars/Phobos");
//! ```

use thiserror::Error;

/// Error type for zone resolution and conversion.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TzError {
    /// The requested zone identifier is not present in the rule store.
    #[error("unknown time zone: {zone}")]
    UnknownZone {
        /// The identifier as the caller supplied it.
        zone: String,
    },

    /// The supplied instant or date-time could not be interpreted.
    #[error("invalid instant: {value}")]
    InvalidInstant {
        /// The offending input, verbatim.
        value: String,
    },
}

impl TzError {
    /// Shorthand for [`TzError::UnknownZone`].
    pub fn unknown_zone(zone: impl Into<String>) -> Self {
        Self::UnknownZone { zone: zone.into() }
    }

    /// Shorthand for [`TzError::InvalidInstant`].
    pub fn invalid_instant(value: impl Into<String>) -> Self {
        Self::InvalidInstant {
            value: value.into(),
        }
    }
}
