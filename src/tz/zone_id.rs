//! # Zone Identifier
//!
//! A validated IANA zone identifier such as `America/New_York` or
//! `Asia/Kolkata`.
//!
//! Construction only checks the shape of the string (non-empty after
//! trimming); whether the identifier names a zone the engine actually knows
//! is decided by the rule store at lookup time. Identifiers are
//! case-sensitive, matching the tz database convention.

use std::fmt;
use std::str::FromStr;

use crate::error::TzError;

/// An IANA time-zone identifier.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ZoneId(String);

impl ZoneId {
    /// Builds a [`ZoneId`] from the given string, trimming surrounding
    /// whitespace.
    ///
    /// # Errors
    /// Returns [`TzError::UnknownZone`] when the trimmed identifier is
    /// empty. Anything else is accepted here and judged by the store.
    pub fn new(id: impl Into<String>) -> Result<Self, TzError> {
        let id = id.into();
        let trimmed = id.trim();
        if trimmed.is_empty() {
            return Err(TzError::unknown_zone(id));
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for ZoneId {
    type Err = TzError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for ZoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ZoneId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
