//! Display formatting port and its chrono-backed implementation.

pub mod chrono_formatter;
pub mod formatter;

pub use chrono_formatter::ChronoFormatter;
pub use formatter::TimeFormatter;
