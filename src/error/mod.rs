//! Error types shared across the crate.

pub mod timezone;

pub use timezone::TzError;
