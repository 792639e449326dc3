//! Configuration loading and sections.

pub mod app;
pub mod env;
pub mod tzdata;
pub mod web;

pub use app::AppConfig;
