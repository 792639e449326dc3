//! # zonetime_web
//!
//! Time-zone resolution and conversion foundation for web applications.
//!
//! This crate provides the engine behind world-clock style features:
//! - Zone rule storage derived from the bundled tz database (`tz`)
//! - DST-aware offset resolution and wall-clock interpretation (`tz`)
//! - A ready-to-mount axum API surface (`web`)
//!
//! ## Example usage (in another crate)
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use zonetime_web::config::app::AppConfig;
//! use zonetime_web::tz::TzdbRuleStore;
//! use zonetime_web::web::{TimezoneService, app_router};
//!
//! let cfg = AppConfig::from_env();
//! let store = TzdbRuleStore::from_tzdb(&cfg.tzdata)?;
//! let service = Arc::new(TimezoneService::with_defaults(Arc::new(store)));
//! let app = app_router(service, &cfg.cors);
// ===============================
// Re-exports of external crates
// ===============================

pub use anyhow;
pub use axum;
pub use chrono;
pub use chrono_tz;
pub use dotenvy;
pub use serde;
pub use serde_json;
pub use tokio;
pub use tower;
pub use tower_http;

// ===============================
// Public modules
// ===============================
pub mod config;
pub mod error;
pub mod format;
pub mod time;
pub mod tz;
pub mod web;
