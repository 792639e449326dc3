//! HTTP surface: handlers, router, CORS and the JSON fallback.

pub mod cors;
pub mod fallback;
pub mod router;
pub mod service;
pub mod timezone_handler;

pub use router::{api_router, app_router};
pub use service::TimezoneService;
