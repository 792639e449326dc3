//! # API Router
//!
//! Assembles the timezone endpoints, the shared service extension and the
//! JSON 404 fallback into one [`Router`].
//!
//! Construction requires an already-built [`TimezoneService`], which in
//! turn requires a successfully built rule store. A host that fails to
//! build the store therefore has nothing to mount, which is the intended
//! fail-fast behavior.
//!
//! # Example
//! ```rust,ignore
//! use std::sync::Arc;
//! use zonetime_web::config::app::AppConfig;
//! use zonetime_web::tz::TzdbRuleStore;
//! use zonetime_web::web::router::app_router;
//! use zonetime_web::web::service::TimezoneService;
//!
//! let cfg = AppConfig::from_env();
//! let store = TzdbRuleStore::from_tzdb(&cfg.tzdata)?;
//! let service = Arc::new(TimezoneService::with_defaults(Arc::new(store)));
//! let app = app_router(service, &cfg.cors);
//! ```

use std::sync::Arc;

use axum::{Extension, Router, routing::get};

use crate::config::web::CorsConfig;
use crate::web::cors::build_cors;
use crate::web::fallback;
use crate::web::service::TimezoneService;
use crate::web::timezone_handler::{convert_handler, current_time_handler, zones_handler};

/// Builds the `/api/timezone` router over the given service.
///
/// Routes:
/// - `GET /api/timezone` — current-time snapshot
/// - `POST /api/timezone` — conversion
/// - `GET /api/timezone/zones` — accepted identifiers
///
/// Unmatched paths fall through to the JSON 404 handler.
pub fn api_router(service: Arc<TimezoneService>) -> Router {
    Router::new()
        .route(
            "/api/timezone",
            get(current_time_handler).post(convert_handler),
        )
        .route("/api/timezone/zones", get(zones_handler))
        .layer(Extension(service))
        .fallback(fallback::not_found)
}

/// [`api_router`] with the CORS layer applied, configured from
/// [`CorsConfig`].
pub fn app_router(service: Arc<TimezoneService>, cors: &CorsConfig) -> Router {
    api_router(service).layer(build_cors(cors))
}
