//! # CORS (Cross-Origin Resource Sharing) Utilities
//!
//! Provides a configurable [`CorsLayer`] builder for Axum applications.
//!
//! CORS settings are derived from [`CorsConfig`], allowing runtime customization of
//! allowed origins and credentials.
//!
//! If no origins are configured, defaults to allowing `http://localhost:3000`
//! — suitable for local frontend development.
//!
//! # Example
//! ```rust,no_run
//! use axum::{routing::get, Router};
//! use zonetime_web::config::web::CorsConfig;
//! use zonetime_web::web::cors::build_cors;
//!
//! let cfg = CorsConfig {
//!     env: "http://example.com".into(),
//!     credentials: true,
//! };
//!
//! let app: Router = Router::new()
//!     .route("/api/hello", get(|| async { "Hello" }))
//!     .layer(build_cors(&cfg));
//! ```
//!
//! This setup will allow cross-origin requests from `http://example.com`
//! and include `Access-Control-Allow-Credentials: true` in responses.

use axum::http::{HeaderValue, Method, header};
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::config::web::CorsConfig;

/// Parses a comma-separated list of origins from environment configuration.
///
/// Invalid or empty entries are ignored.
fn parse_origins_from_env(cors_env: String) -> Vec<HeaderValue> {
    cors_env
        .split(',')
        .filter_map(|s| {
            let s = s.trim();
            if s.is_empty() {
                None
            } else {
                HeaderValue::from_str(s).ok()
            }
        })
        .collect()
}

/// Builds a [`CorsLayer`] configured from [`CorsConfig`].
///
/// - Allows `GET`, `POST`, and `OPTIONS` methods.
/// - Always includes the `Content-Type` header.
/// - Defaults to `http://localhost:3000` when no origins are provided.
/// - Enables credentials when `CorsConfig.credentials` is `true`.
///
/// # Example
/// ```rust,no_run
/// use zonetime_web::config::web::CorsConfig;
/// use zonetime_web::web::cors::build_cors;
///
/// let cors = CorsConfig {
///     env: "https://frontend.example".into(),
///     credentials: false,
/// };
/// let layer = build_cors(&cors);
/// ```
pub fn build_cors(cors: &CorsConfig) -> CorsLayer {
    let origins = parse_origins_from_env(cors.env.clone());

    // Allowed origins — "*" cannot be used when credentials=true
    let origin_cfg = if origins.is_empty() {
        // Default to local dev port if not specified
        AllowOrigin::list([HeaderValue::from_static("http://localhost:3000")])
    } else {
        AllowOrigin::list(origins)
    };

    let mut layer = CorsLayer::new()
        .allow_origin(origin_cfg)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    if cors.credentials {
        layer = layer.allow_credentials(true);
    }

    layer
}
