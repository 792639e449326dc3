//! # Application Configuration Loader
//!
//! Provides a unified configuration loader for application settings,
//! including HTTP limits, CORS and the rule scan window.
//!
//! Automatically loads `.env` files for non-production environments.
//! It checks for a custom `DOTENV_FILE` path first, then falls back to
//! `.env.{APP_ENV}` or `.env`.
//!
//! This configuration is typically initialized once at application startup
//! and shared throughout the system.
//!
//! # Environment Variables
//! | Variable | Description | Default |
//! |-----------|-------------|----------|
//! | `APP_ENV` | Current environment (`development`, `production`, etc.) | `"development"` |
//! | `DOTENV_FILE` | Optional path to a custom dotenv file | *none* |
//! | `HTTP_MAX_BODY_BYTES` | Maximum request body size (bytes) | derived from `HTTP_MAX_BODY_MB` |
//! | `HTTP_MAX_BODY_MB` | Max body size in megabytes (if bytes not set) | `1` |
//! | `CORS_ORIGINS` | Allowed origins for CORS | `""` |
//! | `CORS_CREDENTIALS` | Allow cookies/headers in CORS requests | `false` |
//! | `TZ_SCAN_FROM_YEAR` | First year covered by derived zone rules | `1970` |
//! | `TZ_SCAN_TO_YEAR` | First year not covered by derived zone rules | `2037` |
//!
//! # Example
//! ```rust,no_run
//! use zonetime_web::config::app::AppConfig;
//!
//! let cfg = AppConfig::from_env();
//! assert!(cfg.tzdata.is_valid());
//! ```

use std::env;

use crate::config::{
    env::*,
    tzdata::TzdataConfig,
    web::{CorsConfig, HttpConfig},
};

/// Top-level application configuration.
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// HTTP server configuration.
    pub http: HttpConfig,
    /// Cross-Origin Resource Sharing configuration.
    pub cors: CorsConfig,
    /// Rule scan window for the zone rule store.
    pub tzdata: TzdataConfig,
}

impl AppConfig {
    /// Loads application configuration from environment variables.
    ///
    /// ## Behavior
    /// - Reads `APP_ENV` (defaults to `"development"`).
    /// - Loads `.env` or `.env.{APP_ENV}` for non-production environments.
    /// - Parses all supported environment variables and falls back to defaults.
    ///
    /// # Example
    /// ```rust,no_run
    /// use zonetime_web::config::app::AppConfig;
    ///
    /// let cfg = AppConfig::from_env();
    /// assert!(cfg.http.max_body_bytes > 0);
    /// ```
    pub fn from_env() -> Self {
        let app_env = env::var("APP_ENV").unwrap_or_else(|_| "development".into());

        if app_env != "production" {
            if let Ok(path) = env::var("DOTENV_FILE") {
                let _ = dotenvy::from_filename(path);
            } else {
                let candidate = format!(".env.{}", app_env);
                dotenvy::from_filename(&candidate)
                    .or_else(|_| dotenvy::dotenv())
                    .ok();
            }
        }

        // HTTP configuration
        let http_max_body_bytes = env::var("HTTP_MAX_BODY_BYTES")
            .ok()
            .and_then(|s| s.trim().parse::<usize>().ok())
            .unwrap_or_else(|| (read_u32("HTTP_MAX_BODY_MB", 1) as usize) * 1024 * 1024);

        // CORS
        let cors_env = env::var("CORS_ORIGINS").unwrap_or_default();
        let cors_credentials = read_flag("CORS_CREDENTIALS", false);

        AppConfig {
            http: HttpConfig {
                max_body_bytes: http_max_body_bytes,
            },
            cors: CorsConfig {
                env: cors_env,
                credentials: cors_credentials,
            },
            tzdata: TzdataConfig::from_env(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use temp_env;

    #[test]
    fn from_env_includes_tzdata_window() {
        temp_env::with_vars(
            vec![
                ("TZ_SCAN_FROM_YEAR", Some("1990")),
                ("TZ_SCAN_TO_YEAR", Some("2040")),
            ],
            || {
                let cfg = AppConfig::from_env();
                assert_eq!(cfg.tzdata.from_year, 1990);
                assert_eq!(cfg.tzdata.to_year, 2040);
            },
        );
    }

    #[test]
    fn http_body_limit_prefers_explicit_bytes() {
        temp_env::with_vars(
            vec![
                ("HTTP_MAX_BODY_BYTES", Some("2048")),
                ("HTTP_MAX_BODY_MB", Some("7")),
            ],
            || {
                let cfg = AppConfig::from_env();
                assert_eq!(cfg.http.max_body_bytes, 2048);
            },
        );
    }

    #[test]
    fn http_body_limit_falls_back_to_megabytes() {
        temp_env::with_vars(
            vec![
                ("HTTP_MAX_BODY_BYTES", None::<&str>),
                ("HTTP_MAX_BODY_MB", Some("2")),
            ],
            || {
                let cfg = AppConfig::from_env();
                assert_eq!(cfg.http.max_body_bytes, 2 * 1024 * 1024);
            },
        );
    }

    #[test]
    fn cors_settings_flow_through() {
        temp_env::with_vars(
            vec![
                ("CORS_ORIGINS", Some("http://localhost:3000")),
                ("CORS_CREDENTIALS", Some("true")),
            ],
            || {
                let cfg = AppConfig::from_env();
                assert_eq!(cfg.cors.env, "http://localhost:3000");
                assert!(cfg.cors.credentials);
            },
        );
    }
}
