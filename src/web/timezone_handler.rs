//! # Timezone API Handlers
//!
//! Axum-compatible HTTP endpoints over [`TimezoneService`]:
//!
//! - `GET /api/timezone` — current-time snapshot for one zone
//! - `POST /api/timezone` — convert an instant or wall-clock reading
//!   between two zones
//! - `GET /api/timezone/zones` — enumerate the accepted zone identifiers
//!
//! ## Features
//! - camelCase JSON bodies matching the frontend contract
//! - Every caller-input problem (missing parameter, unknown zone,
//!   unparsable instant) maps to `400` with `{ "error": "<message>" }`
//! - Skipped or repeated wall-clock inputs are converted by policy and
//!   flagged through `localTimeKind` rather than rejected
//!
//! ## Example
//! ```rust,ignore
//! use axum::{Router, routing::get, Extension};
//! use std::sync::Arc;
//! use zonetime_web::web::service::TimezoneService;
//! use zonetime_web::web::timezone_handler::current_time_handler;
//!
//! let service: Arc<TimezoneService> = build_service();
//!
//! let app = Router::new()
//!     .route("/api/timezone", get(current_time_handler))
//!     .layer(Extension(service));
//! ```

use std::sync::Arc;

use axum::{
    Extension, Json,
    extract::Query,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;

use crate::error::TzError;
use crate::tz::Instant;
use crate::web::service::TimezoneService;

/// Query parameters accepted by `GET /api/timezone`.
#[derive(Debug, Deserialize)]
pub struct CurrentTimeQuery {
    /// Zone identifier, e.g. `America/New_York`. Required.
    pub timezone: Option<String>,
    /// Epoch milliseconds to snapshot instead of "now".
    pub timestamp: Option<String>,
}

/// Request body accepted by `POST /api/timezone`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvertRequest {
    /// Zone the input is expressed in. Required.
    pub from_timezone: Option<String>,
    /// Zone to convert to. Required.
    pub to_timezone: Option<String>,
    /// Absolute instant as epoch milliseconds.
    pub timestamp: Option<i64>,
    /// Wall-clock reading on `fromTimezone`'s clocks, e.g.
    /// `2024-03-10T02:30`. Takes precedence over `timestamp`.
    pub iso: Option<String>,
}

/// JSON body returned by `GET /api/timezone`.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CurrentTimeResp {
    timezone: String,
    formatted_time: String,
    formatted_date: String,
    utc_offset: String,
    dst_active: bool,
    abbreviation: String,
    epoch_ms: i64,
    /// When the next offset regime takes effect, as an ISO-8601 UTC
    /// string, or `null` when no further transition is on record.
    next_transition: Option<String>,
}

/// JSON body returned by `POST /api/timezone`.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ConvertResp {
    #[serde(rename = "sourceISO")]
    source_iso: String,
    #[serde(rename = "targetISO")]
    target_iso: String,
    time_difference_minutes: i32,
    source_offset: String,
    target_offset: String,
    source_time: String,
    source_date: String,
    target_time: String,
    target_date: String,
    local_time_kind: String,
}

/// JSON body returned by `GET /api/timezone/zones`.
#[derive(Serialize)]
struct ZonesResp {
    zones: Vec<String>,
    count: usize,
}

/// Builds the uniform `400` rejection the timezone endpoints use.
fn bad_request(message: impl Into<String>) -> Response {
    let message = message.into();
    debug!(%message, "timezone request rejected");
    (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
}

/// Treats a blank or whitespace-only parameter the same as an absent one.
fn present(value: Option<&String>) -> Option<&str> {
    value.map(|s| s.trim()).filter(|s| !s.is_empty())
}

/// Handler for `GET /api/timezone`.
///
/// ## Behavior
/// - `timezone` is required; a missing or blank value is rejected before
///   any lookup happens.
/// - `timestamp` (epoch milliseconds) pins the snapshot; otherwise the
///   service clock supplies the instant.
///
/// ## Returns
/// - `200 OK` with the snapshot JSON
/// - `400 BAD REQUEST` with `{ "error": … }` for a missing parameter, an
///   unknown zone or an unparsable timestamp
pub async fn current_time_handler(
    Extension(service): Extension<Arc<TimezoneService>>,
    Query(query): Query<CurrentTimeQuery>,
) -> impl IntoResponse {
    let Some(timezone) = present(query.timezone.as_ref()) else {
        return bad_request("timezone is required");
    };

    let at = match present(query.timestamp.as_ref()) {
        Some(raw) => match Instant::parse_epoch_millis(raw) {
            Ok(at) => Some(at),
            Err(err) => return bad_request(err.to_string()),
        },
        None => None,
    };

    match service.time_info(timezone, at) {
        Ok(info) => {
            let next_transition = match info.next_transition.map(|at| at.rfc3339_at(0)) {
                Some(Ok(rendered)) => Some(rendered),
                Some(Err(err)) => return bad_request(err.to_string()),
                None => None,
            };
            Json(CurrentTimeResp {
                timezone: info.zone.to_string(),
                formatted_time: info.formatted_time,
                formatted_date: info.formatted_date,
                utc_offset: info.utc_offset,
                dst_active: info.dst_active,
                abbreviation: info.abbreviation,
                epoch_ms: info.instant.epoch_millis(),
                next_transition,
            })
            .into_response()
        }
        Err(err) => bad_request(err.to_string()),
    }
}

/// Handler for `POST /api/timezone`.
///
/// ## Behavior
/// - `fromTimezone` and `toTimezone` are both required.
/// - When `iso` is supplied it is interpreted as a wall-clock reading on
///   `fromTimezone`'s clocks and takes precedence over `timestamp`.
/// - With neither `iso` nor `timestamp`, the service clock's current
///   instant is converted.
///
/// ## Returns
/// - `200 OK` with the conversion JSON; `localTimeKind` tells whether the
///   input was unique, skipped (`gap`) or repeated (`overlap`)
/// - `400 BAD REQUEST` with `{ "error": … }` for missing zones, unknown
///   zones or an unparsable `iso` reading
pub async fn convert_handler(
    Extension(service): Extension<Arc<TimezoneService>>,
    Json(request): Json<ConvertRequest>,
) -> impl IntoResponse {
    let (Some(from), Some(to)) = (
        present(request.from_timezone.as_ref()),
        present(request.to_timezone.as_ref()),
    ) else {
        return bad_request("fromTimezone and toTimezone are required");
    };

    let converted = match present(request.iso.as_ref()) {
        Some(iso) => service.convert_local(from, to, iso),
        None => service.convert_at(from, to, request.timestamp.map(Instant::from_epoch_millis)),
    };

    let conversion = match converted {
        Ok(conversion) => conversion,
        Err(err) => return bad_request(err.to_string()),
    };

    let (source_iso, target_iso) = match (conversion.source_iso(), conversion.target_iso()) {
        (Ok(source), Ok(target)) => (source, target),
        (Err(err), _) | (_, Err(err)) => return bad_request(err.to_string()),
    };

    let formatter = service.formatter();
    Json(ConvertResp {
        source_iso,
        target_iso,
        time_difference_minutes: conversion.difference_minutes,
        source_offset: conversion.source.offset.utc_label(),
        target_offset: conversion.target.offset.utc_label(),
        source_time: formatter.format_time(conversion.source.local),
        source_date: formatter.format_date(conversion.source.local),
        target_time: formatter.format_time(conversion.target.local),
        target_date: formatter.format_date(conversion.target.local),
        local_time_kind: conversion.local_time_kind.as_str().to_owned(),
    })
    .into_response()
}

/// Handler for `GET /api/timezone/zones`.
///
/// Returns every zone identifier the rule store resolves, sorted, with a
/// count. This list is the exact set the other endpoints accept.
pub async fn zones_handler(
    Extension(service): Extension<Arc<TimezoneService>>,
) -> impl IntoResponse {
    let zones: Vec<String> = service
        .zone_ids()
        .iter()
        .map(|zone| zone.to_string())
        .collect();
    let count = zones.len();
    Json(ZonesResp { zones, count })
}
