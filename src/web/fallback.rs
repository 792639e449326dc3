use axum::{Json, http::StatusCode, response::IntoResponse};
use serde_json::json;

/// Default 404 Not Found handler.
///
/// # Overview
///
/// This handler is intended to be used as the final fallback
/// in an Axum router.
///
/// It returns `404 Not Found` with the same JSON error shape the API
/// endpoints use.
///
/// # Design Notes
///
/// - Application-agnostic
/// - Can be replaced by application-specific handlers if needed
pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "not found" })))
}
