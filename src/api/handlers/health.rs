//! Handler for the health endpoint.

use axum::{Json, extract::State, http::HeaderMap};
use chrono::{SecondsFormat, Utc};

use crate::api::dto::health::{BackendStatus, HealthResponse};
use crate::application::services::BackendHealth;
use crate::state::AppState;

/// Reports gateway liveness and backend connectivity.
///
/// # Endpoint
///
/// `GET /api/health`
///
/// Always answers `200 OK`; a failing backend only flips
/// `backend.connected` to `false` and sets `backend.error`.
///
/// # Response
///
/// ```json
/// {
///   "ok": true,
///   "version": "2.0.0",
///   "timestamp": "2026-01-01T00:00:00.000Z",
///   "backend": { "connected": true, "status": "healthy" }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Json<HealthResponse> {
    let BackendHealth {
        connected,
        mut details,
    } = state.proxy_service.backend_health(&headers).await;

    details.remove("connected");

    Json(HealthResponse {
        ok: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        backend: BackendStatus { connected, details },
    })
}
