//! Handlers relaying requests to the compute backend.
//!
//! Each handler checks the route's required fields, forwards the body
//! unchanged and answers with the backend's status and JSON.

use axum::{Json, extract::State, http::HeaderMap, http::StatusCode};
use serde_json::Value;

use crate::api::extract::ApiJson;
use crate::application::services::BackendRoute;
use crate::error::AppError;
use crate::state::AppState;

type Relayed = Result<(StatusCode, Json<Value>), AppError>;

async fn relay(state: &AppState, route: BackendRoute, headers: &HeaderMap, body: Value) -> Relayed {
    let reply = state.proxy_service.forward(route, headers, body).await?;

    Ok((reply.status, Json(reply.body)))
}

/// Calculates a natal chart.
///
/// # Endpoint
///
/// `POST /api/chart`
///
/// # Request Body
///
/// ```json
/// {
///   "birth": {
///     "name": "Asha",
///     "date": "1990-05-15",
///     "time": "14:30",
///     "tz": "Asia/Kolkata",
///     "lat": 19.076,
///     "lon": 72.8777
///   }
/// }
/// ```
///
/// # Errors
///
/// - **400**: `birth` missing or body is not JSON
/// - **502**: backend answered with a redirect
/// - **503**: backend unreachable
/// - other statuses are relayed from the backend
pub async fn chart_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiJson(body): ApiJson<Value>,
) -> Relayed {
    relay(&state, BackendRoute::Chart, &headers, body).await
}

/// Computes Ashtakoota compatibility for two partners.
///
/// # Endpoint
///
/// `POST /api/compatibility` with `{ "partnerA": {...}, "partnerB": {...} }`
///
/// # Errors
///
/// - **400** `Missing partnerA or partnerB data`
/// - **503** backend unreachable
pub async fn compatibility_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiJson(body): ApiJson<Value>,
) -> Relayed {
    relay(&state, BackendRoute::Compatibility, &headers, body).await
}

/// `POST /api/insights/chart`
pub async fn chart_insights_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiJson(body): ApiJson<Value>,
) -> Relayed {
    relay(&state, BackendRoute::ChartInsights, &headers, body).await
}

/// `POST /api/insights/compatibility`
pub async fn compatibility_insights_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiJson(body): ApiJson<Value>,
) -> Relayed {
    relay(&state, BackendRoute::CompatibilityInsights, &headers, body).await
}

/// Answers a question about a previously calculated chart.
///
/// `POST /api/chat/chart` with `{ "chart": {...}, "question": "..." }`
pub async fn chart_chat_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiJson(body): ApiJson<Value>,
) -> Relayed {
    relay(&state, BackendRoute::ChartChat, &headers, body).await
}

/// Answers a question about a compatibility result.
///
/// `POST /api/chat/compatibility` with `{ "result": {...}, "question": "..." }`
pub async fn compatibility_chat_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiJson(body): ApiJson<Value>,
) -> Relayed {
    relay(&state, BackendRoute::CompatibilityChat, &headers, body).await
}
