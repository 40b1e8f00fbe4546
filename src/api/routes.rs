//! API route configuration.

use crate::api::handlers::{
    advice_handler, chart_chat_handler, chart_handler, chart_insights_handler,
    compatibility_chat_handler, compatibility_handler, compatibility_insights_handler,
    geocode_handler, mock_compatibility_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All API routes, mounted under `/api`.
///
/// # Endpoints
///
/// - `POST /chart`                    - Natal chart (backend)
/// - `POST /compatibility`            - Ashtakoota matching (backend)
/// - `POST /insights/chart`           - Chart insights (backend)
/// - `POST /insights/compatibility`   - Compatibility insights (backend)
/// - `POST /chat/chart`               - Chat about a chart (backend)
/// - `POST /chat/compatibility`       - Chat about a match (backend)
/// - `POST /advice`                   - Templated advice (local)
/// - `POST /mock/compatibility`       - Deterministic mock score (local)
/// - `GET  /geocode?q=`               - Cached place search
///
/// `/compatibility/insights`, `/chat`, `/chart-chat` and `/match-chat` are
/// kept as aliases for older clients. `GET /api/health` is mounted by
/// [`crate::routes::app_router`] outside the rate limiter.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/chart", post(chart_handler))
        .route("/compatibility", post(compatibility_handler))
        .route("/insights/chart", post(chart_insights_handler))
        .route(
            "/insights/compatibility",
            post(compatibility_insights_handler),
        )
        .route(
            "/compatibility/insights",
            post(compatibility_insights_handler),
        )
        .route("/chat/chart", post(chart_chat_handler))
        .route("/chat", post(chart_chat_handler))
        .route("/chart-chat", post(chart_chat_handler))
        .route("/chat/compatibility", post(compatibility_chat_handler))
        .route("/match-chat", post(compatibility_chat_handler))
        .route("/advice", post(advice_handler))
        .route("/mock/compatibility", post(mock_compatibility_handler))
        .route("/geocode", get(geocode_handler))
}
