//! Handler for place search.

use axum::{
    Json,
    extract::{Query, State},
};

use crate::api::dto::geocode::GeocodeQuery;
use crate::domain::geocoding::GeocodingResult;
use crate::state::AppState;

/// Searches places for the birth-place picker.
///
/// # Endpoint
///
/// `GET /api/geocode?q=<query>`
///
/// Answers `[]` for a blank query or when the provider fails.
///
/// # Response
///
/// ```json
/// [
///   {
///     "display_name": "Pune, Maharashtra, India",
///     "lat": 18.5204,
///     "lon": 73.8567,
///     "tz": "Asia/Kolkata"
///   }
/// ]
/// ```
pub async fn geocode_handler(
    State(state): State<AppState>,
    Query(query): Query<GeocodeQuery>,
) -> Json<Vec<GeocodingResult>> {
    let results = state
        .geocoding_service
        .search(query.q.as_deref().unwrap_or_default())
        .await;

    Json(results)
}
