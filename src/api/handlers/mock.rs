//! Handler for the offline compatibility scorer.

use axum::Json;
use validator::Validate;

use crate::api::dto::mock::MockCompatibilityRequest;
use crate::api::extract::ApiJson;
use crate::domain::scoring::{MockCompatibility, calculate_compatibility};
use crate::error::AppError;

/// Scores two partners with the deterministic mock scorer.
///
/// `POST /api/mock/compatibility`
pub async fn mock_compatibility_handler(
    ApiJson(payload): ApiJson<MockCompatibilityRequest>,
) -> Result<Json<MockCompatibility>, AppError> {
    payload.validate()?;

    let (Some(partner_a), Some(partner_b)) = (payload.partner_a, payload.partner_b) else {
        return Err(AppError::validation("Missing partnerA or partnerB data", None));
    };

    Ok(Json(calculate_compatibility(&partner_a, &partner_b)))
}
