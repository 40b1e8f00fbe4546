//! Handler for templated relationship advice.

use axum::Json;
use validator::Validate;

use crate::api::dto::advice::{AdviceRequest, AdviceResponse};
use crate::api::extract::ApiJson;
use crate::domain::advice::{DISCLAIMERS, SAFETY_DISCLAIMER, generate_advice};
use crate::domain::safety::check_safety;
use crate::error::AppError;

const MISSING_FIELDS: &str = "partnerA, partnerB, and question are required";

/// Answers a question about two partners without calling the backend.
///
/// # Endpoint
///
/// `POST /api/advice` with `{ "partnerA": {...}, "partnerB": {...}, "question": "..." }`
///
/// Questions touching self-harm or abuse are answered with crisis resources
/// instead of astrology.
///
/// # Errors
///
/// - **400** `partnerA, partnerB, and question are required`
/// - **400** `Invalid birth data` with per-field `details`
pub async fn advice_handler(
    ApiJson(payload): ApiJson<AdviceRequest>,
) -> Result<Json<AdviceResponse>, AppError> {
    payload.validate()?;

    let AdviceRequest {
        partner_a: Some(partner_a),
        partner_b: Some(partner_b),
        question: Some(question),
    } = payload
    else {
        return Err(AppError::validation(MISSING_FIELDS, None));
    };

    if question.is_empty() {
        return Err(AppError::validation(MISSING_FIELDS, None));
    }

    let safety = check_safety(&question);
    if let Some(response) = safety.response {
        let mut disclaimers = response.resources;
        disclaimers.push(SAFETY_DISCLAIMER.to_string());

        return Ok(Json(AdviceResponse {
            advice: response.message,
            disclaimers,
        }));
    }

    Ok(Json(AdviceResponse {
        advice: generate_advice(&partner_a, &partner_b, &question),
        disclaimers: DISCLAIMERS.iter().map(|d| d.to_string()).collect(),
    }))
}
