//! DTOs for the templated advice endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::birth::BirthInput;

/// Request body for `POST /api/advice`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AdviceRequest {
    #[validate(nested)]
    pub partner_a: Option<BirthInput>,

    #[validate(nested)]
    pub partner_b: Option<BirthInput>,

    pub question: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AdviceResponse {
    pub advice: String,
    pub disclaimers: Vec<String>,
}
