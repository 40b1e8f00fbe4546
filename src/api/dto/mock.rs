//! DTO for the offline compatibility scorer.

use serde::Deserialize;
use validator::Validate;

use crate::domain::birth::BirthInput;

/// Request body for `POST /api/mock/compatibility`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MockCompatibilityRequest {
    #[validate(nested)]
    pub partner_a: Option<BirthInput>,

    #[validate(nested)]
    pub partner_b: Option<BirthInput>,
}
