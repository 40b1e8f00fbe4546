//! Query parameters for place search.

use serde::Deserialize;
use serde_with::{NoneAsEmptyString, serde_as};

/// Query string of `GET /api/geocode`.
///
/// `?q=` and a missing `q` both mean "no query".
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct GeocodeQuery {
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub q: Option<String>,
}
