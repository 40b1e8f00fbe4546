//! Birth data supplied for every chart and compatibility request.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use validator::Validate;

static DATE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").unwrap());

static TIME_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{2}:[0-9]{2}$").unwrap());

fn default_timezone() -> String {
    "Asia/Kolkata".to_string()
}

/// Birth moment and place of one person.
///
/// Field shapes mirror the backend request schema: `YYYY-MM-DD` date,
/// 24h `HH:MM` time, IANA timezone and decimal coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct BirthInput {
    #[serde(default)]
    pub name: String,

    #[validate(regex(path = "*DATE_REGEX", message = "Date must be YYYY-MM-DD"))]
    pub date: String,

    #[validate(regex(path = "*TIME_REGEX", message = "Time must be HH:MM"))]
    pub time: String,

    #[serde(default = "default_timezone")]
    pub tz: String,

    #[validate(range(min = -90.0, max = 90.0))]
    pub lat: f64,

    #[validate(range(min = -180.0, max = 180.0))]
    pub lon: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
}

impl BirthInput {
    /// Whether the form behind this input counts as filled in.
    ///
    /// A zero latitude or longitude means "no city selected". This also
    /// rejects real places on the equator or the prime meridian; the rule is
    /// kept as-is until the product decides otherwise.
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.date.is_empty()
            && !self.time.is_empty()
            && self.lat != 0.0
            && self.lon != 0.0
    }

    /// City label, empty when none was selected.
    pub fn city_label(&self) -> &str {
        self.city.as_deref().unwrap_or("")
    }
}
