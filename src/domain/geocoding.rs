//! Place lookup results and the coordinate-based timezone guess.

use serde::{Deserialize, Serialize};

/// Place kinds worth offering as a birth location.
pub const PLACE_TYPES: &[&str] = &[
    "city", "town", "village", "hamlet", "suburb", "district", "county", "state", "locality",
    "region",
];

/// A selectable place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeocodingResult {
    pub display_name: String,
    pub lat: f64,
    pub lon: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tz: Option<String>,
}

pub fn is_place_type(kind: &str) -> bool {
    PLACE_TYPES.contains(&kind)
}

/// Guesses an IANA timezone from coordinates and an optional country name.
///
/// South Asia is resolved by country or bounding box; elsewhere the guess is
/// a coarse longitude band and falls back to `UTC`.
pub fn detect_timezone(lat: f64, lon: f64, country: Option<&str>) -> &'static str {
    if country == Some("India") || ((8.0..=37.0).contains(&lat) && (68.0..=97.0).contains(&lon)) {
        return "Asia/Kolkata";
    }
    if country == Some("Nepal") || ((26.0..=30.5).contains(&lat) && (80.0..=88.5).contains(&lon))
    {
        return "Asia/Kathmandu";
    }

    match country {
        Some("Sri Lanka") => return "Asia/Colombo",
        Some("Pakistan") => return "Asia/Karachi",
        Some("Bangladesh") => return "Asia/Dhaka",
        _ => {}
    }

    const LONGITUDE_BANDS: &[(f64, f64, &str)] = &[
        (-10.0, 2.0, "Europe/London"),
        (2.0, 16.0, "Europe/Paris"),
        (16.0, 30.0, "Europe/Athens"),
        (50.0, 60.0, "Asia/Dubai"),
        (90.0, 105.0, "Asia/Bangkok"),
        (105.0, 120.0, "Asia/Shanghai"),
        (120.0, 145.0, "Asia/Tokyo"),
        (145.0, 180.0, "Australia/Sydney"),
        (-130.0, -115.0, "America/Los_Angeles"),
        (-115.0, -100.0, "America/Denver"),
        (-100.0, -85.0, "America/Chicago"),
        (-85.0, -60.0, "America/New_York"),
    ];

    LONGITUDE_BANDS
        .iter()
        .find(|(west, east, _)| (*west..=*east).contains(&lon))
        .map(|(_, _, tz)| *tz)
        .unwrap_or("UTC")
}
