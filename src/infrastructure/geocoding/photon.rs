//! Photon (OpenStreetMap) place search.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use url::Url;

use crate::domain::gateways::{GeocodeError, Geocoder};
use crate::domain::geocoding::{GeocodingResult, detect_timezone, is_place_type};

/// Public Photon endpoint.
pub const DEFAULT_PHOTON_URL: &str = "https://photon.komoot.io/api/";

const RESULT_LIMIT: &str = "6";

#[derive(Debug, Deserialize)]
struct PhotonResponse {
    #[serde(default)]
    features: Vec<PhotonFeature>,
}

#[derive(Debug, Deserialize)]
struct PhotonFeature {
    #[serde(default)]
    properties: PhotonProperties,
    geometry: Option<PhotonGeometry>,
}

#[derive(Debug, Default, Deserialize)]
struct PhotonProperties {
    #[serde(rename = "type")]
    kind: Option<String>,
    name: Option<String>,
    state: Option<String>,
    country: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PhotonGeometry {
    #[serde(default)]
    coordinates: Vec<f64>,
}

impl PhotonFeature {
    fn into_result(self) -> Option<GeocodingResult> {
        if !self.properties.kind.as_deref().is_some_and(is_place_type) {
            return None;
        }

        let coordinates = self.geometry.map(|g| g.coordinates).unwrap_or_default();
        // GeoJSON order: [lon, lat]
        let lon = coordinates.first().copied().unwrap_or(0.0);
        let lat = coordinates.get(1).copied().unwrap_or(0.0);

        let PhotonProperties {
            name,
            state,
            country,
            ..
        } = self.properties;

        let tz = detect_timezone(lat, lon, country.as_deref()).to_string();
        let display_name = [name, state, country]
            .into_iter()
            .flatten()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(", ");

        Some(GeocodingResult {
            display_name,
            lat,
            lon,
            tz: Some(tz),
        })
    }
}

/// Parses a Photon GeoJSON answer into selectable places.
pub fn parse_features(body: &str) -> Result<Vec<GeocodingResult>, GeocodeError> {
    let response: PhotonResponse =
        serde_json::from_str(body).map_err(|e| GeocodeError::Parse(e.to_string()))?;

    Ok(response
        .features
        .into_iter()
        .filter_map(PhotonFeature::into_result)
        .collect())
}

#[derive(Debug, Clone)]
pub struct PhotonGeocoder {
    http: Client,
    endpoint: Url,
}

impl PhotonGeocoder {
    pub fn new(endpoint: Url) -> Self {
        Self {
            http: Client::new(),
            endpoint,
        }
    }
}

#[async_trait]
impl Geocoder for PhotonGeocoder {
    async fn search(&self, query: &str) -> Result<Vec<GeocodingResult>, GeocodeError> {
        let response = self
            .http
            .get(self.endpoint.clone())
            .query(&[("q", query), ("limit", RESULT_LIMIT), ("lang", "en")])
            .send()
            .await
            .map_err(|e| GeocodeError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(GeocodeError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| GeocodeError::Request(e.to_string()))?;

        parse_features(&body)
    }
}
