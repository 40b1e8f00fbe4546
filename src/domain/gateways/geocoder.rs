//! Gateway trait for place search providers.

use async_trait::async_trait;

use crate::domain::geocoding::GeocodingResult;

#[derive(Debug, thiserror::Error)]
pub enum GeocodeError {
    #[error("geocoding request failed: {0}")]
    Request(String),

    #[error("geocoding provider returned {0}")]
    Status(u16),

    #[error("geocoding response could not be parsed: {0}")]
    Parse(String),
}

/// Free-text place search.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Geocoder: Send + Sync {
    /// Returns the places matching `query`, already filtered to settlement types.
    async fn search(&self, query: &str) -> Result<Vec<GeocodingResult>, GeocodeError>;
}
