use std::sync::Arc;

use crate::domain::gateways::Geocoder;
use crate::domain::geocoding::GeocodingResult;
use crate::infrastructure::cache::GeocodeCache;

/// Place search with a bounded result cache in front of the provider.
///
/// Queries are keyed case- and whitespace-insensitively. Only successful
/// provider answers are cached, so a transient outage is retried on the
/// next lookup.
pub struct GeocodingService {
    geocoder: Arc<dyn Geocoder>,
    cache: Arc<GeocodeCache>,
}

impl GeocodingService {
    pub fn new(geocoder: Arc<dyn Geocoder>, cache: Arc<GeocodeCache>) -> Self {
        Self { geocoder, cache }
    }

    pub fn cache(&self) -> &GeocodeCache {
        &self.cache
    }

    /// Returns places matching `query`, or an empty list on blank input or
    /// provider failure.
    pub async fn search(&self, query: &str) -> Vec<GeocodingResult> {
        let key = GeocodeCache::key(query);
        if key.is_empty() {
            return Vec::new();
        }

        if let Some(results) = self.cache.get(&key) {
            tracing::debug!(query = %key, hits = results.len(), "geocode cache hit");
            return results;
        }

        match self.geocoder.search(query.trim()).await {
            Ok(results) => {
                self.cache.insert(key, results.clone());
                metrics::counter!("geocode_lookups_total", "outcome" => "ok").increment(1);
                results
            }
            Err(err) => {
                tracing::warn!(query = %query.trim(), error = %err, "geocoding lookup failed");
                metrics::counter!("geocode_lookups_total", "outcome" => "error").increment(1);
                Vec::new()
            }
        }
    }
}
