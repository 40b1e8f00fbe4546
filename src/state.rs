use std::sync::Arc;

use crate::application::services::{GeocodingService, ProxyService};

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub proxy_service: Arc<ProxyService>,
    pub geocoding_service: Arc<GeocodingService>,
}

impl AppState {
    pub fn new(proxy_service: ProxyService, geocoding_service: GeocodingService) -> Self {
        Self {
            proxy_service: Arc::new(proxy_service),
            geocoding_service: Arc::new(geocoding_service),
        }
    }
}
