//! Services for the application layer.

pub mod geocoding_service;
pub mod proxy_service;

pub use geocoding_service::GeocodingService;
pub use proxy_service::{BackendHealth, BackendRoute, ProxyService};
