//! Application layer services.
//!
//! Services coordinate the domain gateways on behalf of HTTP handlers and
//! the admin CLI.
//!
//! # Available Services
//!
//! - [`services::proxy_service::ProxyService`] - Forwarding to the compute backend
//! - [`services::geocoding_service::GeocodingService`] - Cached place search

pub mod services;
