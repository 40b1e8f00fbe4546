//! HTTP server initialization and runtime setup.
//!
//! Wires the outbound clients into the services and runs the Axum server
//! until Ctrl-C.

use crate::application::services::{GeocodingService, ProxyService};
use crate::config::Config;
use crate::infrastructure::backend::HttpBackend;
use crate::infrastructure::cache::GeocodeCache;
use crate::infrastructure::geocoding::PhotonGeocoder;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use url::Url;

/// Builds the application state from configuration.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be built or `GEOCODER_URL`
/// is not a valid URL.
pub fn build_state(config: &Config) -> Result<AppState> {
    let backend = HttpBackend::new(&config.backend_url).context("Failed to build backend client")?;
    tracing::info!(backend = backend.base_url(), "Compute backend configured");

    let geocoder_url = Url::parse(&config.geocoder_url).context("Invalid GEOCODER_URL")?;
    let geocoder = PhotonGeocoder::new(geocoder_url);
    let cache = Arc::new(GeocodeCache::new(config.geocode_cache_capacity));

    Ok(AppState::new(
        ProxyService::new(Arc::new(backend)),
        GeocodingService::new(Arc::new(geocoder), cache),
    ))
}

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - State construction fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let state = build_state(&config)?;

    let app = app_router(state, config.behind_proxy);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }

    tracing::info!("Shutdown signal received");
}
