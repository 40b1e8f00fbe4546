#![allow(dead_code)]

use astro_gateway::application::services::{GeocodingService, ProxyService};
use astro_gateway::domain::gateways::{GeocodeError, Geocoder};
use astro_gateway::domain::geocoding::GeocodingResult;
use astro_gateway::infrastructure::backend::HttpBackend;
use astro_gateway::infrastructure::cache::GeocodeCache;
use astro_gateway::state::AppState;
use async_trait::async_trait;
use axum::{
    Json, Router,
    body::Bytes,
    extract::OriginalUri,
    http::{HeaderMap, Method},
};
use serde_json::{Value, json};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Serves `routes` under `/api/py` on an ephemeral port and returns the
/// backend base URL.
pub async fn spawn_backend(routes: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let app = Router::new().nest("/api/py", routes);
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}/api/py")
}

/// Base URL on a port nobody listens on.
pub async fn unreachable_backend() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    format!("http://{addr}/api/py")
}

/// Answers every request with what it received, reporting the full path
/// including the `/api/py` prefix.
pub async fn echo(
    method: Method,
    OriginalUri(uri): OriginalUri,
    headers: HeaderMap,
    body: Bytes,
) -> Json<Value> {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };

    Json(json!({
        "method": method.as_str(),
        "path": uri.path(),
        "body": serde_json::from_slice::<Value>(&body).unwrap_or(Value::Null),
        "headers": {
            "content-type": header("content-type"),
            "authorization": header("authorization"),
            "cookie": header("cookie"),
            "x-vercel-protection-bypass": header("x-vercel-protection-bypass"),
            "x-test-marker": header("x-test-marker"),
        }
    }))
}

/// Fake backend echoing every call.
pub async fn spawn_echo_backend() -> String {
    spawn_backend(Router::new().fallback(echo)).await
}

/// Geocoder returning canned places and counting calls.
#[derive(Default)]
pub struct StubGeocoder {
    pub calls: AtomicUsize,
    pub fail: bool,
}

impl StubGeocoder {
    pub fn failing() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            fail: true,
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Geocoder for StubGeocoder {
    async fn search(&self, query: &str) -> Result<Vec<GeocodingResult>, GeocodeError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if self.fail {
            return Err(GeocodeError::Status(503));
        }

        Ok(vec![GeocodingResult {
            display_name: format!("{query}, Maharashtra, India"),
            lat: 18.5204,
            lon: 73.8567,
            tz: Some("Asia/Kolkata".to_string()),
        }])
    }
}

pub fn create_test_state_with(base_url: &str, geocoder: Arc<StubGeocoder>) -> AppState {
    let backend = HttpBackend::new(base_url).unwrap();

    AppState::new(
        ProxyService::new(Arc::new(backend)),
        GeocodingService::new(geocoder, Arc::new(GeocodeCache::new(10))),
    )
}

pub fn create_test_state(base_url: &str) -> AppState {
    create_test_state_with(base_url, Arc::new(StubGeocoder::default()))
}

pub fn birth(name: &str, date: &str, time: &str, lat: f64, lon: f64, city: &str) -> Value {
    json!({
        "name": name,
        "date": date,
        "time": time,
        "tz": "Asia/Kolkata",
        "lat": lat,
        "lon": lon,
        "city": city
    })
}

pub fn asha() -> Value {
    birth("Asha", "1990-05-15", "14:30", 19.076, 72.8777, "Mumbai")
}

pub fn ravi() -> Value {
    birth("Ravi", "1992-08-20", "06:15", 28.6139, 77.209, "Delhi")
}
