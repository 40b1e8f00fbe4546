//! DTOs for the health endpoint.

use serde::Serialize;
use serde_json::{Map, Value};

/// Health payload. Always served with `200 OK`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub ok: bool,
    pub version: String,
    pub timestamp: String,
    pub backend: BackendStatus,
}

/// Backend connectivity with the fields the backend reported about itself.
#[derive(Debug, Serialize)]
pub struct BackendStatus {
    pub connected: bool,

    #[serde(flatten)]
    pub details: Map<String, Value>,
}
