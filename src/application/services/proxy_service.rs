//! Backend proxy service: request shape checks, forwarding and error mapping.

use axum::http::HeaderMap;
use serde_json::{Map, Value};
use std::sync::Arc;

use crate::domain::gateways::{BackendError, BackendReply, BackendRequest, ComputeBackend};
use crate::error::{AppError, BACKEND_UNAVAILABLE};
use crate::utils::forward_headers::forwarded_headers;

/// Backend capability reachable through the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendRoute {
    Chart,
    Compatibility,
    ChartInsights,
    CompatibilityInsights,
    ChartChat,
    CompatibilityChat,
}

impl BackendRoute {
    pub const ALL: &'static [BackendRoute] = &[
        BackendRoute::Chart,
        BackendRoute::Compatibility,
        BackendRoute::ChartInsights,
        BackendRoute::CompatibilityInsights,
        BackendRoute::ChartChat,
        BackendRoute::CompatibilityChat,
    ];

    /// Path relative to the backend base URL.
    pub fn path(self) -> &'static str {
        match self {
            BackendRoute::Chart => "/chart",
            BackendRoute::Compatibility => "/compatibility",
            BackendRoute::ChartInsights => "/insights/chart",
            BackendRoute::CompatibilityInsights => "/insights/compatibility",
            BackendRoute::ChartChat => "/chat/chart",
            BackendRoute::CompatibilityChat => "/chat/compatibility",
        }
    }

    /// Top-level body fields that must be present and non-empty.
    pub fn required_fields(self) -> &'static [&'static str] {
        match self {
            BackendRoute::Chart | BackendRoute::ChartInsights => &["birth"],
            BackendRoute::Compatibility | BackendRoute::CompatibilityInsights => {
                &["partnerA", "partnerB"]
            }
            BackendRoute::ChartChat => &["chart", "question"],
            BackendRoute::CompatibilityChat => &["result", "question"],
        }
    }

    fn missing_fields_message(self) -> &'static str {
        match self {
            BackendRoute::Chart | BackendRoute::ChartInsights => "Missing birth data",
            BackendRoute::Compatibility | BackendRoute::CompatibilityInsights => {
                "Missing partnerA or partnerB data"
            }
            BackendRoute::ChartChat => "Chart and question are required",
            BackendRoute::CompatibilityChat => "Compatibility result and question are required",
        }
    }

    /// Error text used when the backend fails without a readable detail.
    fn fallback_error(self) -> &'static str {
        match self {
            BackendRoute::Chart => "Chart calculation failed",
            BackendRoute::Compatibility => "Backend calculation failed",
            BackendRoute::ChartInsights => "Chart insights failed",
            BackendRoute::CompatibilityInsights => "Compatibility insights failed",
            BackendRoute::ChartChat | BackendRoute::CompatibilityChat => {
                "Failed to get chat response"
            }
        }
    }
}

/// Backend connectivity as seen by the health probe.
#[derive(Debug, Clone, PartialEq)]
pub struct BackendHealth {
    pub connected: bool,
    /// Fields reported by the backend, or an `error` entry.
    pub details: Map<String, Value>,
}

impl BackendHealth {
    fn disconnected(reason: &str) -> Self {
        let mut details = Map::new();
        details.insert("error".to_string(), Value::String(reason.to_string()));

        Self {
            connected: false,
            details,
        }
    }
}

/// Mirrors the truthiness check clients rely on: `null`, `false`, `0` and
/// `""` count as missing.
fn is_present(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|n| n != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

/// Service forwarding validated requests to the compute backend.
///
/// Bodies are forwarded unchanged. Every call carries the allow-listed
/// inbound headers (see [`crate::utils::forward_headers`]).
pub struct ProxyService {
    backend: Arc<dyn ComputeBackend>,
}

impl ProxyService {
    pub fn new(backend: Arc<dyn ComputeBackend>) -> Self {
        Self { backend }
    }

    /// Checks the required fields of `route` are present in `body`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] naming the missing data.
    pub fn ensure_required(route: BackendRoute, body: &Value) -> Result<(), AppError> {
        let complete = route
            .required_fields()
            .iter()
            .all(|field| is_present(body.get(*field)));

        if complete {
            Ok(())
        } else {
            Err(AppError::validation(route.missing_fields_message(), None))
        }
    }

    /// Validates and forwards `body` to the backend endpoint of `route`.
    ///
    /// # Errors
    ///
    /// - [`AppError::Validation`] if a required field is missing
    /// - [`AppError::Backend`] with the backend's status on a non-2xx answer
    /// - [`AppError::BadGateway`] if the backend redirects
    /// - [`AppError::Unavailable`] if the backend cannot be reached
    /// - [`AppError::Internal`] if a 2xx answer is not JSON
    pub async fn forward(
        &self,
        route: BackendRoute,
        inbound: &HeaderMap,
        body: Value,
    ) -> Result<BackendReply, AppError> {
        Self::ensure_required(route, &body)?;

        let request = BackendRequest::post(route.path(), forwarded_headers(inbound), body);

        self.backend
            .send(request)
            .await
            .map_err(|err| map_backend_error(route, err))
    }

    /// Probes the backend `/health` endpoint. Never fails.
    pub async fn backend_health(&self, inbound: &HeaderMap) -> BackendHealth {
        let request = BackendRequest::get("/health", forwarded_headers(inbound));

        match self.backend.send(request).await {
            Ok(reply) => {
                let details = match reply.body {
                    Value::Object(map) => map,
                    Value::Null => Map::new(),
                    other => {
                        let mut map = Map::new();
                        map.insert("response".to_string(), other);
                        map
                    }
                };

                BackendHealth {
                    connected: true,
                    details,
                }
            }
            Err(BackendError::Unreachable(reason)) => {
                tracing::debug!(%reason, "backend health probe failed");
                BackendHealth::disconnected("Python backend not reachable")
            }
            Err(BackendError::InvalidBody(reason)) => {
                tracing::debug!(%reason, "backend health payload unreadable");
                BackendHealth::disconnected("Python backend returned an unreadable health payload")
            }
            Err(BackendError::Status { .. } | BackendError::Redirect { .. }) => {
                BackendHealth::disconnected("Python backend returned non-OK status")
            }
        }
    }
}

fn map_backend_error(route: BackendRoute, err: BackendError) -> AppError {
    match err {
        BackendError::Unreachable(_) => AppError::unavailable(BACKEND_UNAVAILABLE),
        BackendError::Redirect { status, location } => AppError::bad_gateway(format!(
            "Backend answered with a redirect ({status}) to {location}"
        )),
        BackendError::Status { status, detail } => AppError::backend(
            status,
            detail.unwrap_or_else(|| route.fallback_error().to_string()),
        ),
        BackendError::InvalidBody(reason) => {
            tracing::error!(path = route.path(), %reason, "backend returned a non-JSON body");
            AppError::internal("Backend returned an invalid response")
        }
    }
}
