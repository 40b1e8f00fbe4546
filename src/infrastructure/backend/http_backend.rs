//! reqwest-backed transport to the compute backend.

use async_trait::async_trait;
use axum::http::header::LOCATION;
use reqwest::{Client, redirect::Policy};
use serde_json::Value;

use crate::domain::gateways::{BackendError, BackendReply, BackendRequest, ComputeBackend};

const MAX_DETAIL_LEN: usize = 500;

/// HTTP client bound to one backend base URL.
///
/// Redirects are never followed; a 3xx answer is reported as
/// [`BackendError::Redirect`]. No timeout is set and no call is retried.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    http: Client,
    base_url: String,
}

impl HttpBackend {
    /// Creates a client for `base_url` (e.g. `http://localhost:8000/api/py`).
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialized.
    pub fn new(base_url: impl Into<String>) -> Result<Self, reqwest::Error> {
        let http = Client::builder().redirect(Policy::none()).build()?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl ComputeBackend for HttpBackend {
    async fn send(&self, request: BackendRequest) -> Result<BackendReply, BackendError> {
        let url = self.endpoint(request.path);
        tracing::debug!(method = %request.method, %url, "forwarding to backend");

        let mut builder = self
            .http
            .request(request.method.clone(), &url)
            .headers(request.headers);
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| {
            metrics::counter!("backend_requests_total", "outcome" => "unreachable").increment(1);
            tracing::warn!(%url, error = %e, "backend unreachable");
            BackendError::Unreachable(e.to_string())
        })?;

        let status = response.status();

        if status.is_redirection() {
            metrics::counter!("backend_requests_total", "outcome" => "redirect").increment(1);
            let location = response
                .headers()
                .get(LOCATION)
                .and_then(|v| v.to_str().ok())
                .unwrap_or("<no location>")
                .to_string();
            tracing::warn!(%url, status = status.as_u16(), %location, "backend redirect refused");
            return Err(BackendError::Redirect { status, location });
        }

        let text = response
            .text()
            .await
            .map_err(|e| BackendError::Unreachable(e.to_string()))?;

        if !status.is_success() {
            metrics::counter!("backend_requests_total", "outcome" => "error").increment(1);
            tracing::warn!(%url, status = status.as_u16(), "backend returned an error");
            return Err(BackendError::Status {
                status,
                detail: extract_detail(&text),
            });
        }

        metrics::counter!("backend_requests_total", "outcome" => "ok").increment(1);

        let body = if text.trim().is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&text).map_err(|e| BackendError::InvalidBody(e.to_string()))?
        };

        Ok(BackendReply { status, body })
    }
}

/// Pulls a human-readable message out of an error body.
///
/// Prefers the FastAPI `detail` field (stringified when it is structured),
/// then an `error` string, then the raw text.
pub fn extract_detail(body: &str) -> Option<String> {
    let body = body.trim();
    if body.is_empty() {
        return None;
    }

    if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(body) {
        match map.get("detail") {
            Some(Value::String(detail)) => return Some(detail.clone()),
            Some(Value::Null) | None => {}
            Some(other) => return Some(other.to_string()),
        }
        if let Some(Value::String(error)) = map.get("error") {
            return Some(error.clone());
        }
    }

    Some(truncate(body, MAX_DETAIL_LEN))
}

fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}…", &text[..idx]),
        None => text.to_string(),
    }
}
