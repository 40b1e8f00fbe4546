//! Gateway trait for the external astrology compute backend.

use async_trait::async_trait;
use axum::http::{HeaderMap, Method, StatusCode};
use serde_json::Value;

/// One outbound call to the backend.
#[derive(Debug, Clone)]
pub struct BackendRequest {
    pub method: Method,
    /// Path relative to the backend base URL, e.g. `/chart`.
    pub path: &'static str,
    pub headers: HeaderMap,
    pub body: Option<Value>,
}

impl BackendRequest {
    pub fn post(path: &'static str, headers: HeaderMap, body: Value) -> Self {
        Self {
            method: Method::POST,
            path,
            headers,
            body: Some(body),
        }
    }

    pub fn get(path: &'static str, headers: HeaderMap) -> Self {
        Self {
            method: Method::GET,
            path,
            headers,
            body: None,
        }
    }
}

/// Successful (2xx) backend answer.
#[derive(Debug, Clone, PartialEq)]
pub struct BackendReply {
    pub status: StatusCode,
    pub body: Value,
}

/// Failures of a single backend call. No call is retried.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    /// Connection refused, DNS failure or a broken transfer.
    #[error("backend unreachable: {0}")]
    Unreachable(String),

    /// The backend answered with a redirect, which is never followed.
    #[error("backend redirected ({status}) to {location}")]
    Redirect { status: StatusCode, location: String },

    /// The backend answered with a non-2xx status.
    #[error("backend returned {status}")]
    Status {
        status: StatusCode,
        detail: Option<String>,
    },

    /// A 2xx answer whose body is not JSON.
    #[error("backend returned an unreadable body: {0}")]
    InvalidBody(String),
}

/// Transport to the compute backend.
///
/// # Implementations
///
/// - [`crate::infrastructure::backend::HttpBackend`] - reqwest client
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ComputeBackend: Send + Sync {
    /// Sends one request and classifies the answer.
    ///
    /// # Errors
    ///
    /// See [`BackendError`] for the failure classes.
    async fn send(&self, request: BackendRequest) -> Result<BackendReply, BackendError>;
}
