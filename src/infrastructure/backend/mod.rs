//! HTTP transport to the external compute backend.

mod http_backend;

pub use http_backend::{HttpBackend, extract_detail};
