//! HTTP middleware for observability and abuse protection.

pub mod rate_limit;
pub mod tracing;
