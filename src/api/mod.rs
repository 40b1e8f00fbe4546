//! REST API layer for HTTP request/response handling.
//!
//! # Modules
//!
//! - [`dto`] - Request/response types for the locally answered routes
//! - [`extract`] - JSON extractor with the `{error}` rejection envelope
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Tracing and rate limiting
//! - [`routes`] - Route configuration

pub mod dto;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod routes;
