//! Data Transfer Objects for API requests and responses.
//!
//! Proxy routes pass bodies through as raw JSON and have no DTOs here.

pub mod advice;
pub mod geocode;
pub mod health;
pub mod mock;
