//! Infrastructure layer for external integrations.
//!
//! This layer implements the gateway traits defined by the domain layer.
//!
//! # Modules
//!
//! - [`backend`] - reqwest transport to the compute backend
//! - [`cache`] - Bounded in-memory geocoding cache
//! - [`geocoding`] - Photon place search

pub mod backend;
pub mod cache;
pub mod geocoding;
