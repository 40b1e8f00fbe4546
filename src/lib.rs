//! # Astro Gateway
//!
//! HTTP gateway in front of a Vedic astrology compute backend, built with Axum.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Birth data, mock scoring, safety filter and gateway traits
//! - **Application Layer** ([`application`]) - Backend proxying and cached place search
//! - **Infrastructure Layer** ([`infrastructure`]) - reqwest clients and the geocoding cache
//! - **API Layer** ([`api`]) - REST handlers, DTOs and middleware
//!
//! ## Features
//!
//! - Chart, compatibility, insight and chat routes relayed to the backend
//! - Allow-listed header and cookie forwarding
//! - Deterministic offline compatibility scoring and templated advice
//! - Keyword safety filter in front of free-text questions
//! - Cached place search with timezone guessing
//! - Rate limiting and structured logging
//!
//! ## Quick Start
//!
//! ```bash
//! export PYTHON_API_URL="http://localhost:8000/api/py"
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{BackendRoute, GeocodingService, ProxyService};
    pub use crate::domain::birth::BirthInput;
    pub use crate::domain::geocoding::GeocodingResult;
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
