//! Trait definitions for the external services this gateway talks to.
//!
//! Implementations live in `crate::infrastructure`; mocks are generated via
//! `mockall` for unit tests.

pub mod compute_backend;
pub mod geocoder;

pub use compute_backend::{BackendError, BackendReply, BackendRequest, ComputeBackend};
pub use geocoder::{GeocodeError, Geocoder};

#[cfg(test)]
pub use compute_backend::MockComputeBackend;
#[cfg(test)]
pub use geocoder::MockGeocoder;
