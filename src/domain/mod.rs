//! Domain layer: birth data, local scoring and safety rules, gateway traits.
//!
//! Nothing here performs I/O. Astrological computation proper belongs to the
//! external backend, reached through [`gateways::ComputeBackend`].
//!
//! - [`birth`] - Birth input entity and its validation
//! - [`scoring`] - Deterministic mock compatibility scorer
//! - [`advice`] - Templated advice on top of the scorer
//! - [`safety`] - Keyword safety router
//! - [`geocoding`] - Place results and timezone guess
//! - [`gateways`] - Traits implemented by the infrastructure layer

pub mod advice;
pub mod birth;
pub mod gateways;
pub mod geocoding;
pub mod safety;
pub mod scoring;
