//! Helpers shared by the HTTP layer, the services and the CLI.
//!
//! - [`backend_url`] - Backend base URL resolution from deployment state
//! - [`forward_headers`] - Allow-listed header forwarding to the backend
//! - [`debounce`] - Debounced lookups with per-lookup cancellation

pub mod backend_url;
pub mod debounce;
pub mod forward_headers;
