//! Process-local caches.
//!
//! - [`GeocodeCache`] - bounded FIFO cache of place search results

mod geocode_cache;

pub use geocode_cache::{DEFAULT_CAPACITY, GeocodeCache};
