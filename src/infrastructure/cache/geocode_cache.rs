//! Bounded in-memory cache of geocoding results.

use std::collections::{HashMap, VecDeque};
use std::sync::{Mutex, PoisonError};
use tracing::debug;

use crate::domain::geocoding::GeocodingResult;

/// Default number of cached queries.
pub const DEFAULT_CAPACITY: usize = 200;

#[derive(Debug, Default)]
struct Entries {
    values: HashMap<String, Vec<GeocodingResult>>,
    insertion_order: VecDeque<String>,
}

/// Query → results map with FIFO eviction by insertion order.
///
/// Reads do not refresh an entry's position, so this is not an LRU.
/// Overwriting a key replaces its results and keeps its original slot.
#[derive(Debug)]
pub struct GeocodeCache {
    capacity: usize,
    entries: Mutex<Entries>,
}

impl GeocodeCache {
    /// Creates a cache holding at most `capacity` queries (at least one).
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            entries: Mutex::new(Entries::default()),
        }
    }

    /// Normalizes a raw query into its cache key.
    pub fn key(query: &str) -> String {
        query.trim().to_lowercase()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.lock().values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, key: &str) -> bool {
        self.lock().values.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<Vec<GeocodingResult>> {
        self.lock().values.get(key).cloned()
    }

    /// Stores `results` under `key`.
    ///
    /// Returns the evicted key when a new key had to make room.
    pub fn insert(&self, key: String, results: Vec<GeocodingResult>) -> Option<String> {
        let mut entries = self.lock();

        if let Some(existing) = entries.values.get_mut(&key) {
            *existing = results;
            return None;
        }

        let evicted = if entries.values.len() >= self.capacity {
            let oldest = entries.insertion_order.pop_front();
            if let Some(oldest) = &oldest {
                entries.values.remove(oldest);
                debug!(evicted = %oldest, "geocode cache full, evicting oldest entry");
            }
            oldest
        } else {
            None
        };

        entries.insertion_order.push_back(key.clone());
        entries.values.insert(key, results);

        evicted
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Entries> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for GeocodeCache {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
