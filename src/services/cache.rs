//! Per-store statistics snapshots with lazy TTL expiry.
//!
//! An entry is served while its age is at most [`CACHE_TTL`]. The read that
//! finds an older entry removes it; nothing sweeps the map in the background.
//! The map has no size cap and grows with the number of distinct stores.

use dashmap::DashMap;
use tokio::time::Instant;

use crate::config::CACHE_TTL;
use crate::models::{CacheEntry, StatsSnapshot, StoreId};

#[derive(Default)]
pub struct StatsCache {
    entries: DashMap<StoreId, CacheEntry>,
}

impl StatsCache {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Returns the snapshot for `store_id` if it is still fresh.
    ///
    /// An expired entry is deleted before `None` is returned.
    pub fn get(&self, store_id: StoreId) -> Option<StatsSnapshot> {
        let now = Instant::now();
        match self.entries.get(&store_id) {
            Some(entry) if entry.age(now) <= CACHE_TTL => return Some(entry.payload.clone()),
            Some(_) => {}
            None => return None,
        }

        // Re-check under the shard lock so a concurrent `set` is not lost.
        let removed = self
            .entries
            .remove_if(&store_id, |_, entry| entry.age(now) > CACHE_TTL);
        if removed.is_some() {
            tracing::debug!(store_id, "expired stats snapshot evicted");
        }
        None
    }

    /// Stores `payload` for `store_id`, replacing any previous entry.
    pub fn set(&self, store_id: StoreId, payload: StatsSnapshot) {
        self.entries.insert(store_id, CacheEntry::new(payload));
    }

    pub fn invalidate(&self, store_id: StoreId) {
        if self.entries.remove(&store_id).is_some() {
            tracing::debug!(store_id, "stats snapshot invalidated");
        }
    }

    pub fn clear(&self) {
        self.entries.clear();
    }

    /// Number of stored entries, including expired ones no read has found yet.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
