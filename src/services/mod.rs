use crate::models::{AppState, StatsOrigin, StatsSnapshot, StoreId};
use chrono::Utc;
use std::sync::Arc;

pub mod cache;
pub mod timeout;


use timeout::{guard, Guarded};

/// Serves a store's statistics from the cache, recomputing under the
/// configured deadline on a miss. Only computed snapshots are cached; a
/// fallback is returned as-is so the next request tries again.
#[tracing::instrument(skip(state))]
pub async fn load_store_stats(state: &AppState, store_id: StoreId) -> (StatsSnapshot, StatsOrigin) {
    if let Some(snapshot) = state.cache.get(store_id) {
        tracing::debug!("stats cache hit");
        return (snapshot, StatsOrigin::Cache);
    }

    let source = Arc::clone(&state.source);
    let computation = async move {
        let snapshot = source.store_stats(store_id).await?;
        snapshot.validate()?;
        Ok::<_, crate::errors::StatsError>(snapshot)
    };

    match guard(computation, state.stats_timeout).await {
        Guarded::Completed(snapshot) => {
            state.cache.set(store_id, snapshot.clone());
            (snapshot, StatsOrigin::Computed)
        }
        other => (other.or_fallback(StatsSnapshot::empty()), StatsOrigin::Fallback),
    }
}

pub fn invalidate_store_stats(state: &AppState, store_id: StoreId) {
    state.cache.invalidate(store_id);
}

pub fn record_access(state: &AppState, store_id: StoreId, visitor: &str) {
    state.access_log.record(store_id, visitor, Utc::now());
}
