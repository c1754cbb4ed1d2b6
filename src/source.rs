use std::collections::HashSet;

use async_trait::async_trait;
use chrono::{DateTime, Datelike, Timelike, Utc};
use dashmap::DashMap;

use crate::errors::StatsError;
use crate::models::{AccessCounts, HourlyCount, StatsSnapshot, StoreId, STATS_SCHEMA_VERSION};


/// Produces fresh statistics for a store. Implementations may be slow or fail;
/// callers wrap them in the timeout guard.
#[async_trait]
pub trait StatsSource: Send + Sync {
    async fn store_stats(&self, store_id: StoreId) -> Result<StatsSnapshot, StatsError>;
}

#[derive(Debug, Clone)]
pub struct AccessRecord {
    pub visitor: String,
    pub at: DateTime<Utc>,
}

/// In-memory log of store page visits. Calendar boundaries are UTC.
///
/// Computing a store's statistics drops its visits from earlier months.
#[derive(Default)]
pub struct AccessLog {
    records: DashMap<StoreId, Vec<AccessRecord>>,
}

impl AccessLog {
    pub fn new() -> Self {
        Self {
            records: DashMap::new(),
        }
    }

    pub fn record(&self, store_id: StoreId, visitor: impl Into<String>, at: DateTime<Utc>) {
        self.records.entry(store_id).or_default().push(AccessRecord {
            visitor: visitor.into(),
            at,
        });
    }

    pub fn stats_at(&self, store_id: StoreId, now: DateTime<Utc>) -> StatsSnapshot {
        let Some(mut records) = self.records.get_mut(&store_id) else {
            return StatsSnapshot::empty();
        };

        let today = now.date_naive();
        // Nothing before the current month is ever counted again.
        let month_start = (today.year(), today.month());
        records.retain(|record| {
            let day = record.at.date_naive();
            (day.year(), day.month()) >= month_start
        });

        let mut today_counts = AccessCounts::default();
        let mut monthly_counts = AccessCounts::default();
        let mut today_visitors = HashSet::new();
        let mut monthly_visitors = HashSet::new();
        let mut per_hour = [0u64; 24];

        for record in records.iter() {
            let day = record.at.date_naive();
            if day.year() != today.year() || day.month() != today.month() {
                continue;
            }
            monthly_counts.total += 1;
            monthly_visitors.insert(record.visitor.as_str());

            if day == today {
                today_counts.total += 1;
                today_visitors.insert(record.visitor.as_str());
                per_hour[record.at.hour() as usize] += 1;
            }
        }

        today_counts.unique = today_visitors.len() as u64;
        monthly_counts.unique = monthly_visitors.len() as u64;

        let hourly = per_hour
            .iter()
            .enumerate()
            .filter(|(_, count)| **count > 0)
            .map(|(hour, count)| HourlyCount {
                hour: hour as u8,
                count: *count,
            })
            .collect();

        StatsSnapshot {
            version: STATS_SCHEMA_VERSION,
            today: today_counts,
            monthly: monthly_counts,
            hourly,
        }
    }

    pub fn visit_count(&self, store_id: StoreId) -> usize {
        self.records.get(&store_id).map(|r| r.len()).unwrap_or(0)
    }
}

#[async_trait]
impl StatsSource for AccessLog {
    async fn store_stats(&self, store_id: StoreId) -> Result<StatsSnapshot, StatsError> {
        Ok(self.stats_at(store_id, Utc::now()))
    }
}
