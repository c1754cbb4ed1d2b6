use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::time::Instant;

use crate::config::{Config, StatsToggle};
use crate::errors::StatsError;
use crate::services::cache::StatsCache;
use crate::source::{AccessLog, StatsSource};


pub type StoreId = u64;

pub const STATS_SCHEMA_VERSION: u8 = 1;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessCounts {
    pub total: u64,
    pub unique: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourlyCount {
    pub hour: u8,
    pub count: u64,
}

/// Access statistics for one store as shown on its dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsSnapshot {
    pub version: u8,
    pub today: AccessCounts,
    pub monthly: AccessCounts,
    pub hourly: Vec<HourlyCount>,
}

impl StatsSnapshot {
    /// The zeroed snapshot served when a computation fails or runs out of time.
    pub fn empty() -> Self {
        Self {
            version: STATS_SCHEMA_VERSION,
            today: AccessCounts::default(),
            monthly: AccessCounts::default(),
            hourly: Vec::new(),
        }
    }

    pub fn validate(&self) -> Result<(), StatsError> {
        if self.version != STATS_SCHEMA_VERSION {
            return Err(invalid(format!(
                "unsupported version {} (expected {})",
                self.version, STATS_SCHEMA_VERSION
            )));
        }
        if self.today.unique > self.today.total {
            return Err(invalid("today: unique exceeds total"));
        }
        if self.monthly.unique > self.monthly.total {
            return Err(invalid("monthly: unique exceeds total"));
        }
        if self.today.total > self.monthly.total {
            return Err(invalid("today total exceeds monthly total"));
        }

        let mut previous: Option<u8> = None;
        let mut hourly_sum: u64 = 0;
        for bucket in &self.hourly {
            if bucket.hour > 23 {
                return Err(invalid(format!("hour {} out of range", bucket.hour)));
            }
            if previous.is_some_and(|p| p >= bucket.hour) {
                return Err(invalid(format!("hour {} out of order", bucket.hour)));
            }
            previous = Some(bucket.hour);
            hourly_sum = hourly_sum.saturating_add(bucket.count);
        }
        if hourly_sum != self.today.total {
            return Err(invalid(format!(
                "hourly sum {} does not match today total {}",
                hourly_sum, self.today.total
            )));
        }

        Ok(())
    }
}

impl Default for StatsSnapshot {
    fn default() -> Self {
        Self::empty()
    }
}

fn invalid(reason: impl Into<String>) -> StatsError {
    StatsError::InvalidSnapshot(reason.into())
}

pub struct CacheEntry {
    pub payload: StatsSnapshot,
    pub produced_at: Instant,
}

impl CacheEntry {
    pub fn new(payload: StatsSnapshot) -> Self {
        Self {
            payload,
            produced_at: Instant::now(),
        }
    }

    pub fn age(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.produced_at)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsOrigin {
    Cache,
    Computed,
    Fallback,
}

impl StatsOrigin {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cache => "cache",
            Self::Computed => "computed",
            Self::Fallback => "fallback",
        }
    }
}

impl fmt::Display for StatsOrigin {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub struct AppState {
    pub cache: StatsCache,
    pub access_log: Arc<AccessLog>,
    pub source: Arc<dyn StatsSource>,
    pub stats_timeout: Duration,
    pub stats_toggle: StatsToggle,
}

impl AppState {
    /// State backed by an in-memory access log that also serves as the statistics source.
    pub fn new(config: &Config) -> Self {
        let access_log = Arc::new(AccessLog::new());
        Self {
            cache: StatsCache::new(),
            source: access_log.clone(),
            access_log,
            stats_timeout: config.stats_timeout,
            stats_toggle: StatsToggle::Env,
        }
    }

    /// Visits are recorded into `access_log`; snapshots come from `source`,
    /// which only sees those visits if it reads the same log.
    pub fn with_source(
        source: Arc<dyn StatsSource>,
        access_log: Arc<AccessLog>,
        stats_timeout: Duration,
    ) -> Self {
        Self {
            cache: StatsCache::new(),
            access_log,
            source,
            stats_timeout,
            stats_toggle: StatsToggle::Env,
        }
    }

    pub fn with_stats_toggle(mut self, stats_toggle: StatsToggle) -> Self {
        self.stats_toggle = stats_toggle;
        self
    }

    pub fn stats_enabled(&self) -> bool {
        self.stats_toggle.is_enabled()
    }
}
