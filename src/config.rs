use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};
use std::time::Duration;

use crate::errors::ConfigError;

#[cfg(test)]
mod tests;

pub const DEFAULT_BIND_ADDR: SocketAddr =
    SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::new(127, 0, 0, 1), 3030));
pub const DEFAULT_STATS_TIMEOUT_MS: u64 = 3000;
pub const CACHE_TTL_SECS: u64 = 300; // 5 minutes
pub const CACHE_TTL: Duration = Duration::from_secs(CACHE_TTL_SECS);

pub const BIND_ADDR_ENV: &str = "STATS_BIND_ADDR";
pub const STATS_TIMEOUT_ENV: &str = "STATS_TIMEOUT_MS";
pub const DISABLE_STATS_ENV: &str = "DISABLE_ACCESS_STATS";

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub stats_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(
            std::env::var(BIND_ADDR_ENV).ok().as_deref(),
            std::env::var(STATS_TIMEOUT_ENV).ok().as_deref(),
        )
    }

    /// Builds a config from raw values, falling back to defaults for missing ones.
    pub fn from_values(bind_addr: Option<&str>, timeout_ms: Option<&str>) -> Result<Self, ConfigError> {
        let bind_addr = match bind_addr {
            None => DEFAULT_BIND_ADDR,
            Some(raw) => raw
                .trim()
                .parse::<SocketAddr>()
                .map_err(|source| ConfigError::InvalidBindAddr {
                    value: raw.to_string(),
                    source,
                })?,
        };

        let stats_timeout = match timeout_ms {
            None => Duration::from_millis(DEFAULT_STATS_TIMEOUT_MS),
            Some(raw) => {
                let millis = raw.trim().parse::<u64>().map_err(|e| ConfigError::InvalidTimeout {
                    value: raw.to_string(),
                    reason: e.to_string(),
                })?;
                if millis == 0 {
                    return Err(ConfigError::InvalidTimeout {
                        value: raw.to_string(),
                        reason: "must be greater than zero".to_string(),
                    });
                }
                Duration::from_millis(millis)
            }
        };

        Ok(Self {
            bind_addr,
            stats_timeout,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR,
            stats_timeout: Duration::from_millis(DEFAULT_STATS_TIMEOUT_MS),
        }
    }
}

/// Re-reads `DISABLE_ACCESS_STATS` on every call.
pub fn access_stats_enabled() -> bool {
    stats_enabled_from(std::env::var(DISABLE_STATS_ENV).ok().as_deref())
}

pub fn stats_enabled_from(disable_flag: Option<&str>) -> bool {
    match disable_flag {
        Some(raw) => !matches!(
            raw.trim().to_ascii_lowercase().as_str(),
            "1" | "true" | "yes" | "on"
        ),
        None => true,
    }
}

/// Where a running service reads its statistics switch from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsToggle {
    /// Re-read `DISABLE_ACCESS_STATS` on every check.
    Env,
    Fixed(bool),
}

impl StatsToggle {
    pub fn is_enabled(&self) -> bool {
        match self {
            Self::Env => access_stats_enabled(),
            Self::Fixed(enabled) => *enabled,
        }
    }
}

impl Default for StatsToggle {
    fn default() -> Self {
        Self::Env
    }
}
