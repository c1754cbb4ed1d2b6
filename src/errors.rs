use std::net::AddrParseError;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StatsError {
    #[error("Statistics source failed: {0}")]
    Source(String),

    #[error("Invalid statistics snapshot: {0}")]
    InvalidSnapshot(String),

    #[error("Access statistics disabled")]
    Disabled,
}

impl warp::reject::Reject for StatsError {}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid bind address {value:?}: {source}")]
    InvalidBindAddr {
        value: String,
        #[source]
        source: AddrParseError,
    },

    #[error("Invalid stats timeout {value:?}: {reason}")]
    InvalidTimeout { value: String, reason: String },
}
