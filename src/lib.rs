pub mod config;
pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod source;

pub use errors::{ConfigError, StatsError};
pub use models::{AccessCounts, AppState, HourlyCount, StatsOrigin, StatsSnapshot, StoreId};
pub use services::cache::StatsCache;
pub use services::timeout::{guard, with_timeout, Guarded};
pub use source::{AccessLog, StatsSource};
