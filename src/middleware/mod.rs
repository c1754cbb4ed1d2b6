use http::{HeaderMap, header::{HeaderName, HeaderValue}};
use crate::models::StatsOrigin;

#[cfg(test)]
mod tests;

pub const STATS_ORIGIN_HEADER: &str = "x-stats-origin";

/// Dashboard responses: tag where the snapshot came from and keep shared
/// caches from holding per-store numbers.
pub fn add_stats_headers(headers: &mut HeaderMap, origin: StatsOrigin) {
    headers.insert(
        HeaderName::from_static(STATS_ORIGIN_HEADER),
        HeaderValue::from_static(origin.as_str()),
    );
    headers.insert(
        HeaderName::from_static("cache-control"),
        HeaderValue::from_static("private, no-store"),
    );
    headers.insert(
        HeaderName::from_static("access-control-allow-origin"),
        HeaderValue::from_static("*"),
    );
}
