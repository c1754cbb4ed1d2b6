#[cfg(test)]
mod tests {
    use http::HeaderMap;
    use crate::middleware::{add_stats_headers, STATS_ORIGIN_HEADER};
    use crate::StatsOrigin;

    #[test]
    fn test_add_stats_headers() {
        let mut headers = HeaderMap::new();
        add_stats_headers(&mut headers, StatsOrigin::Computed);

        assert_eq!(headers.get(STATS_ORIGIN_HEADER).unwrap(), "computed");
        assert_eq!(headers.get("cache-control").unwrap(), "private, no-store");
        assert_eq!(headers.get("access-control-allow-origin").unwrap(), "*");
    }

    #[test]
    fn test_origin_header_is_replaced() {
        let mut headers = HeaderMap::new();
        add_stats_headers(&mut headers, StatsOrigin::Cache);
        add_stats_headers(&mut headers, StatsOrigin::Fallback);

        assert_eq!(headers.get_all(STATS_ORIGIN_HEADER).iter().count(), 1);
        assert_eq!(headers.get(STATS_ORIGIN_HEADER).unwrap(), "fallback");
    }
}
