#[cfg(test)]
mod tests {
    use crate::config::{
        stats_enabled_from, Config, StatsToggle, CACHE_TTL, DEFAULT_BIND_ADDR, DEFAULT_STATS_TIMEOUT_MS,
    };
    use crate::ConfigError;
    use std::time::Duration;

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_values(None, None).unwrap();
        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:3030");
        assert_eq!(config.stats_timeout, Duration::from_millis(DEFAULT_STATS_TIMEOUT_MS));
    }

    #[test]
    fn test_default_matches_unset_env() {
        let unset = Config::from_values(None, None).unwrap();
        let default = Config::default();
        assert_eq!(default.bind_addr, DEFAULT_BIND_ADDR);
        assert_eq!(default.bind_addr, unset.bind_addr);
        assert_eq!(default.stats_timeout, unset.stats_timeout);
    }

    #[test]
    fn test_fixed_toggle() {
        assert!(StatsToggle::Fixed(true).is_enabled());
        assert!(!StatsToggle::Fixed(false).is_enabled());
        assert_eq!(StatsToggle::default(), StatsToggle::Env);
    }

    #[test]
    fn test_explicit_values() {
        let config = Config::from_values(Some("0.0.0.0:8080"), Some(" 250 ")).unwrap();
        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(config.stats_timeout, Duration::from_millis(250));
    }

    #[test]
    fn test_invalid_bind_addr() {
        let err = Config::from_values(Some("localhost"), None).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBindAddr { .. }));
    }

    #[test]
    fn test_invalid_timeout() {
        assert!(matches!(
            Config::from_values(None, Some("soon")),
            Err(ConfigError::InvalidTimeout { .. })
        ));
        assert!(matches!(
            Config::from_values(None, Some("0")),
            Err(ConfigError::InvalidTimeout { .. })
        ));
    }

    #[test]
    fn test_stats_toggle() {
        assert!(stats_enabled_from(None));
        assert!(stats_enabled_from(Some("")));
        assert!(stats_enabled_from(Some("false")));
        assert!(stats_enabled_from(Some("0")));

        assert!(!stats_enabled_from(Some("1")));
        assert!(!stats_enabled_from(Some("true")));
        assert!(!stats_enabled_from(Some(" TRUE ")));
        assert!(!stats_enabled_from(Some("yes")));
        assert!(!stats_enabled_from(Some("on")));
    }

    #[test]
    fn test_cache_ttl_is_five_minutes() {
        assert_eq!(CACHE_TTL, Duration::from_secs(300));
    }
}
