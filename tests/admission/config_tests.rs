// tests/admission/config_tests.rs

#[cfg(test)]
mod tests {
    use crate::fixtures::test_clock::TestClock;
    use admit_limiter::{
        AdmitLimiterError, FixedIntervalConfig, FixedIntervalLimiter, SlidingWindowConfig,
        SlidingWindowLimiter,
    };

    // Config validation tests
    #[test]
    fn config_rejects_zero_window() {
        let config = SlidingWindowConfig::new(0.0, 1);
        let result = config.validate();
        assert!(result.is_err());
        assert!(matches!(
            result.unwrap_err(),
            AdmitLimiterError::InvalidWindowSize
        ));
    }

    #[test]
    fn config_rejects_negative_window() {
        let config = SlidingWindowConfig::new(-1.0, 1);
        let result = config.validate();
        assert!(result.is_err());
        assert!(matches!(
            result.unwrap_err(),
            AdmitLimiterError::InvalidWindowSize
        ));
    }

    #[test]
    fn config_rejects_non_finite_window() {
        let config = SlidingWindowConfig::new(f64::NAN, 1);
        assert!(config.validate().is_err());

        let config = SlidingWindowConfig::new(f64::INFINITY, 1);
        assert!(config.validate().is_err());
    }

    #[test]
    fn config_rejects_zero_max_requests() {
        let config = SlidingWindowConfig::new(10.0, 0);
        let result = config.validate();
        assert!(result.is_err());
        assert!(matches!(
            result.unwrap_err(),
            AdmitLimiterError::InvalidMaxRequests
        ));
    }

    #[test]
    fn config_rejects_zero_interval() {
        let config = FixedIntervalConfig::new(0.0);
        let result = config.validate();
        assert!(result.is_err());
        assert!(matches!(
            result.unwrap_err(),
            AdmitLimiterError::InvalidInterval
        ));
    }

    #[test]
    fn config_rejects_negative_interval() {
        let config = FixedIntervalConfig::new(-5.0);
        let result = config.validate();
        assert!(result.is_err());
        assert!(matches!(
            result.unwrap_err(),
            AdmitLimiterError::InvalidInterval
        ));
    }

    #[test]
    fn config_accepts_valid_parameters() {
        assert!(SlidingWindowConfig::new(10.0, 1).validate().is_ok());
        assert!(SlidingWindowConfig::new(0.5, 100).validate().is_ok());
        assert!(FixedIntervalConfig::new(10.0).validate().is_ok());
        assert!(FixedIntervalConfig::new(0.001).validate().is_ok());
    }

    // Test config builder pattern
    #[test]
    fn config_builder_pattern_works() {
        let config = SlidingWindowConfig::new(0.0, 0).window(10.0).max_requests(3);

        assert!(config.validate().is_ok());

        let clock = TestClock::new(0.0);
        let limiter = SlidingWindowLimiter::<String, _>::with_config(config, clock).unwrap();
        assert_eq!(limiter.window_size(), 10.0);
        assert_eq!(limiter.max_requests(), 3);

        let config = FixedIntervalConfig::new(0.0).interval(2.0);
        assert!(config.validate().is_ok());

        let clock = TestClock::new(0.0);
        let limiter = FixedIntervalLimiter::<String, _>::with_config(config, clock).unwrap();
        assert_eq!(limiter.min_interval(), 2.0);
    }

    // Constructor tests with config
    #[test]
    fn constructor_with_invalid_config_fails() {
        let clock = TestClock::new(0.0);
        let config = SlidingWindowConfig::new(10.0, 0);
        let result = SlidingWindowLimiter::<String, _>::with_config(config, clock.clone());
        assert!(result.is_err());
        assert!(matches!(
            result.unwrap_err(),
            AdmitLimiterError::InvalidMaxRequests
        ));

        let config = FixedIntervalConfig::new(-1.0);
        let result = FixedIntervalLimiter::<String, _>::with_config(config, clock);
        assert!(result.is_err());
        assert!(matches!(
            result.unwrap_err(),
            AdmitLimiterError::InvalidInterval
        ));
    }

    #[test]
    fn constructor_with_valid_config_succeeds() {
        let clock = TestClock::new(0.0);
        let config = SlidingWindowConfig::new(10.0, 1);
        assert!(SlidingWindowLimiter::<String, _>::with_config(config, clock.clone()).is_ok());

        let config = FixedIntervalConfig::new(10.0);
        assert!(FixedIntervalLimiter::<String, _>::with_config(config, clock).is_ok());
    }
}
