// src/config.rs

//! Configuration types for the two limiters

// dependencies
use crate::errors::AdmitLimiterError;

/// Configuration for the sliding window limiter
#[derive(Debug, Clone)]
pub struct SlidingWindowConfig {
    pub(crate) window_size: f64,
    pub(crate) max_requests: usize,
}

impl SlidingWindowConfig {
    /// Create a new configuration with window and limit settings
    pub fn new(window_size: f64, max_requests: usize) -> Self {
        Self {
            window_size,
            max_requests,
        }
    }

    /// Builder-style: set the window size in seconds
    pub fn window(mut self, window_size: f64) -> Self {
        self.window_size = window_size;
        self
    }

    /// Builder-style: set the maximum admissions per window
    pub fn max_requests(mut self, max_requests: usize) -> Self {
        self.max_requests = max_requests;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), AdmitLimiterError> {
        if !self.window_size.is_finite() || self.window_size <= 0.0 {
            return Err(AdmitLimiterError::InvalidWindowSize);
        }
        if self.max_requests < 1 {
            return Err(AdmitLimiterError::InvalidMaxRequests);
        }
        Ok(())
    }
}

/// Configuration for the fixed interval limiter
#[derive(Debug, Clone)]
pub struct FixedIntervalConfig {
    pub(crate) min_interval: f64,
}

impl FixedIntervalConfig {
    /// Create a new configuration with the minimum spacing between admissions
    pub fn new(min_interval: f64) -> Self {
        Self { min_interval }
    }

    /// Builder-style: set the minimum interval in seconds
    pub fn interval(mut self, min_interval: f64) -> Self {
        self.min_interval = min_interval;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), AdmitLimiterError> {
        if !self.min_interval.is_finite() || self.min_interval <= 0.0 {
            return Err(AdmitLimiterError::InvalidInterval);
        }
        Ok(())
    }
}
