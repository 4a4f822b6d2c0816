// src/errors.rs

// error handling for the limiter types

// dependencies
use std::error::Error;
use std::fmt;

use crate::clock::ClockError;

/// Error type for limiter configuration and clock issues.
/// Configuration errors surface at construction time; admission decisions
/// themselves have no error path beyond a failing clock.
#[non_exhaustive]
#[derive(Debug)]
pub enum AdmitLimiterError {
    InvalidWindowSize,      // for window_size <= 0 or non-finite
    InvalidMaxRequests,     // for max_requests < 1
    InvalidInterval,        // for min_interval <= 0 or non-finite
    Clock(ClockError),      // error variant for issues with the clock
}

// implement the Display trait for the AdmitLimiterError type
impl fmt::Display for AdmitLimiterError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AdmitLimiterError::InvalidWindowSize => {
                write!(f, "Window size must be a positive number of seconds")
            }
            AdmitLimiterError::InvalidMaxRequests => {
                write!(f, "Max requests must be at least 1")
            }
            AdmitLimiterError::InvalidInterval => {
                write!(f, "Minimum interval must be a positive number of seconds")
            }
            AdmitLimiterError::Clock(_) => {
                write!(f, "Clock error occurred")
            }
        }
    }
}

// implement the Error trait for the AdmitLimiterError type
impl Error for AdmitLimiterError {}

// allow limiter methods to propagate clock failures with `?`
impl From<ClockError> for AdmitLimiterError {
    fn from(err: ClockError) -> Self {
        AdmitLimiterError::Clock(err)
    }
}
