// src/lib.rs

//! # Admit Limiter
//!
//! Per-identity request admission control: a sliding-window counter and a
//! fixed-interval throttle behind one capability interface.
//!
//! ## Quick Example
//!
//! ```rust
//! use admit_limiter::{SlidingWindowLimiter, SlidingWindowConfig, SystemClock};
//!
//! let config = SlidingWindowConfig::new(10.0, 3);
//! let limiter = SlidingWindowLimiter::with_config(config, SystemClock).unwrap();
//!
//! if limiter.record("user_123").unwrap() {
//!     println!("Request admitted");
//! } else {
//!     println!("Rate limited - retry after {:.2}s",
//!              limiter.time_to_next_admission("user_123").unwrap());
//! }
//! ```

// private modules
mod clock;
mod config;
mod errors;
mod fixed_interval;
mod limiter;
mod sliding_window;

// public API exports
pub use clock::{Clock, ClockError, SystemClock};
pub use config::{FixedIntervalConfig, SlidingWindowConfig};
pub use errors::AdmitLimiterError;
pub use fixed_interval::FixedIntervalLimiter;
pub use limiter::Limiter;
pub use sliding_window::SlidingWindowLimiter;
