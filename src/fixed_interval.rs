// src/fixed_interval.rs

// admit-limiter: fixed interval throttle, at most one event per identity
// per `min_interval` seconds.

// dependencies
use crate::clock::{Clock, SystemClock};
use crate::config::FixedIntervalConfig;
use crate::errors::AdmitLimiterError;
use crate::limiter::Limiter;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::hash::Hash;
use std::sync::Arc;
use tracing::{debug, trace};

/// Fixed interval limiter.
/// T is the type used to identify requesters (e.g., String, u64, etc.).
/// C is the clock type, defaulting to SystemClock.
/// Per-identity state is just the last admitted event time; absence means
/// "never sent". Entries whose interval has fully elapsed answer exactly
/// like absence, so read paths drop them on access to bound memory to
/// identities still inside their interval.
#[derive(Debug)]
pub struct FixedIntervalLimiter<T, C = SystemClock>
where
    T: Hash + Eq + Clone,
    C: Clock,
{
    interval_nanos: u64,
    last_admitted: Arc<DashMap<T, u64>>,
    clock: C,
}

// methods for the FixedIntervalLimiter type
impl<T, C> FixedIntervalLimiter<T, C>
where
    T: Hash + Eq + Clone,
    C: Clock,
{
    // method to build a limiter from validated settings
    fn build(min_interval: f64, clock: C) -> Self {
        // Convert to nanoseconds
        let interval_nanos = (min_interval * 1_000_000_000.0) as u64;

        Self {
            interval_nanos,
            last_admitted: Arc::new(DashMap::new()),
            clock,
        }
    }

    /// Create a new limiter from a config object and an injected clock.
    /// Fails if the configuration is invalid.
    pub fn with_config(config: FixedIntervalConfig, clock: C) -> Result<Self, AdmitLimiterError> {
        config.validate()?;
        Ok(Self::build(config.min_interval, clock))
    }

    // accessor method to return the minimum interval in seconds
    pub fn min_interval(&self) -> f64 {
        self.interval_nanos as f64 / 1_000_000_000.0
    }

    /// Number of identities currently holding state, i.e. identities still
    /// inside their interval at last access.
    pub fn active_identities(&self) -> usize {
        self.last_admitted.len()
    }

    /// Check whether the identity could be admitted right now, without
    /// committing anything. An entry whose interval has elapsed is
    /// reclaimed before answering.
    pub fn may_admit(&self, identity: T) -> Result<bool, AdmitLimiterError> {
        let now = self.clock.now()?;
        match self.last_admitted.entry(identity) {
            Entry::Occupied(occupied) => {
                if now.saturating_sub(*occupied.get()) >= self.interval_nanos {
                    occupied.remove();
                    Ok(true)
                } else {
                    Ok(false)
                }
            }
            Entry::Vacant(_) => Ok(true),
        }
    }

    /// Attempt to admit an event for the identity at the current time.
    /// On admission the last event time is replaced with `now` and
    /// Ok(true) is returned; a rejection returns Ok(false) with no
    /// mutation. Decision and commit happen under one entry guard.
    pub fn record(&self, identity: T) -> Result<bool, AdmitLimiterError> {
        let now = self.clock.now()?;
        match self.last_admitted.entry(identity) {
            Entry::Occupied(mut occupied) => {
                if now.saturating_sub(*occupied.get()) >= self.interval_nanos {
                    *occupied.get_mut() = now;
                    trace!("event admitted; interval elapsed");
                    Ok(true)
                } else {
                    debug!(
                        min_interval = self.min_interval(),
                        "event rejected; inside interval"
                    );
                    Ok(false)
                }
            }
            Entry::Vacant(vacant) => {
                vacant.insert(now);
                trace!("event admitted; first from identity");
                Ok(true)
            }
        }
    }

    /// Seconds until the identity's interval elapses. Zero if the identity
    /// has never been seen or its interval has already passed.
    pub fn time_to_next_admission(&self, identity: T) -> Result<f64, AdmitLimiterError> {
        let now = self.clock.now()?;
        match self.last_admitted.entry(identity) {
            Entry::Occupied(occupied) => {
                let elapsed = now.saturating_sub(*occupied.get());
                if elapsed >= self.interval_nanos {
                    occupied.remove();
                    Ok(0.0)
                } else {
                    Ok((self.interval_nanos - elapsed) as f64 / 1_000_000_000.0)
                }
            }
            Entry::Vacant(_) => Ok(0.0),
        }
    }
}

impl<T> FixedIntervalLimiter<T, SystemClock>
where
    T: Hash + Eq + Clone,
{
    /// Create a new limiter backed by the system clock.
    pub fn new(config: FixedIntervalConfig) -> Result<Self, AdmitLimiterError> {
        Self::with_config(config, SystemClock)
    }
}

impl<T, C> Limiter<T> for FixedIntervalLimiter<T, C>
where
    T: Hash + Eq + Clone,
    C: Clock,
{
    fn may_admit(&self, identity: T) -> Result<bool, AdmitLimiterError> {
        self.may_admit(identity)
    }

    fn record(&self, identity: T) -> Result<bool, AdmitLimiterError> {
        self.record(identity)
    }

    fn time_to_next_admission(&self, identity: T) -> Result<f64, AdmitLimiterError> {
        self.time_to_next_admission(identity)
    }
}
