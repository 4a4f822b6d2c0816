// src/sliding_window.rs

// admit-limiter: sliding window admission control, at most `max_requests`
// events per identity within any trailing window of `window_size` seconds.

// dependencies
use crate::clock::{Clock, SystemClock};
use crate::config::SlidingWindowConfig;
use crate::errors::AdmitLimiterError;
use crate::limiter::Limiter;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::collections::VecDeque;
use std::hash::Hash;
use std::sync::Arc;
use tracing::{debug, trace};

/// Sliding window limiter.
/// T is the type used to identify requesters (e.g., String, u64, etc.).
/// C is the clock type, defaulting to SystemClock.
/// Per-identity state is an oldest-first deque of admitted-event times; we
/// use `Arc<DashMap>` so each operation runs under the identity's shard
/// lock, making the cleanup-decide-commit sequence atomic per identity
/// while calls for different identities proceed in parallel.
#[derive(Debug)]
pub struct SlidingWindowLimiter<T, C = SystemClock>
where
    T: Hash + Eq + Clone,
    C: Clock,
{
    window_nanos: u64,
    max_requests: usize,
    records: Arc<DashMap<T, VecDeque<u64>>>,
    clock: C,
}

// methods for the SlidingWindowLimiter type
impl<T, C> SlidingWindowLimiter<T, C>
where
    T: Hash + Eq + Clone,
    C: Clock,
{
    // method to build a limiter from validated settings
    fn build(window_size: f64, max_requests: usize, clock: C) -> Self {
        // Convert to nanoseconds
        let window_nanos = (window_size * 1_000_000_000.0) as u64;

        Self {
            window_nanos,
            max_requests,
            records: Arc::new(DashMap::new()),
            clock,
        }
    }

    /// Create a new limiter from a config object and an injected clock.
    /// Fails if the configuration is invalid.
    pub fn with_config(config: SlidingWindowConfig, clock: C) -> Result<Self, AdmitLimiterError> {
        config.validate()?;
        Ok(Self::build(config.window_size, config.max_requests, clock))
    }

    // accessor method to return the window size in seconds
    pub fn window_size(&self) -> f64 {
        self.window_nanos as f64 / 1_000_000_000.0
    }

    // accessor method to return the admission limit per window
    pub fn max_requests(&self) -> usize {
        self.max_requests
    }

    /// Number of identities currently holding state.
    /// Identities whose events have all aged out are removed on access, so
    /// this tracks active identities rather than everything ever seen.
    pub fn active_identities(&self) -> usize {
        self.records.len()
    }

    /// Check whether the identity could be admitted right now, without
    /// committing anything. Expired events are reclaimed first; an
    /// identity with no remaining events has its entry removed.
    pub fn may_admit(&self, identity: T) -> Result<bool, AdmitLimiterError> {
        let now = self.clock.now()?;
        match self.records.entry(identity) {
            Entry::Occupied(mut occupied) => {
                Self::evict_expired(occupied.get_mut(), now, self.window_nanos);
                if occupied.get().is_empty() {
                    occupied.remove();
                    Ok(true)
                } else {
                    Ok(occupied.get().len() < self.max_requests)
                }
            }
            Entry::Vacant(_) => Ok(true),
        }
    }

    /// Attempt to admit an event for the identity at the current time.
    /// On admission the event time is appended and Ok(true) is returned;
    /// a rejection returns Ok(false) and leaves the state untouched.
    /// Decision and commit happen under one entry guard, so two concurrent
    /// calls for the same identity cannot both observe "under limit".
    pub fn record(&self, identity: T) -> Result<bool, AdmitLimiterError> {
        let now = self.clock.now()?;
        match self.records.entry(identity) {
            Entry::Occupied(mut occupied) => {
                Self::evict_expired(occupied.get_mut(), now, self.window_nanos);
                if occupied.get().len() < self.max_requests {
                    occupied.get_mut().push_back(now);
                    trace!(in_window = occupied.get().len(), "event admitted");
                    Ok(true)
                } else {
                    debug!(
                        in_window = occupied.get().len(),
                        max_requests = self.max_requests,
                        "event rejected; window full"
                    );
                    Ok(false)
                }
            }
            Entry::Vacant(vacant) => {
                let mut window = VecDeque::with_capacity(self.max_requests);
                window.push_back(now);
                vacant.insert(window);
                trace!("event admitted; first in window");
                Ok(true)
            }
        }
    }

    /// Seconds until the identity's oldest event ages out of the window,
    /// which is when a slot frees up. Zero if the identity holds no state.
    /// For `max_requests == 1` this is exactly when the next admission
    /// succeeds; for larger limits it is the time until at least one more
    /// admission becomes possible, not a guarantee of capacity for any
    /// particular later request.
    pub fn time_to_next_admission(&self, identity: T) -> Result<f64, AdmitLimiterError> {
        let now = self.clock.now()?;
        match self.records.entry(identity) {
            Entry::Occupied(mut occupied) => {
                Self::evict_expired(occupied.get_mut(), now, self.window_nanos);
                match occupied.get().front().copied() {
                    Some(oldest) => {
                        let wait_nanos = self
                            .window_nanos
                            .saturating_sub(now.saturating_sub(oldest));
                        Ok(wait_nanos as f64 / 1_000_000_000.0)
                    }
                    None => {
                        occupied.remove();
                        Ok(0.0)
                    }
                }
            }
            Entry::Vacant(_) => Ok(0.0),
        }
    }

    // internal cleanup: pop events that have aged out of the half-open
    // window (now - window_size, now]. An event exactly window_size old is
    // expired. Each event is popped at most once over its lifetime, so the
    // loop is amortized O(1) per call. Elapsed time saturates at zero so a
    // backward clock step keeps events alive rather than expiring them.
    fn evict_expired(window: &mut VecDeque<u64>, now: u64, window_nanos: u64) {
        while let Some(&oldest) = window.front() {
            if now.saturating_sub(oldest) >= window_nanos {
                window.pop_front();
            } else {
                break;
            }
        }
    }
}

impl<T> SlidingWindowLimiter<T, SystemClock>
where
    T: Hash + Eq + Clone,
{
    /// Create a new limiter backed by the system clock.
    pub fn new(config: SlidingWindowConfig) -> Result<Self, AdmitLimiterError> {
        Self::with_config(config, SystemClock)
    }
}

impl<T, C> Limiter<T> for SlidingWindowLimiter<T, C>
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
