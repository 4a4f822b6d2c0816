// src/limiter.rs

// the capability interface shared by both limiter types

// dependencies
use crate::errors::AdmitLimiterError;

/// Capability interface for per-identity admission control.
/// T is the type used to identify requesters (e.g., String, u64, etc.).
/// Both limiters implement this trait, so callers can swap admission
/// policies without changing their handling code.
///
/// An identity that has never been seen is not an error: it is always
/// admittable and has a wait time of zero. The only failure path is a
/// failing clock.
pub trait Limiter<T> {
    /// Check whether the identity could be admitted right now.
    /// Reclaims expired state as a side effect, but never commits an
    /// admission.
    fn may_admit(&self, identity: T) -> Result<bool, AdmitLimiterError>;

    /// Attempt to admit and record an event for the identity.
    /// Returns Ok(true) if the event was admitted and recorded, Ok(false)
    /// if it was rejected with no state change. The decision and the
    /// commit happen atomically with respect to other calls for the same
    /// identity.
    fn record(&self, identity: T) -> Result<bool, AdmitLimiterError>;

    /// Seconds until the identity's next admission can possibly succeed.
    /// Zero means immediately admittable. Never negative.
    fn time_to_next_admission(&self, identity: T) -> Result<f64, AdmitLimiterError>;
}
