use std::fmt;

use chrono::Duration;
use timeslip_core::Timestamp;

/// How an auto-advancing clock moves between reads
///
/// A policy is applied exactly once per successful read, after the returned
/// value has been captured, so the first read always yields the starting
/// instant untouched.
///
/// Two forms exist: a fixed step added on every read, or an arbitrary
/// function from the previous instant to the next one. A function may move
/// time backwards; no validation is applied.
pub enum AdvancePolicy {
    /// Add a fixed amount on every read (may be negative)
    Step(Duration),
    /// Compute the next instant from the previous one
    Custom(Box<dyn FnMut(Timestamp) -> Timestamp + Send>),
}

impl AdvancePolicy {
    /// Policy that adds `amount` on every read
    pub fn step(amount: Duration) -> Self {
        AdvancePolicy::Step(amount)
    }

    /// Policy that computes the next instant with `advance`
    pub fn from_fn<F>(advance: F) -> Self
    where
        F: FnMut(Timestamp) -> Timestamp + Send + 'static,
    {
        AdvancePolicy::Custom(Box::new(advance))
    }

    /// Produce the instant that follows `current`
    pub(crate) fn apply(&mut self, current: Timestamp) -> Timestamp {
        match self {
            AdvancePolicy::Step(amount) => current + *amount,
            AdvancePolicy::Custom(advance) => advance(current),
        }
    }
}

impl Default for AdvancePolicy {
    /// One second per read
    fn default() -> Self {
        AdvancePolicy::Step(Duration::seconds(1))
    }
}

impl From<Duration> for AdvancePolicy {
    fn from(amount: Duration) -> Self {
        AdvancePolicy::Step(amount)
    }
}

impl fmt::Debug for AdvancePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdvancePolicy::Step(amount) => f.debug_tuple("Step").field(amount).finish(),
            AdvancePolicy::Custom(_) => f.debug_tuple("Custom").finish(),
        }
    }
}
