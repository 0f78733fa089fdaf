use timeslip_core::{Timestamp, Zone};

use crate::error::ClockResult;

/// Port for time abstraction
///
/// This allows code under test to use different time sources:
/// - Real system time for production
/// - Manually controlled or scripted time for deterministic tests
///
/// Operations are fallible: a controllable source can be exhausted or
/// retired, and reports that to the caller instead of returning stale data.
pub trait TimeSource: Send + Sync {
    /// Get the current instant according to this source
    fn now(&self) -> ClockResult<Timestamp>;

    /// Get the time-zone this source reports
    fn zone(&self) -> ClockResult<Zone>;

    /// Get a source based on this one that reports a different time-zone
    fn with_zone(&self, zone: Zone) -> ClockResult<Self>
    where
        Self: Sized;

    /// Get the source's name/identifier for debugging
    fn name(&self) -> &str {
        "TimeSource"
    }
}
