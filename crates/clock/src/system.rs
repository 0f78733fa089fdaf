use chrono::Utc;
use timeslip_core::{Timestamp, Zone, default_zone};
use timeslip_ports::{ClockResult, TimeSource};

/// Real system clock for production use
///
/// Simply reports the current wall-clock time; reads never fail.
/// Use this where real-time behavior is wanted and a [`TimeSlip`](crate::TimeSlip)
/// everywhere determinism is.
pub struct SystemClock {
    zone: Zone,
}

impl SystemClock {
    /// System clock reporting UTC
    pub fn new() -> Self {
        Self {
            zone: default_zone(),
        }
    }

    /// System clock reporting `zone`
    pub fn new_in(zone: Zone) -> Self {
        Self { zone }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSource for SystemClock {
    fn now(&self) -> ClockResult<Timestamp> {
        Ok(Utc::now())
    }

    fn zone(&self) -> ClockResult<Zone> {
        Ok(self.zone)
    }

    fn with_zone(&self, zone: Zone) -> ClockResult<Self> {
        Ok(Self { zone })
    }

    fn name(&self) -> &str {
        "SystemClock"
    }
}
