#![allow(dead_code)]

use chrono::{DateTime, Duration, FixedOffset};
use timeslip_clock::{TimeSlip, TimeSource};
use timeslip_core::{Timestamp, Zone};

pub fn some_instant() -> Timestamp {
    DateTime::from_timestamp(1_548_723_723, 0).unwrap()
}

pub fn some_other_instant() -> Timestamp {
    DateTime::from_timestamp(1_549_166_706, 0).unwrap()
}

pub fn some_duration() -> Duration {
    Duration::seconds(5)
}

pub fn some_zone() -> Zone {
    FixedOffset::east_opt(3600).unwrap()
}

pub fn some_other_zone() -> Zone {
    FixedOffset::east_opt(4 * 3600).unwrap()
}

/// Assert the clock currently reports the given instant and zone.
///
/// Reads the clock once, so on an auto-advancing clock this consumes a read.
pub fn assert_has(clock: &TimeSlip, instant: Timestamp, zone: Zone) {
    assert_eq!(clock.now(), Ok(instant));
    assert_eq!(clock.zone(), Ok(zone));
}
