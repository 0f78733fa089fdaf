use chrono::{DateTime, FixedOffset, Offset, Utc};

/// Point in time, always carried in UTC
pub type Timestamp = DateTime<Utc>;

/// Time-zone identifier carried alongside a clock.
/// Opaque to the clock itself: stored, reported, never interpreted.
pub type Zone = FixedOffset;

/// The zone a clock reports when none is configured (UTC).
pub fn default_zone() -> Zone {
    Utc.fix()
}
