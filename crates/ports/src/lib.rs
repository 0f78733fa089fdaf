//! TimeSlip Ports
//!
//! Port definitions (traits) for the TimeSlip test clock.
//! These define the boundary between code that consumes time and the
//! sources that produce it.

mod error;
mod time_source;

pub use error::{ClockError, ClockResult};
pub use time_source::TimeSource;
