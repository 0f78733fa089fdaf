//! TimeSlip Core Values
//!
//! Pure time value types shared by every TimeSlip crate.
//! This crate contains no async, no I/O, and is 100% unit testable.

pub mod values;

// Re-export commonly used types at crate root
pub use values::{Timestamp, Zone, default_zone};
