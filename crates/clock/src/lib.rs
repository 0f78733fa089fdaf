//! TimeSlip Clock
//!
//! Controllable time sources for reproducible tests:
//!
//! ## Source Hierarchy
//!
//! ```text
//! TimeSlip (controllable test source)
//!     │
//!     ├── Manual (frozen; moves only via tick/move_to)
//!     ├── AutoAdvance (steps forward on every read)
//!     └── Sequence (scripted instants, optionally cycling)
//!
//! SystemClock (real wall clock, production)
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use chrono::Duration;
//! use timeslip_clock::{TimeSlip, TimeSource};
//!
//! // Frozen clock: reads are stable until the test moves it
//! let clock = TimeSlip::fixed_at(start);
//! clock.tick_by(Duration::minutes(5))?;
//!
//! // Scripted clock: each read returns the next instant
//! let clock = TimeSlip::sequence(|seq| {
//!     seq.first(start).then(start + Duration::seconds(30)).cycle(true);
//! });
//!
//! // Assert a code path never consults the clock at all
//! let clock = TimeSlip::no_call();
//! ```

mod builder;
mod policy;
mod slip;
mod strategy;
mod system;

pub use builder::SequenceBuilder;
pub use policy::AdvancePolicy;
pub use slip::TimeSlip;
pub use system::SystemClock;

// Re-export the TimeSource trait for convenience
pub use timeslip_ports::{ClockError, ClockResult, TimeSource};
