use std::sync::Arc;

use chrono::Duration;
use log::debug;
use parking_lot::Mutex;
use timeslip_core::{Timestamp, Zone, default_zone};
use timeslip_ports::{ClockError, ClockResult, TimeSource};

use crate::builder::SequenceBuilder;
use crate::policy::AdvancePolicy;
use crate::strategy::ClockStrategy;

/// Lifecycle of a clock: `Active` until retired, then permanently `Finished`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ClockState {
    Active,
    Finished,
}

/// A controllable [`TimeSource`] for reproducible tests
///
/// A `TimeSlip` wraps one time-production strategy, a reported zone, and a
/// lifecycle state. Reads and movements go through the strategy; once the
/// clock is retired with [`done`](TimeSlip::done), every operation fails
/// with [`ClockError::InvalidState`].
///
/// Views created with `with_zone` share the underlying strategy: moving time
/// through one view is visible through the others. Each view carries its own
/// zone and its own lifecycle state.
pub struct TimeSlip {
    strategy: Arc<Mutex<ClockStrategy>>,
    zone: Zone,
    state: Mutex<ClockState>,
}

impl TimeSlip {
    /// Create a clock on which every operation fails with
    /// [`ClockError::InvalidState`]
    ///
    /// Useful for asserting that a code path never consults the clock.
    pub fn no_call() -> Self {
        Self::new(
            ClockStrategy::Sequence {
                items: Vec::new(),
                cursor: 0,
                cycle: false,
            },
            default_zone(),
            ClockState::Finished,
        )
    }

    /// Create a clock frozen at `initial`, in UTC
    ///
    /// The time moves only when [`tick`](TimeSlip::tick),
    /// [`tick_by`](TimeSlip::tick_by) or [`move_to`](TimeSlip::move_to) are
    /// called.
    pub fn fixed_at(initial: Timestamp) -> Self {
        Self::fixed_at_in(initial, default_zone())
    }

    /// Create a clock frozen at `initial`, reporting `zone`
    pub fn fixed_at_in(initial: Timestamp, zone: Zone) -> Self {
        Self::new(
            ClockStrategy::Manual { current: initial },
            zone,
            ClockState::Active,
        )
    }

    /// Create a clock that starts at `initial` and moves forward one second
    /// each time the time is requested, in UTC
    pub fn auto_advancing(initial: Timestamp) -> Self {
        Self::auto_advancing_in(initial, default_zone(), AdvancePolicy::default())
    }

    /// Create a clock that starts at `initial` and advances through `policy`
    /// on each read, in UTC
    ///
    /// The policy may be a fixed [`Duration`] step or an arbitrary function;
    /// see [`AdvancePolicy`].
    pub fn auto_advancing_by(initial: Timestamp, policy: impl Into<AdvancePolicy>) -> Self {
        Self::auto_advancing_in(initial, default_zone(), policy)
    }

    /// Create a clock that starts at `initial`, reports `zone`, and advances
    /// through `policy` on each read
    pub fn auto_advancing_in(
        initial: Timestamp,
        zone: Zone,
        policy: impl Into<AdvancePolicy>,
    ) -> Self {
        Self::new(
            ClockStrategy::AutoAdvance {
                current: initial,
                advance: policy.into(),
            },
            zone,
            ClockState::Active,
        )
    }

    /// Create a builder for a clock backed by a scripted sequence of instants
    pub fn sequence_builder() -> SequenceBuilder {
        SequenceBuilder::new()
    }

    /// Create a sequence-backed clock, configuring the builder in `body`
    pub fn sequence(body: impl FnOnce(&mut SequenceBuilder)) -> Self {
        let mut builder = SequenceBuilder::new();
        body(&mut builder);
        builder.build()
    }

    pub(crate) fn from_strategy(strategy: ClockStrategy, zone: Zone) -> Self {
        Self::new(strategy, zone, ClockState::Active)
    }

    fn new(strategy: ClockStrategy, zone: Zone, state: ClockState) -> Self {
        Self {
            strategy: Arc::new(Mutex::new(strategy)),
            zone,
            state: Mutex::new(state),
        }
    }

    fn guard(&self) -> ClockResult<()> {
        match *self.state.lock() {
            ClockState::Active => Ok(()),
            ClockState::Finished => Err(ClockError::InvalidState),
        }
    }

    /// Move the clock forward one second
    pub fn tick(&self) -> ClockResult<()> {
        self.tick_by(Duration::seconds(1))
    }

    /// Move the clock by `delta`
    ///
    /// A negative duration moves the clock backwards. Fails with
    /// [`ClockError::UnsupportedOperation`] on sequence-backed clocks.
    pub fn tick_by(&self, delta: Duration) -> ClockResult<()> {
        self.guard()?;
        self.strategy.lock().tick(delta)
    }

    /// Change the clock to the given instant
    ///
    /// Fails with [`ClockError::UnsupportedOperation`] on sequence-backed
    /// clocks.
    pub fn move_to(&self, instant: Timestamp) -> ClockResult<()> {
        self.guard()?;
        debug!("moving clock to {}", instant);
        self.strategy.lock().move_to(instant)
    }

    /// Retire the clock
    ///
    /// Every subsequent operation fails with [`ClockError::InvalidState`].
    /// Calling `done` again is a no-op. Views created earlier with
    /// `with_zone` are not retired.
    pub fn done(&self) {
        let mut state = self.state.lock();
        if *state == ClockState::Active {
            debug!("retiring {} clock", self.strategy.lock().kind());
            *state = ClockState::Finished;
        }
    }
}

impl TimeSource for TimeSlip {
    fn now(&self) -> ClockResult<Timestamp> {
        self.guard()?;
        self.strategy.lock().read()
    }

    fn zone(&self) -> ClockResult<Zone> {
        self.guard()?;
        Ok(self.zone)
    }

    /// Returns a view of this clock reporting a different zone
    ///
    /// The view shares this clock's time state but has its own lifecycle.
    fn with_zone(&self, zone: Zone) -> ClockResult<Self> {
        self.guard()?;
        Ok(Self {
            strategy: Arc::clone(&self.strategy),
            zone,
            state: Mutex::new(ClockState::Active),
        })
    }

    fn name(&self) -> &str {
        self.strategy.lock().kind()
    }
}
