use timeslip_core::{Timestamp, Zone, default_zone};

use crate::slip::TimeSlip;
use crate::strategy::ClockStrategy;

/// Builder for a [`TimeSlip`] backed by a scripted sequence of instants
///
/// `first*` and `then*` append identically; the two names exist so call
/// sites read in script order. The built sequence is the concatenation of
/// every added instant in call order. `build` freezes a copy of the working
/// list, so one builder can produce any number of independent clocks.
pub struct SequenceBuilder {
    instants: Vec<Timestamp>,
    cycle: bool,
    zone: Zone,
}

impl SequenceBuilder {
    pub fn new() -> Self {
        Self {
            instants: Vec::new(),
            cycle: false,
            zone: default_zone(),
        }
    }

    /// Add the opening instant of the sequence
    pub fn first(&mut self, instant: Timestamp) -> &mut Self {
        self.instants.push(instant);
        self
    }

    /// Add the opening instants of the sequence, in argument order
    pub fn first_all<I>(&mut self, instants: I) -> &mut Self
    where
        I: IntoIterator<Item = Timestamp>,
    {
        self.instants.extend(instants);
        self
    }

    /// Add the next instant of the sequence
    pub fn then(&mut self, instant: Timestamp) -> &mut Self {
        self.instants.push(instant);
        self
    }

    /// Add the next instants of the sequence, in argument order
    pub fn then_all<I>(&mut self, instants: I) -> &mut Self
    where
        I: IntoIterator<Item = Timestamp>,
    {
        self.instants.extend(instants);
        self
    }

    /// Specify if the sequence should repeat
    ///
    /// When `true`, the sequence restarts from its first instant after the
    /// last one is returned. When `false`, reads past the end fail with
    /// [`ClockError::ExhaustedSequence`](timeslip_ports::ClockError).
    pub fn cycle(&mut self, should_cycle: bool) -> &mut Self {
        self.cycle = should_cycle;
        self
    }

    /// Set the zone reported by built clocks. Defaults to UTC.
    pub fn zone(&mut self, zone: Zone) -> &mut Self {
        self.zone = zone;
        self
    }

    /// Get the zone currently configured for built clocks
    pub fn get_zone(&self) -> Zone {
        self.zone
    }

    /// Construct a clock that provides instants from the configured sequence
    ///
    /// An empty sequence builds a clock whose every read fails with
    /// [`ClockError::ExhaustedSequence`](timeslip_ports::ClockError).
    pub fn build(&self) -> TimeSlip {
        TimeSlip::from_strategy(
            ClockStrategy::Sequence {
                items: self.instants.clone(),
                cursor: 0,
                cycle: self.cycle,
            },
            self.zone,
        )
    }
}

impl Default for SequenceBuilder {
    fn default() -> Self {
        Self::new()
    }
}
