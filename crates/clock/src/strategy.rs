use chrono::Duration;
use timeslip_core::Timestamp;
use timeslip_ports::{ClockError, ClockResult};

use crate::policy::AdvancePolicy;

/// The active algorithm governing how a clock's next instant is produced
///
/// The set of strategies is fixed and closed; every operation dispatches
/// with an exhaustive match.
pub(crate) enum ClockStrategy {
    /// Frozen time, moved only by `tick`/`move_to`
    Manual { current: Timestamp },
    /// Steps forward through its policy on every read
    AutoAdvance {
        current: Timestamp,
        advance: AdvancePolicy,
    },
    /// Scripted instants consumed in order; `cursor` only ever grows
    Sequence {
        items: Vec<Timestamp>,
        cursor: usize,
        cycle: bool,
    },
}

impl ClockStrategy {
    /// Produce the current instant, advancing internal state as the
    /// strategy dictates.
    pub(crate) fn read(&mut self) -> ClockResult<Timestamp> {
        match self {
            ClockStrategy::Manual { current } => Ok(*current),
            ClockStrategy::AutoAdvance { current, advance } => {
                let result = *current;
                *current = advance.apply(result);
                Ok(result)
            }
            ClockStrategy::Sequence {
                items,
                cursor,
                cycle,
            } => {
                if items.is_empty() || (!*cycle && *cursor >= items.len()) {
                    return Err(ClockError::ExhaustedSequence);
                }
                let result = items[*cursor % items.len()];
                *cursor += 1;
                Ok(result)
            }
        }
    }

    /// Shift the current instant by `delta` (any sign, no validation).
    pub(crate) fn tick(&mut self, delta: Duration) -> ClockResult<()> {
        match self {
            ClockStrategy::Manual { current }
            | ClockStrategy::AutoAdvance { current, .. } => {
                *current = *current + delta;
                Ok(())
            }
            ClockStrategy::Sequence { .. } => {
                Err(ClockError::UnsupportedOperation { operation: "tick" })
            }
        }
    }

    /// Relocate the current instant unconditionally.
    pub(crate) fn move_to(&mut self, instant: Timestamp) -> ClockResult<()> {
        match self {
            ClockStrategy::Manual { current }
            | ClockStrategy::AutoAdvance { current, .. } => {
                *current = instant;
                Ok(())
            }
            ClockStrategy::Sequence { .. } => Err(ClockError::UnsupportedOperation {
                operation: "move_to",
            }),
        }
    }

    pub(crate) fn kind(&self) -> &'static str {
        match self {
            ClockStrategy::Manual { .. } => "manual",
            ClockStrategy::AutoAdvance { .. } => "auto-advance",
            ClockStrategy::Sequence { .. } => "sequence",
        }
    }
}
