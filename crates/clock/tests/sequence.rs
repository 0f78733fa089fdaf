//! Integration tests for sequence-backed clocks and the builder.

mod common;

use timeslip_clock::{ClockError, TimeSlip, TimeSource};
use timeslip_core::default_zone;

use common::{some_duration, some_instant, some_other_instant, some_zone};

#[test]
fn empty_sequence_fails_immediately() {
    let clock = TimeSlip::sequence(|_| {});

    assert_eq!(clock.now(), Err(ClockError::ExhaustedSequence));
}

#[test]
fn empty_cycling_sequence_fails_immediately() {
    let clock = TimeSlip::sequence(|seq| {
        seq.cycle(true);
    });

    assert_eq!(clock.now(), Err(ClockError::ExhaustedSequence));
}

#[test]
fn sequence_rejects_tick() {
    let clock = TimeSlip::sequence(|seq| {
        seq.first(some_instant());
    });

    assert_eq!(
        clock.tick(),
        Err(ClockError::UnsupportedOperation { operation: "tick" })
    );
    assert_eq!(
        clock.tick_by(some_duration()),
        Err(ClockError::UnsupportedOperation { operation: "tick" })
    );
}

#[test]
fn sequence_rejects_move_to() {
    let clock = TimeSlip::sequence(|seq| {
        seq.first(some_instant());
    });

    assert_eq!(
        clock.move_to(some_instant()),
        Err(ClockError::UnsupportedOperation {
            operation: "move_to"
        })
    );
}

#[test]
fn retired_sequence_reports_invalid_state_before_unsupported() {
    let clock = TimeSlip::sequence(|seq| {
        seq.first(some_instant());
    });

    clock.done();

    assert_eq!(clock.tick(), Err(ClockError::InvalidState));
    assert_eq!(clock.now(), Err(ClockError::InvalidState));
}

#[test]
fn one_instant_returns_once_then_exhausts() {
    let clock = TimeSlip::sequence(|seq| {
        seq.first(some_instant());
    });

    assert_eq!(clock.now(), Ok(some_instant()));
    assert_eq!(clock.now(), Err(ClockError::ExhaustedSequence));
}

#[test]
fn two_instants_return_in_order_then_exhaust() {
    let clock = TimeSlip::sequence(|seq| {
        seq.first(some_instant()).then(some_other_instant());
    });

    assert_eq!(clock.now(), Ok(some_instant()));
    assert_eq!(clock.now(), Ok(some_other_instant()));
    assert_eq!(clock.now(), Err(ClockError::ExhaustedSequence));
}

#[test]
fn iterator_forms_preserve_argument_order() {
    let _ = env_logger::try_init();
    let a = some_instant();
    let b = some_instant() + some_duration() + some_duration();
    let c = some_other_instant();
    let d = some_instant() + some_duration();

    let clock = TimeSlip::sequence(|seq| {
        seq.first_all([a, b]).then_all([c, d]);
    });

    assert_eq!(clock.now(), Ok(a));
    assert_eq!(clock.now(), Ok(b));
    assert_eq!(clock.now(), Ok(c));
    assert_eq!(clock.now(), Ok(d));
}

#[test]
fn one_instant_cycle_constantly_returns_it() {
    let clock = TimeSlip::sequence(|seq| {
        seq.first(some_instant()).cycle(true);
    });

    for _ in 0..3 {
        assert_eq!(clock.now(), Ok(some_instant()));
    }
}

#[test]
fn two_instant_cycle_alternates() {
    let clock = TimeSlip::sequence(|seq| {
        seq.first(some_instant()).then(some_other_instant()).cycle(true);
    });

    for _ in 0..3 {
        assert_eq!(clock.now(), Ok(some_instant()));
        assert_eq!(clock.now(), Ok(some_other_instant()));
    }
}

#[test]
fn then_before_first_keeps_call_order() {
    let clock = TimeSlip::sequence(|seq| {
        seq.then(some_other_instant()).first(some_instant());
    });

    assert_eq!(clock.now(), Ok(some_other_instant()));
    assert_eq!(clock.now(), Ok(some_instant()));
}

#[test]
fn sequence_clock_defaults_to_utc_zone() {
    let clock = TimeSlip::sequence(|seq| {
        seq.first(some_instant());
    });

    assert_eq!(clock.zone(), Ok(default_zone()));
}

#[test]
fn sequence_clock_reports_configured_zone() {
    let clock = TimeSlip::sequence(|seq| {
        seq.zone(some_zone()).first(some_instant());
    });

    assert_eq!(clock.zone(), Ok(some_zone()));
}

#[test]
fn builder_produces_independent_clocks() {
    let mut builder = TimeSlip::sequence_builder();
    builder.first(some_instant()).then(some_other_instant());

    let one = builder.build();
    let two = builder.build();

    assert_eq!(one.now(), Ok(some_instant()));
    assert_eq!(one.now(), Ok(some_other_instant()));
    // The second clock starts from the top of the script
    assert_eq!(two.now(), Ok(some_instant()));
}

#[test]
fn with_zone_view_of_sequence_shares_the_cursor() {
    let clock = TimeSlip::sequence(|seq| {
        seq.first(some_instant()).then(some_other_instant());
    });
    let view = clock.with_zone(some_zone()).unwrap();

    assert_eq!(clock.now(), Ok(some_instant()));
    // The view continues the script rather than restarting it
    assert_eq!(view.now(), Ok(some_other_instant()));
    assert_eq!(clock.now(), Err(ClockError::ExhaustedSequence));
}
