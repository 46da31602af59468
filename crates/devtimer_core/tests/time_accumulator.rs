use devtimer_core::{ClampedTime, RunState, StopwatchError, TimeAccumulator};

#[test]
fn irregular_ticks_sum_to_wall_clock_deltas() {
    let deltas = [10_u64, 7, 23, 0, 1, 150, 9, 11];
    let mut acc = TimeAccumulator::new();
    acc.set_preset(12).expect("stopped accumulator accepts preset");

    let mut now = 5_000_u64;
    acc.start(now);
    for delta in deltas {
        now += delta;
        assert_eq!(acc.sample(now), delta);
    }

    assert_eq!(acc.elapsed_ms(), 12_000 + deltas.iter().sum::<u64>());
}

#[test]
fn elapsed_freezes_while_stopped_and_resumes_from_new_anchor() {
    let mut acc = TimeAccumulator::new();
    acc.start(0);
    acc.sample(400);
    acc.pause();

    // Time passing while stopped is not counted.
    assert!(acc.start(10_000));
    acc.sample(10_250);

    assert_eq!(acc.elapsed_ms(), 650);
    assert_eq!(acc.state(), RunState::Running);
}

#[test]
fn set_time_clamps_out_of_range_parts() {
    let mut acc = TimeAccumulator::new();
    let clamped = acc.set_time(25, 70, 70).expect("stopped accumulator accepts set_time");

    assert_eq!(
        clamped,
        ClampedTime {
            hours: 23,
            minutes: 59,
            seconds: 59
        }
    );
    assert_eq!(acc.elapsed_ms(), 86_399_000);
    assert_eq!(acc.initial_ms(), 86_399_000);
}

#[test]
fn set_time_clamps_negative_parts_to_zero() {
    let mut acc = TimeAccumulator::new();
    acc.set_time(-1, -30, 5).expect("set_time");
    assert_eq!(acc.elapsed_ms(), 5_000);
}

#[test]
fn reset_restores_last_explicit_initial_value() {
    let mut acc = TimeAccumulator::new();
    acc.set_time(0, 1, 0).expect("set_time");

    acc.start(0);
    acc.sample(2_500);
    acc.pause();
    assert_eq!(acc.elapsed_ms(), 62_500);

    acc.reset().expect("reset while stopped");
    assert_eq!(acc.elapsed_ms(), 60_000);
}

#[test]
fn reset_without_initial_value_returns_to_zero() {
    let mut acc = TimeAccumulator::new();
    acc.start(100);
    acc.sample(900);
    acc.pause();

    acc.reset().expect("reset while stopped");
    assert_eq!(acc.elapsed_ms(), 0);
}

#[test]
fn reset_is_rejected_while_running() {
    let mut acc = TimeAccumulator::new();
    acc.start(0);
    acc.sample(10);

    assert_eq!(acc.reset(), Err(StopwatchError::Running));
    assert_eq!(acc.elapsed_ms(), 10);
}

#[test]
fn snapshot_reflects_state_and_display() {
    let mut acc = TimeAccumulator::new();
    acc.set_preset(46).expect("preset");
    acc.start(0);

    let snapshot = acc.snapshot();
    assert_eq!(snapshot.state, RunState::Running);
    assert_eq!(snapshot.initial_ms, 46_000);
    assert_eq!(snapshot.display.full(), "00:00:46");

    let json = serde_json::to_value(&snapshot).expect("serialize snapshot");
    assert_eq!(json["state"], "running");
    assert_eq!(json["elapsed_ms"], 46_000);
}
