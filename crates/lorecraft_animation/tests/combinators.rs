//! Integration tests for sequence composition
//!
//! These tests verify that:
//! - Series children start only once their predecessor has completed
//! - Parallel joins on the slowest child, not the fastest
//! - Empty trees and delays complete as expected
//! - Time left over inside a frame carries into the next series step
//! - A superseded series stops instead of reclaiming its value

use lorecraft_animation::{AnimationScheduler, Easing, Interpolation, Sequence, Timing};

/// Tick in fixed steps until `run` completes, returning the elapsed time
fn run_until_done(
    scheduler: &mut AnimationScheduler,
    run: lorecraft_animation::RunId,
    step_ms: f32,
    limit_ms: f32,
) -> Option<f32> {
    let mut elapsed = 0.0;
    while elapsed < limit_ms {
        elapsed += step_ms;
        if scheduler.tick(step_ms).contains(&run) {
            return Some(elapsed);
        }
    }
    None
}

#[test]
fn test_parallel_joins_on_slowest_child() {
    let mut scheduler = AnimationScheduler::new();
    let a = scheduler.create_value(0.0);
    let b = scheduler.create_value(0.0);

    let run = scheduler.start(Sequence::parallel([
        Sequence::timing(Timing::to(a, 1.0, 100.0)),
        Sequence::timing(Timing::to(b, 1.0, 300.0)),
    ]));

    let done_at = run_until_done(&mut scheduler, run, 10.0, 1000.0);
    assert_eq!(done_at, Some(300.0));
    assert_eq!(scheduler.value(a), Some(1.0));
    assert_eq!(scheduler.value(b), Some(1.0));
}

#[test]
fn test_parallel_does_not_complete_when_fast_child_finishes() {
    let mut scheduler = AnimationScheduler::new();
    let a = scheduler.create_value(0.0);

    let run = scheduler.start(Sequence::parallel([
        Sequence::timing(Timing::to(a, 1.0, 100.0)),
        Sequence::delay(300.0),
    ]));

    assert!(scheduler.tick(150.0).is_empty());
    assert!(scheduler.is_running(run));
    assert_eq!(scheduler.value(a), Some(1.0));
    assert_eq!(scheduler.tick(150.0).as_slice(), &[run]);
}

#[test]
fn test_series_step_starts_after_predecessor_completes() {
    let mut scheduler = AnimationScheduler::new();
    let a = scheduler.create_value(0.0);
    let b = scheduler.create_value(0.0);

    let run = scheduler.start(Sequence::series([
        Sequence::timing(Timing::to(a, 100.0, 100.0)),
        Sequence::timing(Timing::to(b, 100.0, 100.0)),
    ]));

    // b must not move while a is still running
    for _ in 0..9 {
        scheduler.tick(10.0);
        assert_eq!(scheduler.value(b), Some(0.0));
    }
    scheduler.tick(10.0);
    assert_eq!(scheduler.value(a), Some(100.0));
    assert_eq!(scheduler.value(b), Some(0.0));

    scheduler.tick(10.0);
    assert_eq!(scheduler.value(b), Some(10.0));

    assert_eq!(run_until_done(&mut scheduler, run, 10.0, 1000.0), Some(90.0));
}

#[test]
fn test_series_carries_leftover_time_into_next_step() {
    let mut scheduler = AnimationScheduler::new();
    let v = scheduler.create_value(0.0);

    scheduler.start(Sequence::series([
        Sequence::delay(30.0),
        Sequence::timing(Timing::to(v, 100.0, 100.0)),
    ]));

    // one 50ms frame: 30ms of delay, then 20ms of the tween
    scheduler.tick(50.0);
    assert_eq!(scheduler.value(v), Some(20.0));
}

#[test]
fn test_series_tween_starts_from_position_at_its_start() {
    let mut scheduler = AnimationScheduler::new();
    let v = scheduler.create_value(0.0);

    scheduler.start(Sequence::series([
        Sequence::timing(Timing::to(v, 50.0, 100.0)),
        Sequence::timing(Timing::to(v, 0.0, 100.0)),
    ]));

    scheduler.tick(100.0);
    assert_eq!(scheduler.value(v), Some(50.0));
    scheduler.tick(50.0);
    assert_eq!(scheduler.value(v), Some(25.0));
}

#[test]
fn test_superseded_series_skips_remaining_steps() {
    let mut scheduler = AnimationScheduler::new();
    let zoom = scheduler.create_value(0.0);

    let first = scheduler.start(Sequence::series([
        Sequence::timing(Timing::to(zoom, 100.0, 100.0)),
        Sequence::timing(Timing::to(zoom, 0.0, 100.0)),
    ]));
    scheduler.tick(50.0);
    assert_eq!(scheduler.value(zoom), Some(50.0));

    let second = scheduler.start(Timing::to(zoom, 10.0, 100.0));
    let finished = scheduler.tick(50.0);
    assert_eq!(finished.as_slice(), &[first]);
    // the stale run's second step never reclaims the value
    assert_eq!(scheduler.value(zoom), Some(30.0));

    assert_eq!(scheduler.tick(50.0).as_slice(), &[second]);
    assert_eq!(scheduler.value(zoom), Some(10.0));
}

#[test]
fn test_empty_trees_complete_immediately() {
    let mut scheduler = AnimationScheduler::new();
    let series = scheduler.start(Sequence::series([]));
    let parallel = scheduler.start(Sequence::parallel([]));

    assert!(!scheduler.is_running(series));
    assert!(!scheduler.is_running(parallel));

    let finished = scheduler.tick(0.0);
    assert!(finished.contains(&series));
    assert!(finished.contains(&parallel));
}

#[test]
fn test_delay_has_no_value_effect() {
    let mut scheduler = AnimationScheduler::new();
    let v = scheduler.create_value(4.0);
    let run = scheduler.start(Sequence::delay(200.0));

    assert!(scheduler.tick(199.0).is_empty());
    assert_eq!(scheduler.value(v), Some(4.0));
    assert_eq!(scheduler.tick(1.0).as_slice(), &[run]);
}

#[test]
fn test_nested_tree_completes_once() {
    let mut scheduler = AnimationScheduler::new();
    let v = scheduler.create_value(0.0);
    let zoom = scheduler.create_value(0.0);

    let run = scheduler.start(Sequence::parallel([
        Sequence::timing(Timing::to(v, 100.0, 750.0)),
        Sequence::series([
            Sequence::timing(Timing::to(zoom, 100.0, 375.0)),
            Sequence::timing(Timing::to(zoom, 0.0, 375.0)),
        ]),
    ]));

    let mut completions = 0;
    for _ in 0..200 {
        completions += scheduler
            .tick(16.0)
            .iter()
            .filter(|id| **id == run)
            .count();
    }
    assert_eq!(completions, 1);
    assert_eq!(scheduler.value(zoom), Some(0.0));
    assert!(!scheduler.has_active_runs());
}

#[test]
fn test_back_out_overshoots_then_settles() {
    let mut scheduler = AnimationScheduler::new();
    let top = scheduler.create_value(100.0);
    scheduler.start(Timing::to(top, 0.0, 1000.0).easing(Easing::back_out()));

    let mut lowest = f32::MAX;
    for _ in 0..100 {
        scheduler.tick(10.0);
        lowest = lowest.min(scheduler.value(top).unwrap_or(f32::MAX));
    }
    assert!(lowest < 0.0, "expected overshoot past the target, got {lowest}");
    assert_eq!(scheduler.value(top), Some(0.0));
}

#[test]
fn test_sequence_description_is_reusable() {
    let mut scheduler = AnimationScheduler::new();
    let v = scheduler.create_value(0.0);
    let bounce = Sequence::series([
        Sequence::timing(Timing::to(v, 10.0, 50.0)),
        Sequence::timing(Timing::to(v, 0.0, 50.0)),
    ]);

    let first = scheduler.start(bounce.clone());
    assert_eq!(run_until_done(&mut scheduler, first, 10.0, 500.0), Some(100.0));

    let second = scheduler.start(bounce);
    scheduler.tick(50.0);
    assert_eq!(scheduler.value(v), Some(10.0));
    assert_eq!(run_until_done(&mut scheduler, second, 10.0, 500.0), Some(50.0));

    let half = Interpolation::new([0.0, 10.0], [0.0, 0.5]).unwrap();
    assert_eq!(scheduler.sample(v, &half), Some(0.0));
}
