mod common;

use std::sync::Arc;

use common::race;
use loggate::{OnceGate, WindowedGate};

const T0: i64 = 1_700_000_000_000;

#[test]
fn one_windowed_winner_among_many_racers() {
    for round in 0..20 {
        let gate = Arc::new(WindowedGate::new());
        let results = race(64, {
            let gate = Arc::clone(&gate);
            move |i| gate.try_acquire(T0 + (i as i64 % 1_000), 1_000)
        });
        assert_eq!(
            results.iter().filter(|won| **won).count(),
            1,
            "round {round} had the wrong number of winners"
        );
    }
}

#[test]
fn each_window_has_its_own_winner() {
    let gate = Arc::new(WindowedGate::new());
    for window in 0..5 {
        let start = T0 + window * 500;
        let results = race(16, {
            let gate = Arc::clone(&gate);
            move |_| gate.try_acquire(start, 500)
        });
        assert_eq!(results.iter().filter(|won| **won).count(), 1);
    }
}

#[test]
fn disabled_gating_lets_every_racer_through() {
    let gate = Arc::new(WindowedGate::new());
    let results = race(32, {
        let gate = Arc::clone(&gate);
        move |i| gate.try_acquire(T0 + i as i64, 0) && gate.try_acquire(T0, -50)
    });
    assert!(results.into_iter().all(|won| won));
}

#[test]
fn hundred_once_racers_yield_one_winner() {
    let gate = Arc::new(OnceGate::new());
    let results = race(100, {
        let gate = Arc::clone(&gate);
        move |_| gate.try_acquire()
    });
    assert_eq!(results.iter().filter(|won| **won).count(), 1);
    assert_eq!(results.iter().filter(|won| !**won).count(), 99);

    let late = race(10, {
        let gate = Arc::clone(&gate);
        move |_| gate.try_acquire()
    });
    assert!(late.into_iter().all(|won| !won));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn gates_hold_across_tokio_tasks() {
    let windowed = Arc::new(WindowedGate::new());
    let once = Arc::new(OnceGate::new());

    let tasks = (0..200).map(|i| {
        let windowed = Arc::clone(&windowed);
        let once = Arc::clone(&once);
        tokio::spawn(async move {
            tokio::task::yield_now().await;
            (windowed.try_acquire(T0 + i % 10, 60_000), once.try_acquire())
        })
    });

    let results: Vec<(bool, bool)> = futures::future::join_all(tasks)
        .await
        .into_iter()
        .map(|r| r.unwrap())
        .collect();

    assert_eq!(results.iter().filter(|(w, _)| *w).count(), 1);
    assert_eq!(results.iter().filter(|(_, o)| *o).count(), 1);
}

#[test]
fn manual_clock_drives_windows_through_the_clock_module() {
    use loggate::clock::ManualClock;

    let clock = ManualClock::new(T0);
    let gate = WindowedGate::new();
    assert!(gate.try_acquire_with(&clock, 1_000));
    clock.advance(999);
    assert!(!gate.try_acquire_with(&clock, 1_000));
    clock.advance(1);
    assert!(gate.try_acquire_with(&clock, 1_000));
}
