//! The contention run performed by the `loggate` binary.
//!
//! Many threads hammer the same handful of call sites; the report shows how
//! few of those calls actually reached the log sink.

use std::sync::Arc;
use std::thread::{self, ScopedJoinHandle};
use std::time::{Duration, Instant};
use tracing::info;

use crate::config::ConfigV1;
use crate::registry::ThrottleRegistry;
use crate::{SystemClock, info_once, warn_every_ms};

/// Outcome of a demo run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoReport {
    pub calls: u64,
    pub windowed_fires: u64,
    pub once_fires: u64,
    pub keyed_fires: u64,
    pub elapsed: Duration,
}

#[derive(Default)]
struct WorkerTally {
    windowed: u64,
    once: u64,
    keyed: u64,
}

fn hot_path(
    worker: usize,
    iteration: u64,
    interval_ms: i64,
    registry: &ThrottleRegistry,
    tally: &mut WorkerTally,
) {
    if warn_every_ms!(interval_ms, worker, iteration, "worker hit the throttled warning").is_some() {
        tally.windowed += 1;
    }
    if info_once!(worker, "first worker reached the hot path").is_some() {
        tally.once += 1;
    }

    let key = if worker % 2 == 0 { "demo.even" } else { "demo.odd" };
    if let Some(suppressed_count) = registry.should_emit_with(key, interval_ms, &SystemClock) {
        tally.keyed += 1;
        info!(key, suppressed_count, "keyed call site emitted");
    }
}

/// Joins every worker, re-raising the first worker panic on this thread.
fn join_workers<T>(handles: Vec<ScopedJoinHandle<'_, T>>) -> Vec<T> {
    handles
        .into_iter()
        .map(|handle| match handle.join() {
            Ok(tally) => tally,
            Err(payload) => std::panic::resume_unwind(payload),
        })
        .collect()
}

fn total_calls(threads: usize, iterations: u64) -> u64 {
    u64::try_from(threads)
        .unwrap_or(u64::MAX)
        .saturating_mul(iterations)
}

/// Runs the configured contention demo and logs a summary.
pub fn run(config: Arc<ConfigV1>) -> DemoReport {
    let threads = config.demo.threads.max(1);
    let iterations = config.demo.iterations;
    let interval_ms = config.throttle.default_interval_ms;
    let registry = ThrottleRegistry::new();
    let registry = &registry;

    info!(threads, iterations, interval_ms, "Starting contention run");
    let started = Instant::now();

    let tallies: Vec<WorkerTally> = thread::scope(|scope| {
        let handles: Vec<_> = (0..threads)
            .map(|worker| {
                scope.spawn(move || {
                    let mut tally = WorkerTally::default();
                    for iteration in 0..iterations {
                        hot_path(worker, iteration, interval_ms, registry, &mut tally);
                    }
                    tally
                })
            })
            .collect();

        join_workers(handles)
    });

    let report = DemoReport {
        calls: total_calls(threads, iterations),
        windowed_fires: tallies.iter().map(|t| t.windowed).sum(),
        once_fires: tallies.iter().map(|t| t.once).sum(),
        keyed_fires: tallies.iter().map(|t| t.keyed).sum(),
        elapsed: started.elapsed(),
    };

    info!(
        calls = report.calls,
        windowed_fires = report.windowed_fires,
        once_fires = report.once_fires,
        keyed_fires = report.keyed_fires,
        elapsed_ms = u64::try_from(report.elapsed.as_millis()).unwrap_or(u64::MAX),
        "Contention run finished"
    );
    report
}
