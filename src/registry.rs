//! Gates looked up by a stable call-site key instead of living in a `static`.
//!
//! Useful when the call site is data-driven (one key per provider, per peer,
//! per error class). Lookup takes a read lock on the key map; only the first
//! use of a key takes the write lock. The decision itself is made by the
//! site's lock-free gate.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

use crate::clock::{Clock, SystemClock};
use crate::gate::{IntervalMillis, OnceGate, WindowedGate};
use crate::metrics::Metrics;

#[derive(Debug, Default)]
struct WindowSite {
    gate: WindowedGate,
    suppressed: AtomicU64,
}

/// Process-wide or scoped map from call-site key to gate.
#[derive(Default)]
pub struct ThrottleRegistry {
    windows: RwLock<HashMap<String, Arc<WindowSite>>>,
    onces: RwLock<HashMap<String, Arc<OnceGate>>>,
    metrics: Option<Metrics>,
}

impl ThrottleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry that records every decision into `metrics`.
    pub fn with_metrics(metrics: Metrics) -> Self {
        Self {
            metrics: Some(metrics),
            ..Self::default()
        }
    }

    /// Returns `Some(suppressed_count)` when a log for `key` should be emitted
    /// at `now_millis`, otherwise `None` and the call is counted as suppressed.
    ///
    /// The count covers calls rejected around the previous window. Under
    /// contention it can shift between adjacent windows in either direction:
    /// a call rejected just before the winner resets the counter may land in
    /// the next report, and a call rejected in the new window may land in this
    /// one if it counts itself before the winner's reset.
    pub fn should_emit(
        &self,
        key: &str,
        interval: impl IntervalMillis,
        now_millis: i64,
    ) -> Option<u64> {
        let site = lookup_or_insert(&self.windows, key);
        let emitted = site.gate.try_acquire(now_millis, interval.as_interval_millis());
        self.record(key, "windowed", emitted);

        if emitted {
            Some(site.suppressed.swap(0, Ordering::AcqRel))
        } else {
            site.suppressed.fetch_add(1, Ordering::Relaxed);
            None
        }
    }

    /// [`should_emit`](Self::should_emit) sampling `clock` for the time.
    pub fn should_emit_with<C>(
        &self,
        key: &str,
        interval: impl IntervalMillis,
        clock: &C,
    ) -> Option<u64>
    where
        C: Clock + ?Sized,
    {
        let interval_millis = interval.as_interval_millis();
        let now_millis = if interval_millis <= 0 { 0 } else { clock.now_millis() };
        self.should_emit(key, interval_millis, now_millis)
    }

    /// `true` the first time `key` is seen by this registry.
    pub fn once(&self, key: &str) -> bool {
        let gate = lookup_or_insert(&self.onces, key);
        let emitted = gate.try_acquire();
        self.record(key, "once", emitted);
        emitted
    }

    /// Number of distinct keys known to the registry.
    pub fn len(&self) -> usize {
        let windows = self
            .windows
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len();
        let onces = self
            .onces
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len();
        windows + onces
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn record(&self, key: &str, gate: &str, emitted: bool) {
        if let Some(metrics) = &self.metrics {
            metrics.record_decision(key, gate, emitted);
        }
    }
}

fn lookup_or_insert<T: Default>(map: &RwLock<HashMap<String, Arc<T>>>, key: &str) -> Arc<T> {
    // A panic elsewhere cannot leave the map half-updated, so poisoning is ignored.
    if let Some(site) = map.read().unwrap_or_else(PoisonError::into_inner).get(key) {
        return Arc::clone(site);
    }
    let mut map = map.write().unwrap_or_else(PoisonError::into_inner);
    Arc::clone(map.entry(key.to_string()).or_default())
}

static GLOBAL: OnceLock<ThrottleRegistry> = OnceLock::new();

/// The process-wide registry used by [`should_emit`] and [`emit_once`].
pub fn global() -> &'static ThrottleRegistry {
    GLOBAL.get_or_init(ThrottleRegistry::new)
}

/// Returns `Some(suppressed_count)` when a log for `key` should be emitted now,
/// otherwise `None` and the event is counted as suppressed for the active window.
pub fn should_emit(key: &str, interval: impl IntervalMillis) -> Option<u64> {
    global().should_emit_with(key, interval, &SystemClock)
}

/// `true` the first time `key` is passed in this process.
pub fn emit_once(key: &str) -> bool {
    global().once(key)
}
