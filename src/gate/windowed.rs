use std::sync::atomic::{AtomicI64, Ordering};

use super::IntervalMillis;
use crate::clock::Clock;

/// Opens at most once per interval, re-arming by itself once the interval has
/// elapsed since the last successful fire.
///
/// The only state is the timestamp of the last fire, starting at the UNIX
/// epoch, so a fresh gate opens on its first call.
///
/// ```
/// use loggate::gate::WindowedGate;
///
/// static GATE: WindowedGate = WindowedGate::new();
///
/// assert!(GATE.try_acquire(10_000, 10_000));
/// assert!(!GATE.try_acquire(15_000, 10_000));
/// assert!(GATE.try_acquire(20_000, 10_000));
/// ```
#[derive(Debug, Default)]
pub struct WindowedGate {
    last_fire_millis: AtomicI64,
}

impl WindowedGate {
    pub const fn new() -> Self {
        Self {
            last_fire_millis: AtomicI64::new(0),
        }
    }

    /// Decides whether the caller observing `now_millis` wins the current
    /// window of `interval_millis`.
    ///
    /// A non-positive interval disables gating and always returns `true`.
    /// Losing the race for a window returns `false`; there is no retry.
    pub fn try_acquire(&self, now_millis: i64, interval_millis: i64) -> bool {
        if interval_millis <= 0 {
            return true;
        }

        let prev = self.last_fire_millis.load(Ordering::Acquire);
        if now_millis.saturating_sub(prev) < interval_millis {
            return false;
        }

        #[cfg(test)]
        super::probe::record_write();

        self.last_fire_millis
            .compare_exchange(prev, now_millis, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
    }

    /// Like [`try_acquire`](Self::try_acquire), sampling `clock` once. The clock
    /// is not read at all when gating is disabled.
    pub fn try_acquire_with<C, I>(&self, clock: &C, interval: I) -> bool
    where
        C: Clock + ?Sized,
        I: IntervalMillis,
    {
        let interval_millis = interval.as_interval_millis();
        if interval_millis <= 0 {
            return true;
        }
        self.try_acquire(clock.now_millis(), interval_millis)
    }

    /// Timestamp of the last successful fire, `0` if the gate never fired.
    pub fn last_fire_millis(&self) -> i64 {
        self.last_fire_millis.load(Ordering::Acquire)
    }
}
