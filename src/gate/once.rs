use std::sync::atomic::{AtomicBool, Ordering};

/// Opens for exactly one caller over its whole lifetime and never re-arms.
///
/// Only the flag itself is synchronised: winning the gate says nothing about
/// the visibility of other memory written by the winner.
#[derive(Debug, Default)]
pub struct OnceGate {
    fired: AtomicBool,
}

impl OnceGate {
    pub const fn new() -> Self {
        Self {
            fired: AtomicBool::new(false),
        }
    }

    /// Returns `true` for the first caller only.
    ///
    /// Once the gate has fired this is a plain load with no read-modify-write.
    #[inline]
    pub fn try_acquire(&self) -> bool {
        if self.fired.load(Ordering::Relaxed) {
            return false;
        }

        #[cfg(test)]
        super::probe::record_write();

        !self.fired.swap(true, Ordering::Relaxed)
    }

    pub fn has_fired(&self) -> bool {
        self.fired.load(Ordering::Relaxed)
    }
}
