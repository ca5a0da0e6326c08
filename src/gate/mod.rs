//! Lock-free gates deciding when a call site may perform its action.
//!
//! Each gate is a single atomic word owned by one call site. A gate only
//! answers "may I fire now?"; running the action is the caller's business.

mod interval;
mod once;
mod windowed;

pub use interval::IntervalMillis;
pub use once::OnceGate;
pub use windowed::WindowedGate;
