//! Lock-free "at most once per window" and "exactly once" gates for log call
//! sites, plus the glue to drive them from `tracing` macros.
//!
//! ```
//! use loggate::{warn_every_ms, warn_once};
//!
//! fn on_retry(attempt: u32) {
//!     warn_every_ms!(10_000, attempt, "upstream is flapping");
//!     warn_once!("retries are enabled; see the upstream dashboard");
//! }
//! # on_retry(1);
//! ```

pub mod clock;
pub mod config;
pub mod error;
pub mod gate;
mod macros;
pub mod metrics;
pub mod registry;
pub mod startup;
pub mod utils;

pub use clock::{Clock, SystemClock};
pub use error::SetupError;
pub use gate::{IntervalMillis, OnceGate, WindowedGate};
pub use registry::ThrottleRegistry;

#[doc(hidden)]
pub mod __private {
    pub use tracing;
}
