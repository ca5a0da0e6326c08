// Re-exports so callers can `use loggate::config::*`.
pub mod config;
pub mod logging;

pub use config::*;
pub use logging::*;
