//! Prometheus counters for gate decisions made through the registry.

mod recorder;

pub use recorder::Metrics;
