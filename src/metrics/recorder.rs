//! Decision counting backed by a private Prometheus registry.

use prometheus::{
    CounterVec, Encoder, Opts, Registry, TextEncoder, register_counter_vec_with_registry,
};
use std::sync::Arc;

use crate::error::SetupError;

/// Counts emitted and suppressed decisions per call-site key.
#[derive(Clone)]
pub struct Metrics {
    registry: Arc<Registry>,
    decisions_total: CounterVec,
}

impl Metrics {
    pub fn new() -> Result<Self, SetupError> {
        let registry = Arc::new(Registry::new());

        let decisions_total = register_counter_vec_with_registry!(
            Opts::new(
                "loggate_decisions_total",
                "Gate decisions per call site and outcome"
            ),
            &["site", "gate", "outcome"],
            registry.clone()
        )?;

        Ok(Metrics {
            registry,
            decisions_total,
        })
    }

    /// Records one decision; `gate` is `"windowed"` or `"once"`.
    pub fn record_decision(&self, site: &str, gate: &str, emitted: bool) {
        let outcome = if emitted { "emitted" } else { "suppressed" };
        self.decisions_total
            .with_label_values(&[site, gate, outcome])
            .inc();
    }

    /// Renders all metrics in Prometheus text format.
    pub fn render(&self) -> Result<String, prometheus::Error> {
        let mut buffer = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
    }
}
