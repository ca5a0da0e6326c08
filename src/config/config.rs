use figment::Figment;
use figment::providers::{Env, Format, Yaml};
use schemars::{JsonSchema, schema_for};
use serde::{Deserialize, Serialize};

use super::logging::LoggingConfig;
use crate::error::SetupError;

/// A top-level enum for versioned configurations.
#[derive(Deserialize, Serialize, JsonSchema)]
#[serde(tag = "version")]
pub enum Config {
    #[serde(rename = "1.0.0")]
    ConfigV1(ConfigV1),
}

/// Configuration v1.0.0: logging setup, throttle defaults and the demo run.
#[derive(Deserialize, Serialize, Debug, Clone, JsonSchema)]
pub struct ConfigV1 {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub throttle: ThrottleConfig,
    #[serde(default)]
    pub demo: DemoConfig,
}

/// Defaults for call sites that do not pick their own interval.
#[derive(Deserialize, Serialize, Debug, Clone, JsonSchema)]
pub struct ThrottleConfig {
    /// Window length in milliseconds. Zero or negative disables throttling.
    #[serde(default = "default_interval_ms")]
    pub default_interval_ms: i64,
}

impl Default for ThrottleConfig {
    fn default() -> Self {
        Self {
            default_interval_ms: default_interval_ms(),
        }
    }
}

fn default_interval_ms() -> i64 {
    10_000
}

/// Shape of the contention run performed by the `loggate` binary.
#[derive(Deserialize, Serialize, Debug, Clone, JsonSchema)]
pub struct DemoConfig {
    #[serde(default = "default_threads")]
    pub threads: usize,
    #[serde(default = "default_iterations")]
    pub iterations: u64,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            threads: default_threads(),
            iterations: default_iterations(),
        }
    }
}

fn default_threads() -> usize {
    8
}

fn default_iterations() -> u64 {
    100_000
}

/// Load config from the YAML file at `path`, with `LOGGATE_`-prefixed
/// environment variables layered on top (`LOGGATE_LOGGING__LEVEL=debug`).
pub fn load_config(path: &str) -> Result<ConfigV1, SetupError> {
    let figment = Figment::new()
        .merge(Yaml::file(path))
        .merge(Env::prefixed("LOGGATE_").split("__"));
    extract_config(figment)
}

/// Extract and unwrap a versioned configuration from any figment.
pub fn extract_config(figment: Figment) -> Result<ConfigV1, SetupError> {
    match figment.extract::<Config>()? {
        Config::ConfigV1(c) => Ok(c),
    }
}

/// JSON schema of the configuration, pretty-printed.
pub fn schema_json() -> Result<String, serde_json::Error> {
    let schema = schema_for!(Config);
    serde_json::to_string_pretty(&schema)
}
