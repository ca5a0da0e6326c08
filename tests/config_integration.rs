use std::fs;

use loggate::SetupError;
use loggate::config::{LogFormat, LoggingConfig, load_config};
use loggate::utils::logger::init_logging;

const TEST_CONFIG: &str = r#"
version: "1.0.0"
logging:
  level: "warn"
  format: "json"
throttle:
  default_interval_ms: 0
"#;

#[test]
fn loads_yaml_file_from_disk() {
    let path = std::env::temp_dir().join(format!("loggate-config-{}.yaml", std::process::id()));
    fs::write(&path, TEST_CONFIG).expect("failed to write test config");

    let config = load_config(path.to_str().unwrap()).expect("config should load");
    fs::remove_file(&path).ok();

    assert_eq!(config.logging.level, "warn");
    assert_eq!(config.logging.format, LogFormat::Json);
    assert_eq!(config.throttle.default_interval_ms, 0);
    assert_eq!(config.demo.iterations, 100_000);
}

#[test]
fn missing_version_tag_is_an_error() {
    let path = std::env::temp_dir().join(format!("loggate-noversion-{}.yaml", std::process::id()));
    fs::write(&path, "logging:\n  level: info\n").expect("failed to write test config");

    let result = load_config(path.to_str().unwrap());
    fs::remove_file(&path).ok();

    assert!(matches!(result, Err(SetupError::Config(_))));
}

#[test]
fn invalid_level_is_rejected_before_installing_a_subscriber() {
    let config = LoggingConfig {
        level: "loud".to_string(),
        ..LoggingConfig::default()
    };
    assert!(matches!(
        init_logging(&config),
        Err(SetupError::InvalidLogLevel(level)) if level == "loud"
    ));
}
