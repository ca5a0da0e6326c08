use thiserror::Error;

/// Errors raised while wiring up configuration, logging and metrics.
///
/// The gates themselves cannot fail.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("failed to load configuration: {0}")]
    Config(#[from] Box<figment::Error>),

    #[error("invalid logging.level '{0}'. Valid values: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("failed to install logger: {0}")]
    LoggerInit(String),

    #[error("failed to register metrics: {0}")]
    Metrics(#[from] prometheus::Error),
}

impl From<figment::Error> for SetupError {
    fn from(err: figment::Error) -> Self {
        SetupError::Config(Box::new(err))
    }
}
