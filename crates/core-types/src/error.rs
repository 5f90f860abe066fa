use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Invalid input for {0}: {1}")]
    InvalidInput(String, String),

    #[error("Unknown metric '{0}'")]
    UnknownMetric(String),

    #[error("Unknown mode '{0}' (expected 'solo' or 'comparison')")]
    UnknownMode(String),

    #[error("Unknown property '{0}'")]
    UnknownProperty(String),
}
