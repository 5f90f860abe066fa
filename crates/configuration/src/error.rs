use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(#[from] config::ConfigError),

    /// A setting parsed but its value is unusable.
    #[error("Invalid configuration value for '{field}': {reason}")]
    ValidationError { field: &'static str, reason: String },
}
