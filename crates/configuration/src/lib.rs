use crate::error::ConfigError;
use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use settings::{ChartSettings, Config, DashboardSettings, LoggingSettings, ServerSettings};

/// The file `load_config` reads when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "compset.toml";

/// Prefix of the environment variables that override file settings,
/// e.g. `COMPSET__SERVER__PORT=8080`.
pub const ENV_PREFIX: &str = "COMPSET";

/// Loads the application configuration.
///
/// Sources are layered, later ones winning: built-in defaults, the TOML file at
/// `path` (or `compset.toml`; a missing file is not an error), then `COMPSET__*`
/// environment variables. The merged result is validated before it is returned.
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    let file = path.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILE));

    let builder = with_defaults(config::Config::builder())?
        .add_source(config::File::from(file).required(path.is_some()))
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    // Attempt to deserialize the entire configuration into our `Config` struct
    let config = builder.try_deserialize::<Config>()?;
    validate(&config)?;

    tracing::debug!(file = %file.display(), "Configuration loaded.");
    Ok(config)
}

/// The configuration used when no file or environment overrides exist.
pub fn default_config() -> Result<Config, ConfigError> {
    let config = with_defaults(config::Config::builder())?
        .build()?
        .try_deserialize::<Config>()?;
    Ok(config)
}

fn with_defaults(
    builder: config::ConfigBuilder<config::builder::DefaultState>,
) -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
    let builder = builder
        .set_default("dashboard.title", "Detailed BNBME Performance Dashboard (2024)")?
        .set_default(
            "dashboard.subtitle",
            "Explore BNBME's performance metrics in detail, including advanced indices and comparisons.",
        )?
        .set_default(
            "dashboard.logo_url",
            "https://www.yello.ae/img/ae/f/1539409694-97-bnbme-holiday-homes-by-hoteliers.png",
        )?
        .set_default("chart.width", 960_i64)?
        .set_default("chart.height", 540_i64)?
        .set_default("server.host", "127.0.0.1")?
        .set_default("server.port", 3000_i64)?
        .set_default("logging.level", "info")?;
    Ok(builder)
}

fn validate(config: &Config) -> Result<(), ConfigError> {
    let ChartSettings { width, height } = config.chart;
    if width == 0 || height == 0 {
        return Err(ConfigError::ValidationError {
            field: "chart",
            reason: format!("size must be positive, got {width}x{height}"),
        });
    }
    for (field, value) in [
        ("dashboard.title", &config.dashboard.title),
        ("server.host", &config.server.host),
        ("logging.level", &config.logging.level),
    ] {
        if value.trim().is_empty() {
            return Err(ConfigError::ValidationError { field, reason: "must not be empty".to_string() });
        }
    }
    Ok(())
}
