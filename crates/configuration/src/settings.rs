use serde::Deserialize;
use std::path::PathBuf;

/// The root configuration structure for the entire application.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub dashboard: DashboardSettings,
    pub chart: ChartSettings,
    pub server: ServerSettings,
    pub logging: LoggingSettings,
}

/// Header content of the dashboard page.
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardSettings {
    pub title: String,
    /// One-line description shown under the title.
    pub subtitle: String,
    /// Image shown above the title. Empty disables the logo.
    pub logo_url: String,
}

/// Size of the rendered chart image, in pixels.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ChartSettings {
    pub width: u32,
    pub height: u32,
}

/// Bind address of the web dashboard.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl ServerSettings {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Contains parameters for the tracing subscriber.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    /// Default filter directive when `RUST_LOG` is unset (e.g. "info" or "compset=debug").
    pub level: String,
    /// When set, logs are also written to a daily-rolling file in this directory.
    #[serde(default)]
    pub directory: Option<PathBuf>,
}
