//! Application configuration
//!
//! Layered with the `config` crate:
//! 1. built-in defaults
//! 2. optional `config.toml` in the working directory, or the file named by
//!    `CLEANSKY_CONFIG`
//! 3. `CLEANSKY_*` environment variables, `__` separating nested keys
//!    (e.g. `CLEANSKY_SERVER__PORT=8080`, `CLEANSKY_WEATHER__API_KEY=...`)

mod server;

use integration_openmeteo::{AirQualityConfig, WeatherConfig};
use serde::{Deserialize, Serialize};

use crate::telemetry::LoggingConfig;

pub use server::ServerConfig;

/// Environment variable naming an alternative config file
pub const CONFIG_PATH_ENV: &str = "CLEANSKY_CONFIG";

const DEFAULT_CONFIG_FILE: &str = "config";
const ENV_PREFIX: &str = "CLEANSKY";

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Air-quality upstream
    #[serde(default)]
    pub air_quality: AirQualityConfig,

    /// Weather and forecast upstream
    #[serde(default)]
    pub weather: WeatherConfig,
}

impl AppConfig {
    /// Load configuration from environment and optional file
    pub fn load() -> Result<Self, config::ConfigError> {
        let file = std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());
        Self::from_sources(&file, Self::environment())
    }

    fn environment() -> config::Environment {
        config::Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .list_separator(",")
            .with_list_parse_key("server.allowed_origins")
            .try_parsing(true)
    }

    fn from_sources(file: &str, env: config::Environment) -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8000)?
            .add_source(config::File::with_name(file).required(false))
            .add_source(env);

        let config = builder.build()?;
        config.try_deserialize()
    }
}
