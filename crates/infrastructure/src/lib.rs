//! Infrastructure layer - Adapters for external systems
//!
//! Implements the ports defined in the application layer on top of the
//! Open-Meteo clients, and owns configuration loading and logging setup.

pub mod adapters;
pub mod config;
pub mod telemetry;

pub use adapters::*;
pub use config::{AppConfig, CONFIG_PATH_ENV, ServerConfig};
pub use integration_openmeteo::UpstreamFetcher;
pub use telemetry::{LogFormat, LoggingConfig, TelemetryError, init_logging};
