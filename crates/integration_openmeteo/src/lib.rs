//! Open-Meteo integration
//!
//! Clients for the Open-Meteo Air Quality API (<https://open-meteo.com/en/docs/air-quality-api>)
//! and Weather Forecast API (<https://open-meteo.com/en/docs>). Both are usable
//! without an API key; a commercial key is appended as `apikey` when configured.
//!
//! All outbound traffic goes through [`UpstreamFetcher`], which turns every
//! network, status, or decoding failure into an [`UpstreamError`].

mod air_quality;
mod config;
mod error;
mod fetcher;
mod models;
mod weather;

pub use air_quality::OpenMeteoAirQualityClient;
pub use config::{AirQualityConfig, WeatherConfig};
pub use error::UpstreamError;
pub use fetcher::{DEFAULT_TIMEOUT, UpstreamFetcher};
pub use models::AirQualityCurrent;
pub use weather::OpenMeteoWeatherClient;
