//! Adapters implementing the application ports

mod air_quality_adapter;
mod weather_adapter;

pub use air_quality_adapter::OpenMeteoAirQualityAdapter;
use application::error::ApplicationError;
use integration_openmeteo::{UpstreamError, UpstreamFetcher};
pub use weather_adapter::OpenMeteoWeatherAdapter;

/// Build the connection pool every adapter shares
///
/// # Errors
///
/// Returns a configuration error if the HTTP client cannot be built.
pub fn shared_fetcher() -> Result<UpstreamFetcher, ApplicationError> {
    UpstreamFetcher::new().map_err(|e| ApplicationError::Configuration(e.to_string()))
}

/// Every upstream failure means the provider is unavailable
fn upstream_unavailable(err: UpstreamError) -> ApplicationError {
    ApplicationError::UpstreamUnavailable(err.to_string())
}
