//! Air-quality adapter - Implements AirQualityPort using integration_openmeteo

use application::{
    error::ApplicationError,
    ports::{AirQualityObservation, AirQualityPort},
};
use async_trait::async_trait;
use domain::Coordinate;
use integration_openmeteo::{AirQualityConfig, OpenMeteoAirQualityClient, UpstreamFetcher};
use tracing::{debug, instrument};

#[cfg(test)]
use super::shared_fetcher;
use super::upstream_unavailable;

/// Adapter for the Open-Meteo Air Quality API
#[derive(Debug, Clone)]
pub struct OpenMeteoAirQualityAdapter {
    client: OpenMeteoAirQualityClient,
}

impl OpenMeteoAirQualityAdapter {
    #[cfg(test)]
    fn with_config(config: AirQualityConfig) -> Result<Self, ApplicationError> {
        Ok(Self::with_fetcher(&shared_fetcher()?, config))
    }

    /// Create on a shared connection pool
    #[must_use]
    pub fn with_fetcher(fetcher: &UpstreamFetcher, config: AirQualityConfig) -> Self {
        Self::from_client(OpenMeteoAirQualityClient::with_fetcher(fetcher, config))
    }

    const fn from_client(client: OpenMeteoAirQualityClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AirQualityPort for OpenMeteoAirQualityAdapter {
    #[instrument(skip(self), fields(lat = coordinate.latitude(), lon = coordinate.longitude()))]
    async fn current_air_quality(
        &self,
        coordinate: &Coordinate,
    ) -> Result<AirQualityObservation, ApplicationError> {
        let current = self
            .client
            .current(coordinate.latitude(), coordinate.longitude())
            .await
            .map_err(upstream_unavailable)?;

        debug!(
            has_values = current.reading.has_any(),
            time = ?current.time,
            "Retrieved current air quality"
        );

        Ok(AirQualityObservation {
            reading: current.reading,
            observed_at: current.time,
        })
    }
}
