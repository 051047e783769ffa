//! Air-quality provider port

use async_trait::async_trait;
use domain::{AirQualityReading, Coordinate};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// What the air-quality provider reported for a coordinate
#[derive(Debug, Clone, PartialEq)]
pub struct AirQualityObservation {
    /// Pollutant values; unreported pollutants are `None`
    pub reading: AirQualityReading,
    /// Observation time as sent by the provider, without any zone marker
    pub observed_at: Option<String>,
}

/// Port for current air-quality lookups
#[cfg_attr(test, automock)]
#[async_trait]
pub trait AirQualityPort: Send + Sync {
    /// Fetch the current pollutant concentrations at a coordinate
    ///
    /// Fails with `UpstreamUnavailable` when the provider cannot be reached
    /// or its response has no current section.
    async fn current_air_quality(
        &self,
        coordinate: &Coordinate,
    ) -> Result<AirQualityObservation, ApplicationError>;
}
