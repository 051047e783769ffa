//! Air-quality resolver
//!
//! Turns the provider's current pollutant concentrations into the report the
//! `/air-quality` endpoint returns. An unavailable provider never surfaces as
//! an error: callers get an all-null reading with no stations instead.

use std::{fmt, sync::Arc};

use chrono::Utc;
use domain::{AirQualityReport, Coordinate};
use tracing::{instrument, warn};

use crate::ports::AirQualityPort;

/// Resolver for the air-quality endpoint
pub struct AirQualityService {
    port: Arc<dyn AirQualityPort>,
}

impl fmt::Debug for AirQualityService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AirQualityService")
            .field("port", &"<AirQualityPort>")
            .finish()
    }
}

impl AirQualityService {
    /// Create a resolver backed by the given provider
    pub fn new(port: Arc<dyn AirQualityPort>) -> Self {
        Self { port }
    }

    /// Build the air-quality report for a coordinate
    #[instrument(skip_all, fields(coordinate = %coordinate))]
    pub async fn resolve(&self, coordinate: Coordinate) -> AirQualityReport {
        let now = Utc::now();

        match self.port.current_air_quality(&coordinate).await {
            Ok(observation) => AirQualityReport::observed(
                coordinate,
                observation.reading,
                observation.observed_at.as_deref(),
                now,
            ),
            Err(e) => {
                warn!(error = %e, "Air-quality upstream unavailable, serving empty reading");
                AirQualityReport::unavailable(now)
            },
        }
    }
}
