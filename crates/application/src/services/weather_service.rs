//! Current-weather resolver
//!
//! Unlike the air-quality and forecast resolvers this one has no fallback:
//! an unavailable provider is reported to the caller.

use std::{fmt, sync::Arc};

use domain::{Coordinate, WeatherSnapshot};
use tracing::{instrument, warn};

use crate::{error::ApplicationError, ports::WeatherPort};

/// Resolver for the current-weather endpoint
pub struct WeatherService {
    port: Arc<dyn WeatherPort>,
}

impl fmt::Debug for WeatherService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeatherService")
            .field("port", &"<WeatherPort>")
            .finish()
    }
}

impl WeatherService {
    /// Create a resolver backed by the given provider
    pub fn new(port: Arc<dyn WeatherPort>) -> Self {
        Self { port }
    }

    /// Fetch the current-weather snapshot for a coordinate
    #[instrument(skip_all, fields(coordinate = %coordinate))]
    pub async fn current(&self, coordinate: Coordinate) -> Result<WeatherSnapshot, ApplicationError> {
        self.port
            .current_weather(&coordinate)
            .await
            .inspect_err(|e| warn!(error = %e, "Current weather unavailable"))
    }
}
