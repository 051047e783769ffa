//! Application state shared across handlers

use std::sync::Arc;

use application::{
    AirQualityService, ForecastService, WeatherService,
    ports::{AirQualityPort, WeatherPort},
};
use infrastructure::ServerConfig;

/// Shared application state
#[derive(Clone, Debug)]
pub struct AppState {
    /// Air-quality resolver
    pub air_quality: Arc<AirQualityService>,
    /// Current-weather resolver
    pub weather: Arc<WeatherService>,
    /// Forecast resolver
    pub forecast: Arc<ForecastService>,
    /// Server configuration (static directory, CORS origins)
    pub server: Arc<ServerConfig>,
}

impl AppState {
    /// Build the resolvers on top of the given providers
    #[must_use]
    pub fn from_ports(
        air_quality: Arc<dyn AirQualityPort>,
        weather: Arc<dyn WeatherPort>,
        forecast_days: u16,
        server: ServerConfig,
    ) -> Self {
        Self {
            air_quality: Arc::new(AirQualityService::new(air_quality)),
            weather: Arc::new(WeatherService::new(Arc::clone(&weather))),
            forecast: Arc::new(ForecastService::with_default_days(weather, forecast_days)),
            server: Arc::new(server),
        }
    }
}
