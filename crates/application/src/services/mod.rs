//! Application services - Use case implementations

mod air_quality_service;
mod forecast_service;
mod weather_service;

pub use air_quality_service::AirQualityService;
pub use forecast_service::{
    DEFAULT_FORECAST_DAYS, FALLBACK_PRECIPITATION, FALLBACK_TEMPERATURE_MAX,
    FALLBACK_TEMPERATURE_MIN, ForecastService, synthesize_forecast,
};
pub use weather_service::WeatherService;
