//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! upstream providers. Adapters in the infrastructure layer implement these ports.

mod air_quality_port;
mod weather_port;

#[cfg(test)]
pub use air_quality_port::MockAirQualityPort;
pub use air_quality_port::{AirQualityObservation, AirQualityPort};
#[cfg(test)]
pub use weather_port::MockWeatherPort;
pub use weather_port::WeatherPort;
