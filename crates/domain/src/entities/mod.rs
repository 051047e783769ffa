//! Domain entities - Response shapes built once per request

mod air_quality;
mod forecast;
mod weather;

pub use air_quality::{AirQualityReading, AirQualityReport, StationReport, utc_timestamp};
pub use forecast::ForecastSeries;
pub use weather::WeatherSnapshot;
