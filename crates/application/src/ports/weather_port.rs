//! Weather provider port
//!
//! Defines the interface for current weather and daily forecast retrieval.

use async_trait::async_trait;
use domain::{Coordinate, ForecastSeries, WeatherSnapshot};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for weather service operations
#[cfg_attr(test, automock)]
#[async_trait]
pub trait WeatherPort: Send + Sync {
    /// Get the provider's current-weather object for a coordinate
    async fn current_weather(
        &self,
        coordinate: &Coordinate,
    ) -> Result<WeatherSnapshot, ApplicationError>;

    /// Get the daily forecast for the next `days` days
    ///
    /// The provider's `daily` section is normalized into a [`ForecastSeries`]:
    /// keys other than the date and the three forecast columns are dropped,
    /// and integer values come back as floats. Callers still check the
    /// length themselves.
    async fn daily_forecast(
        &self,
        coordinate: &Coordinate,
        days: u16,
    ) -> Result<ForecastSeries, ApplicationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn WeatherPort) {}

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn WeatherPort>();
    }
}
