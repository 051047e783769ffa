//! Weather adapter - Implements WeatherPort using integration_openmeteo

use application::{error::ApplicationError, ports::WeatherPort};
use async_trait::async_trait;
use domain::{Coordinate, ForecastSeries, WeatherSnapshot};
use integration_openmeteo::{OpenMeteoWeatherClient, UpstreamFetcher, WeatherConfig};
use tracing::{debug, instrument};

#[cfg(test)]
use super::shared_fetcher;
use super::upstream_unavailable;

/// Adapter for the Open-Meteo Forecast API
#[derive(Debug, Clone)]
pub struct OpenMeteoWeatherAdapter {
    client: OpenMeteoWeatherClient,
}

impl OpenMeteoWeatherAdapter {
    #[cfg(test)]
    fn with_config(config: WeatherConfig) -> Result<Self, ApplicationError> {
        Ok(Self::with_fetcher(&shared_fetcher()?, config))
    }

    /// Create on a shared connection pool
    #[must_use]
    pub fn with_fetcher(fetcher: &UpstreamFetcher, config: WeatherConfig) -> Self {
        Self::from_client(OpenMeteoWeatherClient::with_fetcher(fetcher, config))
    }

    const fn from_client(client: OpenMeteoWeatherClient) -> Self {
        Self { client }
    }

    /// Default forecast horizon from the client configuration
    #[must_use]
    pub const fn default_forecast_days(&self) -> u16 {
        self.client.default_forecast_days()
    }
}

#[async_trait]
impl WeatherPort for OpenMeteoWeatherAdapter {
    #[instrument(skip(self), fields(lat = coordinate.latitude(), lon = coordinate.longitude()))]
    async fn current_weather(&self, coordinate: &Coordinate) -> Result<WeatherSnapshot, ApplicationError> {
        let snapshot = self
            .client
            .current_weather(coordinate.latitude(), coordinate.longitude())
            .await
            .map_err(upstream_unavailable)?;

        debug!(fields = snapshot.fields().len(), "Retrieved current weather");
        Ok(snapshot)
    }

    #[instrument(skip(self), fields(lat = coordinate.latitude(), lon = coordinate.longitude(), days))]
    async fn daily_forecast(
        &self,
        coordinate: &Coordinate,
        days: u16,
    ) -> Result<ForecastSeries, ApplicationError> {
        let series = self
            .client
            .daily_forecast(coordinate.latitude(), coordinate.longitude(), days)
            .await
            .map_err(upstream_unavailable)?;

        debug!(days = series.len(), "Retrieved daily forecast");
        Ok(series)
    }
}

#[cfg(test)]
mod tests {
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{method, path, query_param},
    };

    use super::*;

    fn adapter(server: &MockServer) -> OpenMeteoWeatherAdapter {
        OpenMeteoWeatherAdapter::with_config(WeatherConfig {
            base_url: server.uri(),
            timeout_secs: 5,
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn exposes_default_horizon() {
        let adapter = OpenMeteoWeatherAdapter::with_config(WeatherConfig {
            forecast_days: 5,
            ..Default::default()
        })
        .unwrap();
        assert_eq!(adapter.default_forecast_days(), 5);
    }

    #[tokio::test]
    async fn current_weather_passthrough() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/forecast"))
            .and(query_param("current_weather", "true"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "current_weather": {"temperature": 18.2, "windspeed": 3.1}
            })))
            .mount(&server)
            .await;

        let snapshot = adapter(&server)
            .current_weather(&Coordinate::new(51.5, -0.12))
            .await
            .unwrap();

        assert_eq!(snapshot.get("temperature"), Some(&serde_json::json!(18.2)));
    }

    #[tokio::test]
    async fn missing_daily_section_is_unavailable() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/forecast"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .mount(&server)
            .await;

        let err = adapter(&server)
            .daily_forecast(&Coordinate::new(51.5, -0.12), 3)
            .await
            .unwrap_err();

        assert!(err.is_upstream_unavailable());
    }
}
