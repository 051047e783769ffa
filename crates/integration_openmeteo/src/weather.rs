//! Open-Meteo Forecast client

use std::time::Duration;

use domain::{ForecastSeries, WeatherSnapshot};
use tracing::instrument;

use crate::{
    config::WeatherConfig,
    error::UpstreamError,
    fetcher::{QueryParams, UpstreamFetcher, endpoint, push_api_key},
    models,
};

const DAILY_FIELDS: &str = "temperature_2m_max,temperature_2m_min,precipitation_sum";

/// Client for `GET {base_url}/forecast`
#[derive(Debug, Clone)]
pub struct OpenMeteoWeatherClient {
    fetcher: UpstreamFetcher,
    config: WeatherConfig,
}

impl OpenMeteoWeatherClient {
    /// Create a client with its own fetcher
    pub fn new(config: WeatherConfig) -> Result<Self, UpstreamError> {
        let fetcher = UpstreamFetcher::new()?;
        Ok(Self::with_fetcher(&fetcher, config))
    }

    /// Create a client on an existing connection pool
    ///
    /// The configured `timeout_secs` replaces the fetcher's timeout.
    #[must_use]
    pub fn with_fetcher(fetcher: &UpstreamFetcher, config: WeatherConfig) -> Self {
        Self {
            fetcher: fetcher.with_timeout(Duration::from_secs(config.timeout_secs)),
            config,
        }
    }

    /// Configured default forecast horizon
    #[must_use]
    pub const fn default_forecast_days(&self) -> u16 {
        self.config.forecast_days
    }

    /// The provider's `current_weather` object, unmodified
    #[instrument(skip(self))]
    pub async fn current_weather(&self, latitude: f64, longitude: f64) -> Result<WeatherSnapshot, UpstreamError> {
        let mut params = Self::base_query(latitude, longitude);
        params.push(("current_weather", "true".to_string()));
        push_api_key(&mut params, self.config.api_key.as_ref());

        self.fetcher
            .try_fetch(&self.url(), &params, models::current_weather)
            .await
    }

    /// Daily max/min temperature and precipitation for `days` days
    ///
    /// The `daily` section is normalized into a [`ForecastSeries`]: only the
    /// date and the three requested fields are kept, and numbers come back as
    /// floats. A series that does not hold exactly `days` entries in every
    /// column is rejected as [`UpstreamError::UnexpectedShape`].
    #[instrument(skip(self))]
    pub async fn daily_forecast(
        &self,
        latitude: f64,
        longitude: f64,
        days: u16,
    ) -> Result<ForecastSeries, UpstreamError> {
        let mut params = Self::base_query(latitude, longitude);
        params.push(("daily", DAILY_FIELDS.to_string()));
        params.push(("forecast_days", days.to_string()));
        push_api_key(&mut params, self.config.api_key.as_ref());

        self.fetcher
            .try_fetch(&self.url(), &params, |body| models::daily_forecast(body, days))
            .await
    }

    fn url(&self) -> String {
        endpoint(&self.config.base_url, "forecast")
    }

    fn base_query(latitude: f64, longitude: f64) -> QueryParams {
        vec![
            ("latitude", latitude.to_string()),
            ("longitude", longitude.to_string()),
            ("timezone", "auto".to_string()),
        ]
    }
}
