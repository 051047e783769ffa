//! Open-Meteo Air Quality client

use std::time::Duration;

use domain::Pollutant;
use tracing::instrument;

use crate::{
    config::AirQualityConfig,
    error::UpstreamError,
    fetcher::{QueryParams, UpstreamFetcher, endpoint, push_api_key},
    models::AirQualityCurrent,
};

/// Client for `GET {base_url}/air-quality`
#[derive(Debug, Clone)]
pub struct OpenMeteoAirQualityClient {
    fetcher: UpstreamFetcher,
    config: AirQualityConfig,
}

impl OpenMeteoAirQualityClient {
    /// Create a client with its own fetcher
    pub fn new(config: AirQualityConfig) -> Result<Self, UpstreamError> {
        let fetcher = UpstreamFetcher::new()?;
        Ok(Self::with_fetcher(&fetcher, config))
    }

    /// Create a client on an existing connection pool
    ///
    /// The configured `timeout_secs` replaces the fetcher's timeout.
    #[must_use]
    pub fn with_fetcher(fetcher: &UpstreamFetcher, config: AirQualityConfig) -> Self {
        Self {
            fetcher: fetcher.with_timeout(Duration::from_secs(config.timeout_secs)),
            config,
        }
    }

    /// Current PM2.5, PM10 and NO2 concentrations at a point
    ///
    /// Times come back in GMT because no `timezone` parameter is sent.
    #[instrument(skip(self))]
    pub async fn current(&self, latitude: f64, longitude: f64) -> Result<AirQualityCurrent, UpstreamError> {
        let url = endpoint(&self.config.base_url, "air-quality");
        self.fetcher
            .try_fetch(&url, &self.query(latitude, longitude), AirQualityCurrent::from_response)
            .await
    }

    fn query(&self, latitude: f64, longitude: f64) -> QueryParams {
        let current = Pollutant::ALL
            .iter()
            .map(|p| p.upstream_field())
            .collect::<Vec<_>>()
            .join(",");

        let mut params = vec![
            ("latitude", latitude.to_string()),
            ("longitude", longitude.to_string()),
            ("current", current),
        ];
        push_api_key(&mut params, self.config.api_key.as_ref());
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_requests_all_pollutants() {
        let client = OpenMeteoAirQualityClient::new(AirQualityConfig::default()).unwrap();
        let params = client.query(12.9, 77.6);
        assert!(params.contains(&("latitude", "12.9".to_string())));
        assert!(params.contains(&("longitude", "77.6".to_string())));
        assert!(params.contains(&("current", "pm2_5,pm10,nitrogen_dioxide".to_string())));
        assert!(!params.iter().any(|(k, _)| *k == "timezone" || *k == "apikey"));
    }
}
