//! Forecast resolver
//!
//! Returns the provider's daily series when it is usable, and a synthetic
//! series otherwise. Synthetic values are placeholders, not observations: they
//! exist so the frontend always has a well-formed chart to draw.

use std::{fmt, ops::Range, sync::Arc};

use chrono::{NaiveDate, Utc};
use domain::{Coordinate, ForecastSeries};
use rand::Rng;
use tracing::{instrument, warn};

use crate::ports::WeatherPort;

/// Number of days returned when the caller does not ask for a specific count
pub const DEFAULT_FORECAST_DAYS: u16 = 14;

/// Range for synthetic daily maximum temperatures
pub const FALLBACK_TEMPERATURE_MAX: Range<f64> = 20.0..35.0;

/// Range for synthetic daily minimum temperatures
pub const FALLBACK_TEMPERATURE_MIN: Range<f64> = 10.0..20.0;

/// Range for synthetic daily precipitation sums
pub const FALLBACK_PRECIPITATION: Range<f64> = 0.0..5.0;

/// Resolver for the forecast endpoint
pub struct ForecastService {
    port: Arc<dyn WeatherPort>,
    default_days: u16,
}

impl fmt::Debug for ForecastService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ForecastService")
            .field("port", &"<WeatherPort>")
            .field("default_days", &self.default_days)
            .finish()
    }
}

impl ForecastService {
    /// Create a resolver using [`DEFAULT_FORECAST_DAYS`]
    pub fn new(port: Arc<dyn WeatherPort>) -> Self {
        Self::with_default_days(port, DEFAULT_FORECAST_DAYS)
    }

    /// Create a resolver with a custom default horizon
    pub fn with_default_days(port: Arc<dyn WeatherPort>, default_days: u16) -> Self {
        Self { port, default_days }
    }

    /// Horizon used when a request does not specify one
    pub const fn default_days(&self) -> u16 {
        self.default_days
    }

    /// Build the daily forecast for a coordinate
    ///
    /// The result always covers exactly `days` days (or the default horizon).
    /// An upstream series is returned in its normalized form (see
    /// [`WeatherPort::daily_forecast`]), not byte-for-byte.
    #[instrument(skip_all, fields(coordinate = %coordinate, days = ?days))]
    pub async fn resolve(&self, coordinate: Coordinate, days: Option<u16>) -> ForecastSeries {
        let days = days.unwrap_or(self.default_days);

        match self.port.daily_forecast(&coordinate, days).await {
            Ok(series) if series.covers_days(usize::from(days)) => series,
            Ok(series) => {
                warn!(
                    expected = days,
                    received = series.len(),
                    consistent = series.is_consistent(),
                    "Upstream forecast has unexpected shape, serving synthetic forecast"
                );
                Self::fallback(days)
            },
            Err(e) => {
                warn!(error = %e, "Forecast upstream unavailable, serving synthetic forecast");
                Self::fallback(days)
            },
        }
    }

    fn fallback(days: u16) -> ForecastSeries {
        synthesize_forecast(Utc::now().date_naive(), days, &mut rand::rng())
    }
}

/// Generate a placeholder forecast starting at `start`
///
/// Dates are `start, start + 1, ..., start + days - 1` in ISO format. Each
/// numeric value is drawn independently from its fallback range.
pub fn synthesize_forecast<R: Rng + ?Sized>(
    start: NaiveDate,
    days: u16,
    rng: &mut R,
) -> ForecastSeries {
    let time: Vec<String> = start
        .iter_days()
        .take(usize::from(days))
        .map(|day| day.format("%Y-%m-%d").to_string())
        .collect();

    let n = time.len();
    let mut draw = |range: Range<f64>| -> Vec<Option<f64>> {
        (0..n).map(|_| Some(rng.random_range(range.clone()))).collect()
    };

    let temperature_2m_max = draw(FALLBACK_TEMPERATURE_MAX);
    let temperature_2m_min = draw(FALLBACK_TEMPERATURE_MIN);
    let precipitation_sum = draw(FALLBACK_PRECIPITATION);

    ForecastSeries {
        time,
        temperature_2m_max,
        temperature_2m_min,
        precipitation_sum,
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::{error::ApplicationError, ports::MockWeatherPort};

    fn upstream_series(days: usize) -> ForecastSeries {
        let start = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        ForecastSeries {
            time: start
                .iter_days()
                .take(days)
                .map(|d| d.to_string())
                .collect(),
            temperature_2m_max: vec![Some(40.0); days],
            temperature_2m_min: vec![Some(-5.0); days],
            precipitation_sum: vec![None; days],
        }
    }

    fn assert_in_ranges(series: &ForecastSeries) {
        for v in series.temperature_2m_max.iter().flatten() {
            assert!(FALLBACK_TEMPERATURE_MAX.contains(v), "max {v} out of range");
        }
        for v in series.temperature_2m_min.iter().flatten() {
            assert!(FALLBACK_TEMPERATURE_MIN.contains(v), "min {v} out of range");
        }
        for v in series.precipitation_sum.iter().flatten() {
            assert!(FALLBACK_PRECIPITATION.contains(v), "precipitation {v} out of range");
        }
    }

    #[test]
    fn synthetic_dates_are_consecutive() {
        let start = NaiveDate::from_ymd_opt(2026, 12, 30).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        let series = synthesize_forecast(start, 3, &mut rng);
        assert_eq!(series.time, vec!["2026-12-30", "2026-12-31", "2027-01-01"]);
        assert!(series.covers_days(3));
        assert_in_ranges(&series);
    }

    #[test]
    fn synthetic_zero_days_is_empty() {
        let start = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        let series = synthesize_forecast(start, 0, &mut StdRng::seed_from_u64(1));
        assert!(series.is_empty());
        assert!(series.is_consistent());
    }

    #[tokio::test]
    async fn unavailable_upstream_yields_synthetic_series() {
        let mut mock = MockWeatherPort::new();
        mock.expect_daily_forecast()
            .times(1)
            .returning(|_, _| Err(ApplicationError::UpstreamUnavailable("502".into())));

        let service = ForecastService::new(Arc::new(mock));
        let series = service.resolve(Coordinate::new(12.9, 77.6), Some(3)).await;

        let today = Utc::now().date_naive();
        assert_eq!(series.len(), 3);
        assert!(series.is_consistent());
        assert_eq!(series.time[0], today.format("%Y-%m-%d").to_string());
        assert_in_ranges(&series);
    }

    #[tokio::test]
    async fn default_horizon_is_fourteen_days() {
        let mut mock = MockWeatherPort::new();
        mock.expect_daily_forecast()
            .withf(|_, days| *days == DEFAULT_FORECAST_DAYS)
            .returning(|_, _| Err(ApplicationError::UpstreamUnavailable("down".into())));

        let service = ForecastService::new(Arc::new(mock));
        let series = service.resolve(Coordinate::new(0.0, 0.0), None).await;
        assert_eq!(series.len(), 14);
    }

    #[tokio::test]
    async fn custom_default_horizon() {
        let mut mock = MockWeatherPort::new();
        mock.expect_daily_forecast()
            .withf(|_, days| *days == 5)
            .returning(|_, days| Ok(upstream_series(usize::from(days))));

        let service = ForecastService::with_default_days(Arc::new(mock), 5);
        assert_eq!(service.default_days(), 5);
        let series = service.resolve(Coordinate::new(0.0, 0.0), None).await;
        assert_eq!(series, upstream_series(5));
    }

    #[tokio::test]
    async fn upstream_series_is_passed_through() {
        let mut mock = MockWeatherPort::new();
        mock.expect_daily_forecast()
            .returning(|_, days| Ok(upstream_series(usize::from(days))));

        let service = ForecastService::new(Arc::new(mock));
        let series = service.resolve(Coordinate::new(52.52, 13.41), Some(7)).await;

        // Upstream values are outside the synthetic ranges, so this proves
        // nothing was replaced.
        assert_eq!(series, upstream_series(7));
    }

    #[tokio::test]
    async fn short_upstream_series_is_replaced() {
        let mut mock = MockWeatherPort::new();
        mock.expect_daily_forecast()
            .returning(|_, _| Ok(upstream_series(2)));

        let service = ForecastService::new(Arc::new(mock));
        let series = service.resolve(Coordinate::new(52.52, 13.41), Some(4)).await;

        assert_eq!(series.len(), 4);
        assert_in_ranges(&series);
    }

    #[tokio::test]
    async fn ragged_upstream_series_is_replaced() {
        let mut mock = MockWeatherPort::new();
        mock.expect_daily_forecast().returning(|_, days| {
            let mut series = upstream_series(usize::from(days));
            series.temperature_2m_min.pop();
            Ok(series)
        });

        let service = ForecastService::new(Arc::new(mock));
        let series = service.resolve(Coordinate::new(1.0, 1.0), Some(3)).await;

        assert!(series.covers_days(3));
        assert_in_ranges(&series);
    }

    proptest! {
        #[test]
        fn synthetic_series_respects_invariants(days in 0u16..60, seed in any::<u64>()) {
            let start = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
            let series = synthesize_forecast(start, days, &mut StdRng::seed_from_u64(seed));

            prop_assert!(series.covers_days(usize::from(days)));
            for (offset, date) in series.time.iter().enumerate() {
                let expected = start + chrono::Days::new(offset as u64);
                prop_assert_eq!(date, &expected.format("%Y-%m-%d").to_string());
            }
            prop_assert!(series.temperature_2m_max.iter().all(|v| v.is_some_and(|v| FALLBACK_TEMPERATURE_MAX.contains(&v))));
            prop_assert!(series.temperature_2m_min.iter().all(|v| v.is_some_and(|v| FALLBACK_TEMPERATURE_MIN.contains(&v))));
            prop_assert!(series.precipitation_sum.iter().all(|v| v.is_some_and(|v| FALLBACK_PRECIPITATION.contains(&v))));
        }
    }
}
