//! Response decoding
//!
//! Open-Meteo wraps each payload in a named top-level object (`current`,
//! `current_weather`, `daily`) next to location metadata. Only that object
//! is kept.

use domain::{AirQualityReading, ForecastSeries, Pollutant, WeatherSnapshot};
use serde_json::{Map, Value};

use crate::error::UpstreamError;

/// Current pollutant concentrations from the Air Quality API
#[derive(Debug, Clone, PartialEq)]
pub struct AirQualityCurrent {
    /// Observation time as sent by the provider (GMT, no offset)
    pub time: Option<String>,
    /// Pollutant values; absent or non-numeric fields are `None`
    pub reading: AirQualityReading,
}

impl AirQualityCurrent {
    /// Decode the `current` section of an Air Quality API response
    pub fn from_response(body: Value) -> Result<Self, UpstreamError> {
        let current = take_section(body, "current")?;

        let mut reading = AirQualityReading::empty();
        for pollutant in Pollutant::ALL {
            let value = current.get(pollutant.upstream_field()).and_then(Value::as_f64);
            reading.set(pollutant, value);
        }

        let time = current
            .get("time")
            .and_then(Value::as_str)
            .map(str::to_owned);

        Ok(Self { time, reading })
    }
}

/// Decode the `current_weather` section of a Forecast API response
pub(crate) fn current_weather(body: Value) -> Result<WeatherSnapshot, UpstreamError> {
    take_section(body, "current_weather").map(WeatherSnapshot::new)
}

/// Decode the `daily` section of a Forecast API response
///
/// Every column must hold exactly `days` entries.
pub(crate) fn daily_forecast(body: Value, days: u16) -> Result<ForecastSeries, UpstreamError> {
    let daily = take_section(body, "daily")?;
    let series: ForecastSeries = serde_json::from_value(Value::Object(daily))
        .map_err(|e| UpstreamError::UnexpectedShape(format!("daily: {e}")))?;

    if !series.covers_days(usize::from(days)) {
        return Err(UpstreamError::UnexpectedShape(format!(
            "daily: expected {days} days, got {}",
            series.len()
        )));
    }
    Ok(series)
}

fn take_section(body: Value, name: &'static str) -> Result<Map<String, Value>, UpstreamError> {
    match body {
        Value::Object(mut top) => match top.remove(name) {
            Some(Value::Object(section)) => Ok(section),
            _ => Err(UpstreamError::MissingSection(name)),
        },
        _ => Err(UpstreamError::MissingSection(name)),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn air_quality_current_is_decoded() {
        let body = json!({
            "latitude": 12.9,
            "longitude": 77.6,
            "current": {
                "time": "2026-10-19T08:00",
                "interval": 3600,
                "pm2_5": 12.4,
                "pm10": 20.1,
                "nitrogen_dioxide": 18
            }
        });

        let current = AirQualityCurrent::from_response(body).unwrap();
        assert_eq!(current.time.as_deref(), Some("2026-10-19T08:00"));
        assert_eq!(current.reading.pm25, Some(12.4));
        assert_eq!(current.reading.pm10, Some(20.1));
        assert_eq!(current.reading.no2, Some(18.0));
    }

    #[test]
    fn non_numeric_pollutants_become_none() {
        let body = json!({"current": {"pm2_5": "n/a", "pm10": null}});
        let current = AirQualityCurrent::from_response(body).unwrap();
        assert_eq!(current.reading, AirQualityReading::empty());
        assert!(current.time.is_none());
    }

    #[test]
    fn missing_current_section() {
        let err = AirQualityCurrent::from_response(json!({"latitude": 1.0})).unwrap_err();
        assert!(matches!(err, UpstreamError::MissingSection("current")));

        let err = AirQualityCurrent::from_response(json!({"current": [1, 2]})).unwrap_err();
        assert!(matches!(err, UpstreamError::MissingSection("current")));

        let err = AirQualityCurrent::from_response(json!("oops")).unwrap_err();
        assert!(matches!(err, UpstreamError::MissingSection("current")));
    }

    #[test]
    fn current_weather_is_passed_through() {
        let body = json!({
            "current_weather": {"temperature": 24.1, "windspeed": 7.3, "weathercode": 1}
        });
        let snapshot = current_weather(body).unwrap();
        assert_eq!(snapshot.get("weathercode"), Some(&json!(1)));
        assert_eq!(snapshot.fields().len(), 3);
    }

    #[test]
    fn daily_forecast_is_decoded() {
        let body = json!({
            "daily_units": {"temperature_2m_max": "°C"},
            "daily": {
                "time": ["2026-10-19", "2026-10-20"],
                "temperature_2m_max": [28.1, null],
                "temperature_2m_min": [17.0, 16.2],
                "precipitation_sum": [0.0, 3.4]
            }
        });

        let series = daily_forecast(body, 2).unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series.temperature_2m_max, vec![Some(28.1), None]);
        assert!(series.is_consistent());
    }

    #[test]
    fn daily_forecast_is_normalized() {
        let body = json!({"daily": {
            "time": ["2026-10-19"],
            "temperature_2m_max": [30],
            "temperature_2m_min": [18],
            "precipitation_sum": [0],
            "uv_index_max": [7.5]
        }});

        let series = daily_forecast(body, 1).unwrap();
        let value = serde_json::to_value(&series).unwrap();
        assert_eq!(value["temperature_2m_max"], json!([30.0]));
        assert!(value.get("uv_index_max").is_none());
        assert_eq!(value.as_object().map(Map::len), Some(4));
    }

    #[test]
    fn malformed_daily_section() {
        let body = json!({"daily": {"time": "2026-10-19"}});
        let err = daily_forecast(body, 1).unwrap_err();
        assert!(matches!(err, UpstreamError::UnexpectedShape(_)));
    }

    #[test]
    fn daily_forecast_must_cover_requested_days() {
        let body = || {
            json!({"daily": {
                "time": ["2026-10-19", "2026-10-20"],
                "temperature_2m_max": [28.1, 27.0],
                "temperature_2m_min": [17.0],
                "precipitation_sum": [0.0, 3.4]
            }})
        };

        let err = daily_forecast(body(), 2).unwrap_err();
        assert!(matches!(err, UpstreamError::UnexpectedShape(_)));

        let err = daily_forecast(body(), 5).unwrap_err();
        assert!(matches!(err, UpstreamError::UnexpectedShape(msg) if msg.contains("expected 5 days")));
    }
}
