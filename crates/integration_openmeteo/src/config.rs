//! Client configuration

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

/// Air-quality client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AirQualityConfig {
    /// Air Quality API base URL (default: <https://air-quality-api.open-meteo.com/v1>)
    #[serde(default = "default_air_quality_base_url")]
    pub base_url: String,

    /// Request timeout in seconds (default: 10)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Optional commercial API key, sent as `apikey`
    #[serde(default, skip_serializing)]
    pub api_key: Option<SecretString>,
}

/// Weather and forecast client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// Forecast API base URL (default: <https://api.open-meteo.com/v1>)
    #[serde(default = "default_weather_base_url")]
    pub base_url: String,

    /// Request timeout in seconds (default: 10)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Forecast horizon when a request does not specify one (default: 14)
    #[serde(default = "default_forecast_days")]
    pub forecast_days: u16,

    /// Optional commercial API key, sent as `apikey`
    #[serde(default, skip_serializing)]
    pub api_key: Option<SecretString>,
}

fn default_air_quality_base_url() -> String {
    "https://air-quality-api.open-meteo.com/v1".to_string()
}

fn default_weather_base_url() -> String {
    "https://api.open-meteo.com/v1".to_string()
}

const fn default_timeout() -> u64 {
    10
}

const fn default_forecast_days() -> u16 {
    14
}

impl Default for AirQualityConfig {
    fn default() -> Self {
        Self {
            base_url: default_air_quality_base_url(),
            timeout_secs: default_timeout(),
            api_key: None,
        }
    }
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            base_url: default_weather_base_url(),
            timeout_secs: default_timeout(),
            forecast_days: default_forecast_days(),
            api_key: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use secrecy::ExposeSecret;

    use super::*;

    #[test]
    fn defaults() {
        let aq = AirQualityConfig::default();
        assert_eq!(aq.base_url, "https://air-quality-api.open-meteo.com/v1");
        assert_eq!(aq.timeout_secs, 10);
        assert!(aq.api_key.is_none());

        let weather = WeatherConfig::default();
        assert_eq!(weather.base_url, "https://api.open-meteo.com/v1");
        assert_eq!(weather.forecast_days, 14);
    }

    #[test]
    fn empty_object_uses_defaults() {
        let weather: WeatherConfig = serde_json::from_str("{}").expect("should deserialize");
        assert_eq!(weather.timeout_secs, 10);
        assert_eq!(weather.forecast_days, 14);
    }

    #[test]
    fn api_key_is_not_serialized() {
        let config: AirQualityConfig =
            serde_json::from_str(r#"{"api_key": "super-secret"}"#).expect("should deserialize");
        assert_eq!(
            config.api_key.as_ref().map(ExposeSecret::expose_secret),
            Some("super-secret")
        );

        let json = serde_json::to_string(&config).expect("should serialize");
        assert!(!json.contains("super-secret"));
        assert!(!format!("{config:?}").contains("super-secret"));
    }
}
