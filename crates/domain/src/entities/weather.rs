//! Current weather snapshot

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The upstream's current-weather object, passed through untouched
///
/// CleanSky owns no schema for this: temperature, wind speed, weather code
/// and whatever else the provider includes are forwarded as-is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeatherSnapshot(Map<String, Value>);

impl WeatherSnapshot {
    /// Wrap an upstream JSON object
    #[must_use]
    pub const fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Look up a single field
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Borrow the underlying fields
    #[must_use]
    pub const fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Unwrap into the underlying fields
    #[must_use]
    pub fn into_fields(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for WeatherSnapshot {
    fn from(fields: Map<String, Value>) -> Self {
        Self::new(fields)
    }
}
