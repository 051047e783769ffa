//! Pollutant identifiers

use serde::{Deserialize, Serialize};
use std::fmt;

/// The pollutants exposed by the aggregated air-quality reading
///
/// Serialized in lowercase (`pm25`, `pm10`, `no2`); this is also the key used
/// in a station's `measurements` map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pollutant {
    /// Fine particulate matter (≤ 2.5 µm)
    Pm25,
    /// Coarse particulate matter (≤ 10 µm)
    Pm10,
    /// Nitrogen dioxide
    No2,
}

impl Pollutant {
    /// Every pollutant, in response order
    pub const ALL: [Self; 3] = [Self::Pm25, Self::Pm10, Self::No2];

    /// Key used in JSON responses
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pm25 => "pm25",
            Self::Pm10 => "pm10",
            Self::No2 => "no2",
        }
    }

    /// Variable name used by the Open-Meteo air-quality API
    #[must_use]
    pub const fn upstream_field(&self) -> &'static str {
        match self {
            Self::Pm25 => "pm2_5",
            Self::Pm10 => "pm10",
            Self::No2 => "nitrogen_dioxide",
        }
    }
}

impl fmt::Display for Pollutant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
