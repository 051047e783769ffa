//! Air-quality readings and the report returned to clients

use std::collections::BTreeMap;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::{Coordinate, Pollutant};

/// Aggregated pollutant snapshot
///
/// A `None` value means the upstream did not report that pollutant; it is
/// serialized as JSON `null`, never omitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AirQualityReading {
    /// PM2.5 concentration
    pub pm25: Option<f64>,
    /// PM10 concentration
    pub pm10: Option<f64>,
    /// Nitrogen dioxide concentration
    pub no2: Option<f64>,
}

impl AirQualityReading {
    /// Reading with every pollutant unknown
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            pm25: None,
            pm10: None,
            no2: None,
        }
    }

    /// Value for a single pollutant
    #[must_use]
    pub const fn get(&self, pollutant: Pollutant) -> Option<f64> {
        match pollutant {
            Pollutant::Pm25 => self.pm25,
            Pollutant::Pm10 => self.pm10,
            Pollutant::No2 => self.no2,
        }
    }

    /// Set the value for a single pollutant
    pub fn set(&mut self, pollutant: Pollutant, value: Option<f64>) {
        match pollutant {
            Pollutant::Pm25 => self.pm25 = value,
            Pollutant::Pm10 => self.pm10 = value,
            Pollutant::No2 => self.no2 = value,
        }
    }

    /// Whether at least one pollutant has a value
    #[must_use]
    pub const fn has_any(&self) -> bool {
        self.pm25.is_some() || self.pm10.is_some() || self.no2.is_some()
    }

    /// The non-null pollutants keyed by their response name
    #[must_use]
    pub fn measurements(&self) -> BTreeMap<Pollutant, f64> {
        Pollutant::ALL
            .into_iter()
            .filter_map(|p| self.get(p).map(|v| (p, v)))
            .collect()
    }
}

/// A single measuring location in an air-quality response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationReport {
    /// Display name of the station
    pub location: String,
    /// Where the measurements were taken
    pub coordinates: Coordinate,
    /// Only the pollutants that were actually reported
    pub measurements: BTreeMap<Pollutant, f64>,
}

impl StationReport {
    /// Build the station for a reading taken at `coordinate`
    ///
    /// Returns `None` when the reading carries no values at all.
    #[must_use]
    pub fn from_reading(coordinate: Coordinate, reading: &AirQualityReading) -> Option<Self> {
        if !reading.has_any() {
            return None;
        }
        Some(Self {
            location: coordinate.station_label(),
            coordinates: coordinate,
            measurements: reading.measurements(),
        })
    }
}

/// Response body of the air-quality endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirQualityReport {
    /// Aggregated pollutant values
    pub aggregated: AirQualityReading,
    /// Observation time, always with a trailing `Z`
    pub last_updated: String,
    /// Zero or more stations contributing to the reading
    pub locations: Vec<StationReport>,
}

impl AirQualityReport {
    /// Report used when the upstream could not be reached or returned junk
    #[must_use]
    pub fn unavailable(now: DateTime<Utc>) -> Self {
        Self {
            aggregated: AirQualityReading::empty(),
            last_updated: utc_timestamp(None, now),
            locations: Vec::new(),
        }
    }

    /// Report for a reading the upstream actually returned
    #[must_use]
    pub fn observed(
        coordinate: Coordinate,
        reading: AirQualityReading,
        observed_at: Option<&str>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            aggregated: reading,
            last_updated: utc_timestamp(observed_at, now),
            locations: StationReport::from_reading(coordinate, &reading)
                .into_iter()
                .collect(),
        }
    }
}

/// Format an observation time with a UTC marker
///
/// Uses `observed_at` when it is present and non-blank, otherwise `now`.
/// A trailing `Z` is appended unless one is already there.
#[must_use]
pub fn utc_timestamp(observed_at: Option<&str>, now: DateTime<Utc>) -> String {
    match observed_at.map(str::trim).filter(|s| !s.is_empty()) {
        Some(ts) if ts.ends_with('Z') => ts.to_string(),
        Some(ts) => format!("{ts}Z"),
        None => now.to_rfc3339_opts(SecondsFormat::Micros, true),
    }
}
