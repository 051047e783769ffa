//! Geographic coordinate value object

use serde::{Deserialize, Serialize};
use std::fmt;

/// A latitude/longitude pair as supplied by the caller
///
/// Values are not range-checked: whatever parses as a float is forwarded to
/// the upstream providers unchanged, and they decide what to do with it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in degrees
    latitude: f64,
    /// Longitude in degrees
    longitude: f64,
}

impl Coordinate {
    /// Create a new coordinate
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Get the latitude
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Get the longitude
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Human-readable station name for readings taken at this coordinate
    ///
    /// Both components are rounded to two decimal places, e.g.
    /// `Location 12.90, 77.60`.
    #[must_use]
    pub fn station_label(&self) -> String {
        format!("Location {:.2}, {:.2}", self.latitude, self.longitude)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}, {:.6}", self.latitude, self.longitude)
    }
}
