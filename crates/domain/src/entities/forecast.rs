//! Daily forecast series

use serde::{Deserialize, Serialize};

/// Column-oriented daily forecast, as returned to clients
///
/// The four sequences are parallel: index `i` of each refers to the day in
/// `time[i]`. Individual values may be `null` when the upstream has no data
/// for that day.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ForecastSeries {
    /// ISO calendar dates (`YYYY-MM-DD`)
    pub time: Vec<String>,
    /// Daily maximum temperature
    pub temperature_2m_max: Vec<Option<f64>>,
    /// Daily minimum temperature
    pub temperature_2m_min: Vec<Option<f64>>,
    /// Daily precipitation sum
    pub precipitation_sum: Vec<Option<f64>>,
}

impl ForecastSeries {
    /// Number of days covered
    #[must_use]
    pub fn len(&self) -> usize {
        self.time.len()
    }

    /// Whether the series covers no days
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// Whether all four sequences have the same length
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let n = self.time.len();
        self.temperature_2m_max.len() == n
            && self.temperature_2m_min.len() == n
            && self.precipitation_sum.len() == n
    }

    /// Whether the series is consistent and covers exactly `days` days
    #[must_use]
    pub fn covers_days(&self, days: usize) -> bool {
        self.is_consistent() && self.len() == days
    }
}
