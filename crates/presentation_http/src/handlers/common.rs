//! Shared extractors and query types for HTTP handlers

use axum::extract::{FromRequestParts, Query};
use domain::Coordinate;
use serde::Deserialize;

use crate::error::ApiError;

/// `Query` whose rejections become `400` JSON [`ApiError`] bodies
#[derive(Debug, FromRequestParts)]
#[from_request(via(Query), rejection(ApiError))]
pub struct ApiQuery<T>(pub T);

/// `?lat=<float>&lon=<float>`
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct LocationQuery {
    pub lat: f64,
    pub lon: f64,
}

impl LocationQuery {
    #[must_use]
    pub const fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.lat, self.lon)
    }
}

/// `?lat=<float>&lon=<float>&days=<int>`
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ForecastQuery {
    pub lat: f64,
    pub lon: f64,
    /// Falls back to the configured horizon when absent
    #[serde(default)]
    pub days: Option<u16>,
}

impl ForecastQuery {
    #[must_use]
    pub const fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.lat, self.lon)
    }
}
