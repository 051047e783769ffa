//! Current-weather handler

use axum::{Json, extract::State};
use domain::WeatherSnapshot;
use serde::Serialize;
use tracing::instrument;

use crate::{
    error::ApiError,
    handlers::common::{ApiQuery, LocationQuery},
    state::AppState,
};

/// Response body of `GET /weather`
#[derive(Debug, Serialize)]
pub struct WeatherResponse {
    pub current_weather: WeatherSnapshot,
}

/// `GET /weather?lat=&lon=`
///
/// Responds 502 when the provider is unavailable.
#[instrument(skip(state))]
pub async fn get_weather(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<LocationQuery>,
) -> Result<Json<WeatherResponse>, ApiError> {
    let current_weather = state
        .weather
        .current(query.coordinate())
        .await
        .map_err(|_| ApiError::BadGateway("Weather unavailable".to_string()))?;

    Ok(Json(WeatherResponse { current_weather }))
}
