//! Forecast handler

use axum::{Json, extract::State};
use domain::ForecastSeries;
use serde::Serialize;
use tracing::instrument;

use crate::{
    handlers::common::{ApiQuery, ForecastQuery},
    state::AppState,
};

/// Response body of `GET /forecast`
#[derive(Debug, Serialize)]
pub struct ForecastResponse {
    pub daily: ForecastSeries,
}

/// `GET /forecast?lat=&lon=&days=`
///
/// Always 200 once the query parses; the series covers exactly `days` days.
#[instrument(skip(state))]
pub async fn get_forecast(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<ForecastQuery>,
) -> Json<ForecastResponse> {
    let daily = state.forecast.resolve(query.coordinate(), query.days).await;
    Json(ForecastResponse { daily })
}
