//! Air-quality handler

use axum::{Json, extract::State};
use domain::AirQualityReport;
use tracing::instrument;

use crate::{
    handlers::common::{ApiQuery, LocationQuery},
    state::AppState,
};

/// `GET /air-quality?lat=&lon=`
///
/// Always 200 once the query parses; an unavailable provider yields an
/// all-null reading with no stations.
#[instrument(skip(state))]
pub async fn get_air_quality(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<LocationQuery>,
) -> Json<AirQualityReport> {
    Json(state.air_quality.resolve(query.coordinate()).await)
}
