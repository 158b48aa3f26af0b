//! Handlers that derive read-only views of a chart: renderer options,
//! dataset statistics, unsaved previews and sample datasets.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use chartcraft_core::render::chart_options;
use chartcraft_core::samples::{Sample, SampleDataset};
use chartcraft_core::stats::ChartStats;
use chartcraft_core::types::DbId;
use chartcraft_core::validation::{parse_payload, REQUIRED_CREATE_FIELDS};
use chartcraft_db::models::chart::CreateChart;
use serde_json::Value;

use super::charts::find_chart;
use crate::error::AppResult;
use crate::extract::{JsonBody, PathParam};
use crate::state::AppState;

/// GET /api/charts/{id}/options
pub async fn get_chart_options(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
) -> AppResult<impl IntoResponse> {
    let chart = find_chart(&state, id).await?;
    Ok(Json(chart.render_options()))
}

/// GET /api/charts/{id}/stats
pub async fn get_chart_stats(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
) -> AppResult<impl IntoResponse> {
    let chart = find_chart(&state, id).await?;
    Ok(Json(ChartStats::from_points(&chart.config.data)))
}

/// POST /api/preview
///
/// Derive renderer options for an unsaved chart. Accepts the same payload
/// as chart creation; nothing is stored.
pub async fn preview_chart(JsonBody(payload): JsonBody<Value>) -> AppResult<impl IntoResponse> {
    let input: CreateChart = parse_payload(payload, REQUIRED_CREATE_FIELDS)?;
    let config = input.into_config();

    tracing::debug!(chart_type = %config.chart_type, points = config.data.len(), "Chart preview");

    Ok(Json(chart_options(&config)))
}

/// GET /api/samples
pub async fn list_samples() -> Json<Vec<Sample>> {
    Json(SampleDataset::ALL.into_iter().map(SampleDataset::sample).collect())
}
