//! Handlers for chart record CRUD.
//!
//! Records are returned without an envelope; the dashboard client reads
//! them as-is.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chartcraft_core::chart::ChartRecord;
use chartcraft_core::error::CoreError;
use chartcraft_core::types::DbId;
use chartcraft_core::validation::{parse_payload, REQUIRED_CREATE_FIELDS};
use chartcraft_db::models::chart::{CreateChart, UpdateChart};
use serde::Serialize;
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::extract::{JsonBody, PathParam};
use crate::state::AppState;

/// Body returned after a successful delete.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// Load a chart or fail with 404.
pub(crate) async fn find_chart(state: &AppState, id: DbId) -> AppResult<ChartRecord> {
    state.store.get(id).await.ok_or_else(|| chart_not_found(id))
}

fn chart_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Chart", id })
}

/// GET /api/charts
pub async fn list_charts(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let charts = state.store.list().await;
    Ok(Json(charts))
}

/// GET /api/charts/{id}
pub async fn get_chart(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
) -> AppResult<impl IntoResponse> {
    let chart = find_chart(&state, id).await?;
    Ok(Json(chart))
}

/// POST /api/charts
///
/// Requires `title`, `chartType` and `data`; `colorTheme` defaults to blue.
pub async fn create_chart(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<Value>,
) -> AppResult<impl IntoResponse> {
    let input: CreateChart = parse_payload(payload, REQUIRED_CREATE_FIELDS)?;
    let chart = state.store.create(input.into_config()).await;

    tracing::info!(
        chart_id = chart.id,
        chart_type = %chart.config.chart_type,
        points = chart.config.data.len(),
        "Chart created",
    );

    Ok((StatusCode::CREATED, Json(chart)))
}

/// PUT /api/charts/{id}
///
/// Partial update: only supplied fields change.
pub async fn update_chart(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
    JsonBody(payload): JsonBody<Value>,
) -> AppResult<impl IntoResponse> {
    let input: UpdateChart = parse_payload(payload, &[])?;
    let chart = state
        .store
        .update(id, input)
        .await
        .ok_or_else(|| chart_not_found(id))?;

    tracing::info!(chart_id = id, "Chart updated");

    Ok(Json(chart))
}

/// DELETE /api/charts/{id}
pub async fn delete_chart(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
) -> AppResult<impl IntoResponse> {
    if !state.store.delete(id).await {
        return Err(chart_not_found(id));
    }

    tracing::info!(chart_id = id, "Chart deleted");

    Ok(Json(MessageResponse {
        message: "Chart deleted successfully",
    }))
}

/// POST /api/charts/{id}/reset
///
/// Restore the default configuration, keeping the chart's data.
pub async fn reset_chart(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
) -> AppResult<impl IntoResponse> {
    let chart = state
        .store
        .reset(id)
        .await
        .ok_or_else(|| chart_not_found(id))?;

    tracing::info!(chart_id = id, "Chart reset to defaults");

    Ok(Json(chart))
}
