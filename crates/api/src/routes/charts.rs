//! Route definitions for charts, mounted at `/charts`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{charts, render};
use crate::state::AppState;

/// ```text
/// GET    /               -> list_charts
/// POST   /               -> create_chart
/// GET    /{id}           -> get_chart
/// PUT    /{id}           -> update_chart
/// DELETE /{id}           -> delete_chart
/// GET    /{id}/options   -> get_chart_options
/// GET    /{id}/stats     -> get_chart_stats
/// POST   /{id}/reset     -> reset_chart
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(charts::list_charts).post(charts::create_chart))
        .route(
            "/{id}",
            get(charts::get_chart)
                .put(charts::update_chart)
                .delete(charts::delete_chart),
        )
        .route("/{id}/options", get(render::get_chart_options))
        .route("/{id}/stats", get(render::get_chart_stats))
        .route("/{id}/reset", post(charts::reset_chart))
}
