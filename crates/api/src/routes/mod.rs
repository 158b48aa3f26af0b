pub mod charts;
pub mod health;

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::render;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /charts                   list, create
/// /charts/{id}              get, update, delete
/// /charts/{id}/options      renderer options (GET)
/// /charts/{id}/stats        dataset statistics (GET)
/// /charts/{id}/reset        restore default configuration (POST)
///
/// /preview                  renderer options for an unsaved chart (POST)
/// /samples                  sample datasets (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/charts", charts::router())
        .route("/preview", post(render::preview_chart))
        .route("/samples", get(render::list_samples))
}
