//! HTTP-level tests for derived chart views: renderer options, stats,
//! previews and sample datasets.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json};
use serde_json::json;

fn preview_payload(chart_type: &str) -> serde_json::Value {
    json!({
        "title": "Preview",
        "chartType": chart_type,
        "data": [{ "label": "A", "value": 10 }, { "label": "B", "value": 20 }]
    })
}

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

#[tokio::test]
async fn seeded_chart_options_are_a_bar_chart() {
    let response = get(common::build_test_app(), "/api/charts/1/options").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["title"]["text"], "Sales Performance Q4 2024");
    assert_eq!(json["xAxis"]["type"], "category");
    assert_eq!(json["xAxis"]["data"][0], "Jan");
    assert_eq!(json["xAxis"]["name"], "Months");
    assert_eq!(json["yAxis"]["name"], "Revenue ($)");
    assert_eq!(json["series"][0]["type"], "bar");
    assert_eq!(json["series"][0]["data"].as_array().unwrap().len(), 12);
    assert_eq!(json["series"][0]["itemStyle"]["color"], "#1976D2");
    assert_eq!(json["series"][0]["label"]["show"], false);
    assert_eq!(json["grid"]["show"], true);
    assert_eq!(json["legend"]["show"], true);
    assert_eq!(json["animation"], true);
}

#[tokio::test]
async fn options_for_missing_chart_return_404() {
    let response = get(common::build_test_app(), "/api/charts/999/options").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Stats
// ---------------------------------------------------------------------------

#[tokio::test]
async fn seeded_chart_stats() {
    let response = get(common::build_test_app(), "/api/charts/1/stats").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["dataPoints"], 12);
    assert_eq!(json["minValue"], 38000.0);
    assert_eq!(json["maxValue"], 67000.0);
    assert_eq!(json["total"], 642000.0);
    assert_eq!(json["average"], 53500.0);
}

#[tokio::test]
async fn stats_for_missing_chart_return_404() {
    let response = get(common::build_test_app(), "/api/charts/5/stats").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Preview
// ---------------------------------------------------------------------------

#[tokio::test]
async fn pie_preview_shows_legend_and_labels_by_default() {
    let response = post_json(common::build_test_app(), "/api/preview", preview_payload("pie")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert!(json.get("xAxis").is_none());
    assert_eq!(json["legend"]["show"], true);
    assert_eq!(json["legend"]["orient"], "vertical");

    let series = &json["series"][0];
    assert_eq!(series["type"], "pie");
    assert_eq!(series["label"]["show"], true);
    assert_eq!(series["data"][0]["name"], "A");
    assert_eq!(series["data"][1]["itemStyle"]["color"], "#42A5F5");
}

#[tokio::test]
async fn scatter_preview_carries_point_labels() {
    let response =
        post_json(common::build_test_app(), "/api/preview", preview_payload("scatter")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let series = &json["series"][0];
    assert_eq!(series["type"], "scatter");
    assert_eq!(series["data"][1]["value"], json!([1, 20.0]));
    assert_eq!(series["data"][1]["name"], "B");
    assert_eq!(series["label"]["show"], false);
    assert_eq!(json["legend"]["show"], false);
}

#[tokio::test]
async fn unknown_type_preview_has_no_series() {
    let response =
        post_json(common::build_test_app(), "/api/preview", preview_payload("unknown-xyz")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["title"]["text"], "Preview");
    assert!(json.get("series").is_none());
    assert!(json.get("xAxis").is_none());
    assert!(json.get("legend").is_none());
}

#[tokio::test]
async fn preview_does_not_store_anything() {
    let store = chartcraft_db::create_store(true);

    let response = post_json(
        common::build_app_with_store(store.clone()),
        "/api/preview",
        preview_payload("line"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(store.count().await, 1);
}

#[tokio::test]
async fn preview_validates_like_create() {
    let response = post_json(common::build_test_app(), "/api/preview", json!({ "title": "x" })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["errors"].as_array().unwrap().len(), 2);
}

// ---------------------------------------------------------------------------
// Samples
// ---------------------------------------------------------------------------

#[tokio::test]
async fn samples_lists_three_datasets() {
    let response = get(common::build_test_app(), "/api/samples").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let keys: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["key"].as_str().unwrap())
        .collect();
    assert_eq!(keys, ["sales", "analytics", "products"]);
    assert_eq!(json[0]["name"], "Sales Performance");
    assert_eq!(json[0]["data"].as_array().unwrap().len(), 6);
}
