//! Chart records and the configuration a user edits in the dashboard.
//!
//! The stored `chart_type` and `color_theme` are free strings: the
//! repository never checks them against [`ChartType`] or the palette table,
//! and the render-option derivation falls back gracefully for names it does
//! not recognise.

use serde::{Deserialize, Serialize};

use crate::render::{chart_options, RenderOptions};
use crate::types::{DbId, Timestamp};

/// Theme applied when a payload omits `colorTheme`.
pub const DEFAULT_COLOR_THEME: &str = "blue";

/// A single `(label, value)` pair. Labels need not be unique.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub label: String,
    pub value: f64,
}

impl DataPoint {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Display flags. Each flag is tri-state: unset, on, or explicitly off.
///
/// Unset flags are omitted when serialized so a chart saved with
/// `options: {}` reads back as `{}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_grid: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_legend: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_data_labels: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_animation: Option<bool>,
}

impl DisplayOptions {
    /// Grid, legend and animation on; data labels off.
    pub fn dashboard_defaults() -> Self {
        Self {
            show_grid: Some(true),
            show_legend: Some(true),
            show_data_labels: Some(false),
            enable_animation: Some(true),
        }
    }
}

/// Everything about a chart except its identity and creation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartConfig {
    pub title: String,
    pub chart_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x_axis_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y_axis_label: Option<String>,
    #[serde(default = "default_color_theme")]
    pub color_theme: String,
    #[serde(default)]
    pub data: Vec<DataPoint>,
    #[serde(default)]
    pub options: DisplayOptions,
}

fn default_color_theme() -> String {
    DEFAULT_COLOR_THEME.to_string()
}

impl ChartConfig {
    /// Restore the dashboard's starting configuration, keeping the dataset.
    pub fn reset_to_default(&mut self) {
        self.title = "New Chart".to_string();
        self.chart_type = ChartType::Bar.as_str().to_string();
        self.x_axis_label = Some("X-Axis".to_string());
        self.y_axis_label = Some("Y-Axis".to_string());
        self.color_theme = DEFAULT_COLOR_THEME.to_string();
        self.options = DisplayOptions::dashboard_defaults();
    }

    /// Parsed chart type, or `None` for names the renderer does not know.
    pub fn kind(&self) -> Option<ChartType> {
        ChartType::from_name(&self.chart_type)
    }
}

/// A stored chart. `id` and `created_at` never change after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartRecord {
    pub id: DbId,
    #[serde(flatten)]
    pub config: ChartConfig,
    pub created_at: Timestamp,
}

impl ChartRecord {
    /// Derive the renderer configuration for this chart.
    pub fn render_options(&self) -> RenderOptions {
        chart_options(&self.config)
    }
}

/// The chart variants the renderer understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    Bar,
    Line,
    Pie,
    Scatter,
    Area,
    Radar,
}

impl ChartType {
    pub const ALL: [ChartType; 6] = [
        ChartType::Bar,
        ChartType::Line,
        ChartType::Pie,
        ChartType::Scatter,
        ChartType::Area,
        ChartType::Radar,
    ];

    /// Case-sensitive lookup of a stored chart type name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == name)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ChartType::Bar => "bar",
            ChartType::Line => "line",
            ChartType::Pie => "pie",
            ChartType::Scatter => "scatter",
            ChartType::Area => "area",
            ChartType::Radar => "radar",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn chart_type_names_round_trip() {
        for kind in ChartType::ALL {
            assert_eq!(ChartType::from_name(kind.as_str()), Some(kind));
        }
    }

    #[test]
    fn chart_type_lookup_is_case_sensitive() {
        assert_eq!(ChartType::from_name("Bar"), None);
        assert_eq!(ChartType::from_name("unknown-xyz"), None);
        assert_eq!(ChartType::from_name(""), None);
    }

    #[test]
    fn empty_options_object_stays_empty() {
        let options: DisplayOptions = serde_json::from_value(json!({})).unwrap();
        assert_eq!(options, DisplayOptions::default());
        assert_eq!(serde_json::to_value(&options).unwrap(), json!({}));
    }

    #[test]
    fn explicit_false_is_kept_distinct_from_unset() {
        let options: DisplayOptions =
            serde_json::from_value(json!({ "showDataLabels": false })).unwrap();
        assert_eq!(options.show_data_labels, Some(false));
        assert_eq!(options.show_legend, None);
    }

    #[test]
    fn config_uses_camel_case_and_defaults_theme() {
        let config: ChartConfig = serde_json::from_value(json!({
            "title": "T",
            "chartType": "line",
            "xAxisLabel": "Month",
            "data": [{ "label": "A", "value": 1 }]
        }))
        .unwrap();

        assert_eq!(config.color_theme, "blue");
        assert_eq!(config.x_axis_label.as_deref(), Some("Month"));
        assert_eq!(config.y_axis_label, None);
        assert_eq!(config.kind(), Some(ChartType::Line));
    }

    #[test]
    fn record_serializes_flat() {
        let record = ChartRecord {
            id: 3,
            config: ChartConfig {
                title: "T".into(),
                chart_type: "pie".into(),
                x_axis_label: None,
                y_axis_label: None,
                color_theme: "green".into(),
                data: vec![DataPoint::new("A", 2.0)],
                options: DisplayOptions::default(),
            },
            created_at: chrono::Utc::now(),
        };

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["id"], 3);
        assert_eq!(value["chartType"], "pie");
        assert_eq!(value["colorTheme"], "green");
        assert!(value["createdAt"].is_string());
        assert!(value.get("config").is_none());
        assert!(value.get("xAxisLabel").is_none());
    }

    #[test]
    fn reset_keeps_data_and_restores_defaults() {
        let mut config = ChartConfig {
            title: "Custom".into(),
            chart_type: "radar".into(),
            x_axis_label: None,
            y_axis_label: None,
            color_theme: "purple".into(),
            data: vec![DataPoint::new("A", 1.0), DataPoint::new("B", 2.0)],
            options: DisplayOptions::default(),
        };

        config.reset_to_default();

        assert_eq!(config.title, "New Chart");
        assert_eq!(config.chart_type, "bar");
        assert_eq!(config.x_axis_label.as_deref(), Some("X-Axis"));
        assert_eq!(config.y_axis_label.as_deref(), Some("Y-Axis"));
        assert_eq!(config.color_theme, "blue");
        assert_eq!(config.options, DisplayOptions::dashboard_defaults());
        assert_eq!(config.data.len(), 2);
    }
}
