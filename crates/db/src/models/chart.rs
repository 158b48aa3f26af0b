//! Chart request DTOs.
//!
//! Stored records are [`chartcraft_core::chart::ChartRecord`]; these types
//! describe what clients may send when creating or editing one. Field names
//! on the wire are camelCase.

use chartcraft_core::chart::{ChartConfig, DataPoint, DisplayOptions, DEFAULT_COLOR_THEME};
use serde::{Deserialize, Deserializer};
use validator::Validate;

/// DTO for creating a chart. `title`, `chartType` and `data` are required.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateChart {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub title: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub chart_type: String,
    pub x_axis_label: Option<String>,
    pub y_axis_label: Option<String>,
    pub color_theme: Option<String>,
    pub data: Vec<DataPoint>,
    pub options: Option<DisplayOptions>,
}

impl CreateChart {
    pub fn into_config(self) -> ChartConfig {
        ChartConfig {
            title: self.title,
            chart_type: self.chart_type,
            x_axis_label: self.x_axis_label,
            y_axis_label: self.y_axis_label,
            color_theme: self
                .color_theme
                .unwrap_or_else(|| DEFAULT_COLOR_THEME.to_string()),
            data: self.data,
            options: self.options.unwrap_or_default(),
        }
    }
}

/// DTO for partially updating a chart.
///
/// Only supplied fields change. `data` and `options` replace the stored
/// values wholesale; they are never merged element-wise. The axis labels
/// distinguish an absent key (`None`) from an explicit `null`
/// (`Some(None)`), which clears the label.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateChart {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub title: Option<String>,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub chart_type: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub x_axis_label: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub y_axis_label: Option<Option<String>>,
    pub color_theme: Option<String>,
    pub data: Option<Vec<DataPoint>>,
    pub options: Option<DisplayOptions>,
}

impl UpdateChart {
    /// Overwrite the supplied fields of `config`.
    pub fn apply_to(self, config: &mut ChartConfig) {
        if let Some(title) = self.title {
            config.title = title;
        }
        if let Some(chart_type) = self.chart_type {
            config.chart_type = chart_type;
        }
        if let Some(label) = self.x_axis_label {
            config.x_axis_label = label;
        }
        if let Some(label) = self.y_axis_label {
            config.y_axis_label = label;
        }
        if let Some(theme) = self.color_theme {
            config.color_theme = theme;
        }
        if let Some(data) = self.data {
            config.data = data;
        }
        if let Some(options) = self.options {
            config.options = options;
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.chart_type.is_none()
            && self.x_axis_label.is_none()
            && self.y_axis_label.is_none()
            && self.color_theme.is_none()
            && self.data.is_none()
            && self.options.is_none()
    }
}

/// Marks a key as present, keeping an explicit `null` as `Some(None)`.
fn present<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}
