//! Chart configuration to ECharts option derivation.
//!
//! [`chart_options`] is a pure function: the same [`ChartConfig`] always
//! yields the same [`RenderOptions`], and every chart type string (including
//! ones the renderer does not know) produces a valid tree. Unknown types get
//! the base blocks only, with no series.
//!
//! Serialized field names and order follow the ECharts option schema, so
//! the JSON form of a [`RenderOptions`] can be handed to `setOption` as is.

use serde::Serialize;

use crate::chart::{ChartConfig, ChartType, DataPoint};
use crate::palette::{hex_to_rgba, ColorTheme};
use crate::stats;

/// Opacity of area fills (area charts and the radar polygon).
pub const AREA_FILL_ALPHA: f64 = 0.3;

/// Radar axes extend this far past the largest value.
pub const RADAR_HEADROOM: f64 = 1.2;

/// Template the renderer expands to `name: value (percent%)` on pie slices.
pub const PIE_LABEL_FORMAT: &str = "{b}: {c} ({d}%)";

/// Template the renderer expands to the point's `name`.
pub const SCATTER_LABEL_FORMAT: &str = "{b}";

// ---------------------------------------------------------------------------
// Option tree
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderOptions {
    pub title: Title,
    pub tooltip: Tooltip,
    pub grid: Grid,
    pub animation: bool,
    pub color: Vec<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_axis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_axis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radar: Option<RadarCoordinate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series: Option<Vec<Series>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend: Option<Legend>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Title {
    pub text: String,
    pub left: &'static str,
    pub text_style: TextStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    pub font_size: u32,
    pub font_weight: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tooltip {
    pub trigger: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Grid {
    pub left: &'static str,
    pub right: &'static str,
    pub bottom: &'static str,
    pub top: &'static str,
    pub show: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisKind {
    Category,
    Value,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Axis {
    #[serde(rename = "type")]
    pub kind: AxisKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub name_location: &'static str,
    pub name_gap: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub show: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orient: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Label {
    pub show: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatter: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemStyle {
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineStyle {
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AreaStyle {
    pub color: String,
}

/// One series; the ECharts `type` discriminator is written first.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Series {
    Bar(BarSeries),
    Line(LineSeries),
    Pie(PieSeries),
    Scatter(ScatterSeries),
    Radar(RadarSeries),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BarSeries {
    pub data: Vec<f64>,
    pub item_style: ItemStyle,
    pub label: Label,
}

/// Line series. Area charts are line series with an `area_style` fill.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineSeries {
    pub data: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub smooth: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area_style: Option<AreaStyle>,
    pub item_style: ItemStyle,
    pub line_style: LineStyle,
    pub label: Label,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PieSeries {
    pub name: String,
    pub radius: &'static str,
    pub data: Vec<PieSlice>,
    pub label: Label,
    pub emphasis: Emphasis,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PieSlice {
    pub value: f64,
    pub name: String,
    pub item_style: ItemStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Emphasis {
    pub item_style: ShadowStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShadowStyle {
    pub shadow_blur: u32,
    pub shadow_offset_x: u32,
    pub shadow_color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScatterSeries {
    pub symbol_size: u32,
    pub data: Vec<ScatterPoint>,
    pub item_style: ItemStyle,
    pub label: Label,
}

/// A scatter point at `[index, value]`, carrying the label of the data
/// point it was built from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub value: (usize, f64),
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarCoordinate {
    pub indicator: Vec<RadarIndicator>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarIndicator {
    pub name: String,
    pub max: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarSeries {
    pub name: String,
    pub data: Vec<RadarValue>,
    pub label: Label,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RadarValue {
    pub value: Vec<f64>,
    pub name: &'static str,
    pub item_style: ItemStyle,
    pub area_style: AreaStyle,
}

// ---------------------------------------------------------------------------
// Derivation
// ---------------------------------------------------------------------------

/// Derive the renderer configuration for a chart.
pub fn chart_options(chart: &ChartConfig) -> RenderOptions {
    let theme = ColorTheme::resolve(Some(chart.color_theme.as_str()));
    let mut options = base_options(chart, theme);

    let Some(kind) = chart.kind() else {
        return options;
    };

    let flags = &chart.options;
    let labels_on = shown_if_set(flags.show_data_labels);
    let legend = Legend {
        show: shown_if_set(flags.show_legend),
        orient: None,
        left: None,
    };

    let series = match kind {
        ChartType::Bar => {
            options.x_axis = Some(category_axis(chart));
            options.y_axis = Some(value_axis(chart.y_axis_label.clone(), 50));
            Series::Bar(BarSeries {
                data: values(&chart.data),
                item_style: ItemStyle {
                    color: theme.primary(),
                },
                label: top_label(labels_on),
            })
        }
        ChartType::Line => {
            options.x_axis = Some(category_axis(chart));
            options.y_axis = Some(value_axis(chart.y_axis_label.clone(), 50));
            Series::Line(line_series(&chart.data, theme, labels_on, Some(true), None))
        }
        ChartType::Area => {
            options.x_axis = Some(category_axis(chart));
            options.y_axis = Some(value_axis(chart.y_axis_label.clone(), 50));
            let fill = AreaStyle {
                color: hex_to_rgba(theme.primary(), AREA_FILL_ALPHA),
            };
            Series::Line(line_series(&chart.data, theme, labels_on, None, Some(fill)))
        }
        ChartType::Pie => {
            options.legend = Some(Legend {
                show: shown_unless_cleared(flags.show_legend),
                orient: Some("vertical"),
                left: Some("left"),
            });
            options.series = Some(vec![Series::Pie(pie_series(chart, theme))]);
            return options;
        }
        ChartType::Scatter => {
            options.x_axis = Some(value_axis(chart.x_axis_label.clone(), 30));
            options.y_axis = Some(value_axis(chart.y_axis_label.clone(), 50));
            Series::Scatter(ScatterSeries {
                symbol_size: 8,
                data: scatter_points(&chart.data),
                item_style: ItemStyle {
                    color: theme.primary(),
                },
                label: Label {
                    show: labels_on,
                    position: None,
                    formatter: Some(SCATTER_LABEL_FORMAT),
                },
            })
        }
        ChartType::Radar => {
            options.radar = Some(radar_coordinate(&chart.data));
            Series::Radar(RadarSeries {
                name: chart.title.clone(),
                data: vec![RadarValue {
                    value: values(&chart.data),
                    name: "Data",
                    item_style: ItemStyle {
                        color: theme.primary(),
                    },
                    area_style: AreaStyle {
                        color: hex_to_rgba(theme.primary(), AREA_FILL_ALPHA),
                    },
                }],
                label: Label {
                    show: labels_on,
                    position: None,
                    formatter: None,
                },
            })
        }
    };

    options.series = Some(vec![series]);
    options.legend = Some(legend);
    options
}

/// Shared axis upper bound for every radar dimension.
///
/// Computed once over the whole dataset; an empty dataset yields 0.
pub fn radar_axis_max(data: &[DataPoint]) -> f64 {
    stats::max_value(data) * RADAR_HEADROOM
}

/// Label of the data point a scatter `index` was built from.
///
/// Valid only against the same, unreordered slice the index was assigned
/// from; out-of-range indices map to an empty label.
pub fn scatter_label(data: &[DataPoint], index: usize) -> &str {
    data.get(index).map_or("", |p| p.label.as_str())
}

fn base_options(chart: &ChartConfig, theme: ColorTheme) -> RenderOptions {
    RenderOptions {
        title: Title {
            text: chart.title.clone(),
            left: "center",
            text_style: TextStyle {
                font_size: 18,
                font_weight: "normal",
            },
        },
        tooltip: Tooltip { trigger: "axis" },
        grid: Grid {
            left: "10%",
            right: "10%",
            bottom: "15%",
            top: "15%",
            show: shown_if_set(chart.options.show_grid),
        },
        animation: shown_if_set(chart.options.enable_animation),
        color: theme.palette().to_vec(),
        x_axis: None,
        y_axis: None,
        radar: None,
        series: None,
        legend: None,
    }
}

/// Default-off flag: only an explicit `true` turns it on.
fn shown_if_set(flag: Option<bool>) -> bool {
    flag.unwrap_or(false)
}

/// Default-on flag: only an explicit `false` turns it off.
fn shown_unless_cleared(flag: Option<bool>) -> bool {
    flag != Some(false)
}

fn values(data: &[DataPoint]) -> Vec<f64> {
    data.iter().map(|p| p.value).collect()
}

fn category_axis(chart: &ChartConfig) -> Axis {
    Axis {
        kind: AxisKind::Category,
        data: Some(chart.data.iter().map(|p| p.label.clone()).collect()),
        name: chart.x_axis_label.clone(),
        name_location: "middle",
        name_gap: 30,
    }
}

fn value_axis(name: Option<String>, name_gap: u32) -> Axis {
    Axis {
        kind: AxisKind::Value,
        data: None,
        name,
        name_location: "middle",
        name_gap,
    }
}

fn top_label(show: bool) -> Label {
    Label {
        show,
        position: Some("top"),
        formatter: None,
    }
}

fn line_series(
    data: &[DataPoint],
    theme: ColorTheme,
    labels_on: bool,
    smooth: Option<bool>,
    area_style: Option<AreaStyle>,
) -> LineSeries {
    LineSeries {
        data: values(data),
        smooth,
        area_style,
        item_style: ItemStyle {
            color: theme.primary(),
        },
        line_style: LineStyle {
            color: theme.primary(),
        },
        label: top_label(labels_on),
    }
}

fn pie_series(chart: &ChartConfig, theme: ColorTheme) -> PieSeries {
    let data = chart
        .data
        .iter()
        .enumerate()
        .map(|(index, point)| PieSlice {
            value: point.value,
            name: point.label.clone(),
            item_style: ItemStyle {
                color: theme.color_at(index),
            },
        })
        .collect();

    PieSeries {
        name: chart.title.clone(),
        radius: "50%",
        data,
        label: Label {
            show: shown_unless_cleared(chart.options.show_data_labels),
            position: None,
            formatter: Some(PIE_LABEL_FORMAT),
        },
        emphasis: Emphasis {
            item_style: ShadowStyle {
                shadow_blur: 10,
                shadow_offset_x: 0,
                shadow_color: "rgba(0, 0, 0, 0.5)",
            },
        },
    }
}

fn scatter_points(data: &[DataPoint]) -> Vec<ScatterPoint> {
    (0..data.len())
        .map(|index| ScatterPoint {
            value: (index, data[index].value),
            name: scatter_label(data, index).to_string(),
        })
        .collect()
}

fn radar_coordinate(data: &[DataPoint]) -> RadarCoordinate {
    let max = radar_axis_max(data);
    RadarCoordinate {
        indicator: data
            .iter()
            .map(|p| RadarIndicator {
                name: p.label.clone(),
                max,
            })
            .collect(),
    }
}
