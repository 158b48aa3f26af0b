//! Summary statistics over a chart's dataset.

use serde::Serialize;

use crate::chart::DataPoint;

/// Dataset summary shown alongside a chart. All figures are 0 for an
/// empty dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartStats {
    pub data_points: usize,
    pub min_value: f64,
    pub max_value: f64,
    pub average: f64,
    pub total: f64,
}

impl ChartStats {
    pub fn from_points(data: &[DataPoint]) -> Self {
        let total: f64 = data.iter().map(|p| p.value).sum();
        let average = if data.is_empty() {
            0.0
        } else {
            total / data.len() as f64
        };

        Self {
            data_points: data.len(),
            min_value: min_value(data),
            max_value: max_value(data),
            average,
            total,
        }
    }
}

/// Largest value in the dataset, or 0 when empty.
pub fn max_value(data: &[DataPoint]) -> f64 {
    data.iter()
        .map(|p| p.value)
        .reduce(f64::max)
        .unwrap_or(0.0)
}

/// Smallest value in the dataset, or 0 when empty.
pub fn min_value(data: &[DataPoint]) -> f64 {
    data.iter()
        .map(|p| p.value)
        .reduce(f64::min)
        .unwrap_or(0.0)
}
