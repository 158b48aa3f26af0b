//! ChartCraft domain core.
//!
//! Chart records and their configuration, the render-option derivation that
//! turns a configuration into an ECharts option tree, colour palettes,
//! dataset statistics, sample datasets and payload validation helpers. No
//! I/O happens in this crate.

pub mod chart;
pub mod error;
pub mod palette;
pub mod render;
pub mod samples;
pub mod stats;
pub mod types;
pub mod validation;
