//! Repository layer.

pub mod chart_repo;

pub use chart_repo::{ChartRepository, InMemoryChartRepo};
