//! Chart storage: request DTOs and the chart repository.
//!
//! Storage is memory-resident; records live for the lifetime of the process.

use std::sync::Arc;

pub mod models;
pub mod repositories;

use repositories::{ChartRepository, InMemoryChartRepo};

/// Shared handle to the chart repository used by the HTTP layer.
pub type ChartStore = Arc<dyn ChartRepository>;

/// Create the process-wide chart store.
///
/// With `seed_sample` the store starts with the "Sales Performance Q4 2024"
/// chart as id 1; otherwise it starts empty.
pub fn create_store(seed_sample: bool) -> ChartStore {
    if seed_sample {
        Arc::new(InMemoryChartRepo::new())
    } else {
        Arc::new(InMemoryChartRepo::empty())
    }
}
