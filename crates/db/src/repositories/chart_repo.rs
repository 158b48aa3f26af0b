//! Chart repository.
//!
//! [`ChartRepository`] is the storage seam the HTTP layer talks to.
//! [`InMemoryChartRepo`] keeps records in process memory: ids start at 1,
//! increase monotonically and are never reused, even after deletes.
//!
//! "Not found" is a normal result (`None` / `false`), not an error.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chartcraft_core::chart::{ChartConfig, ChartRecord, ChartType, DisplayOptions};
use chartcraft_core::samples::quarterly_sales_points;
use chartcraft_core::types::DbId;
use tokio::sync::RwLock;

use crate::models::chart::UpdateChart;

/// Storage operations for chart records.
#[async_trait]
pub trait ChartRepository: Send + Sync {
    /// All records in ascending id order.
    async fn list(&self) -> Vec<ChartRecord>;

    /// Find a record by id.
    async fn get(&self, id: DbId) -> Option<ChartRecord>;

    /// Store a new record, assigning the next id and stamping `created_at`.
    async fn create(&self, config: ChartConfig) -> ChartRecord;

    /// Apply a partial update. `id` and `created_at` never change.
    ///
    /// Returns `None` if no record has this id.
    async fn update(&self, id: DbId, update: UpdateChart) -> Option<ChartRecord>;

    /// Restore the default configuration, keeping the record's data.
    ///
    /// Returns `None` if no record has this id.
    async fn reset(&self, id: DbId) -> Option<ChartRecord>;

    /// Remove a record. Returns `true` if one was removed.
    async fn delete(&self, id: DbId) -> bool;

    /// Number of live records.
    async fn count(&self) -> usize;
}

/// Map and id counter, guarded together by one lock.
struct StoreState {
    charts: BTreeMap<DbId, ChartRecord>,
    next_id: DbId,
}

/// Memory-resident chart repository.
///
/// Thread-safe via interior `RwLock`; designed to be wrapped in `Arc` and
/// shared across the application.
pub struct InMemoryChartRepo {
    state: RwLock<StoreState>,
}

impl InMemoryChartRepo {
    /// Create a repository holding the sample chart as id 1.
    pub fn new() -> Self {
        let mut state = StoreState {
            charts: BTreeMap::new(),
            next_id: 1,
        };
        insert(&mut state, sample_chart());
        Self {
            state: RwLock::new(state),
        }
    }

    /// Create a repository with no records.
    pub fn empty() -> Self {
        Self {
            state: RwLock::new(StoreState {
                charts: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for InMemoryChartRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChartRepository for InMemoryChartRepo {
    async fn list(&self) -> Vec<ChartRecord> {
        self.state.read().await.charts.values().cloned().collect()
    }

    async fn get(&self, id: DbId) -> Option<ChartRecord> {
        self.state.read().await.charts.get(&id).cloned()
    }

    async fn create(&self, config: ChartConfig) -> ChartRecord {
        let mut state = self.state.write().await;
        let record = insert(&mut state, config);
        tracing::debug!(chart_id = record.id, "Chart stored");
        record
    }

    async fn update(&self, id: DbId, update: UpdateChart) -> Option<ChartRecord> {
        if update.is_empty() {
            return self.get(id).await;
        }

        let mut state = self.state.write().await;
        let record = state.charts.get_mut(&id)?;
        update.apply_to(&mut record.config);
        Some(record.clone())
    }

    async fn reset(&self, id: DbId) -> Option<ChartRecord> {
        let mut state = self.state.write().await;
        let record = state.charts.get_mut(&id)?;
        record.config.reset_to_default();
        Some(record.clone())
    }

    async fn delete(&self, id: DbId) -> bool {
        self.state.write().await.charts.remove(&id).is_some()
    }

    async fn count(&self) -> usize {
        self.state.read().await.charts.len()
    }
}

fn insert(state: &mut StoreState, config: ChartConfig) -> ChartRecord {
    let id = state.next_id;
    state.next_id += 1;

    let record = ChartRecord {
        id,
        config,
        created_at: chrono::Utc::now(),
    };
    state.charts.insert(id, record.clone());
    record
}

/// The chart a fresh store starts with.
fn sample_chart() -> ChartConfig {
    ChartConfig {
        title: "Sales Performance Q4 2024".to_string(),
        chart_type: ChartType::Bar.as_str().to_string(),
        x_axis_label: Some("Months".to_string()),
        y_axis_label: Some("Revenue ($)".to_string()),
        color_theme: "blue".to_string(),
        data: quarterly_sales_points(),
        options: DisplayOptions::dashboard_defaults(),
    }
}
