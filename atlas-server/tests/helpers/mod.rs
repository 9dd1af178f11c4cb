use std::{path::PathBuf, sync::Arc};

use async_trait::async_trait;
use axum::Router;
use tempfile::TempDir;

use atlas_graph::driver::GraphDriver;
use atlas_graph::records::{NodeRecord, RelationshipRecord};
use atlas_graph::{AtlasGraphError, Result};
use atlas_server::datasets::DatasetStore;
use atlas_server::routes::{router, AppState};

/// Temporary dataset directory with helpers for building integration tests.
pub struct TempData {
    pub dir: TempDir,
    pub path: PathBuf,
}

impl TempData {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("create temp data dir");
        let path = dir.path().to_path_buf();
        Self { dir, path }
    }

    /// Write a file relative to the data root.
    pub fn write(&self, rel: &str, content: &str) -> &Self {
        let full = self.path.join(rel);
        if let Some(parent) = full.parent() {
            std::fs::create_dir_all(parent).expect("create parent dirs");
        }
        std::fs::write(&full, content).expect("write test file");
        self
    }

    /// Build a `DatasetStore` over this temp directory.
    pub fn store(&self) -> Arc<DatasetStore> {
        Arc::new(DatasetStore::new(self.path.clone()))
    }
}

/// Driver serving a canned relationship list, direction-agnostic on the match
/// like the real store.
pub struct FakeDriver {
    pub records: Vec<RelationshipRecord>,
}

#[async_trait]
impl GraphDriver for FakeDriver {
    async fn ping(&self) -> Result<()> {
        Ok(())
    }

    async fn close(&self) -> Result<()> {
        Ok(())
    }

    async fn incident_relationships(&self, name: &str) -> Result<Vec<RelationshipRecord>> {
        Ok(self
            .records
            .iter()
            .filter(|r| r.start.name == name || r.end.name == name)
            .cloned()
            .collect())
    }
}

/// Driver whose store is unreachable.
pub struct DownDriver;

#[async_trait]
impl GraphDriver for DownDriver {
    async fn ping(&self) -> Result<()> {
        Err(AtlasGraphError::Validation("store down".to_string()))
    }

    async fn close(&self) -> Result<()> {
        Ok(())
    }

    async fn incident_relationships(&self, _name: &str) -> Result<Vec<RelationshipRecord>> {
        Err(AtlasGraphError::Validation("store down".to_string()))
    }
}

pub fn node(id: i64, name: &str) -> NodeRecord {
    NodeRecord {
        id,
        name: name.to_string(),
    }
}

pub fn rel(start: NodeRecord, end: NodeRecord, name: &str) -> RelationshipRecord {
    RelationshipRecord {
        start,
        end,
        name: name.to_string(),
    }
}

/// Build the full application router over a fake driver and temp datasets.
pub fn app(driver: Arc<dyn GraphDriver>, data: &TempData) -> Router {
    router(AppState {
        driver,
        datasets: data.store(),
        histogram_bins: 4,
    })
}
