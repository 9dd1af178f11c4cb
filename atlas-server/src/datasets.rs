//! File-backed store for the precomputed visualization datasets.
//!
//! Everything served here is a static JSON document under the data root:
//! per-name brain-surface blobs, plus two top-level dictionaries for
//! benchmark samples and region details. Blobs are read per request and
//! passed through verbatim; nothing is cached.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

use tokio::fs;

/// Mesh names with a precomputed geometry blob.
pub const MESH_NAMES: [&str; 4] = ["inflated", "pial", "white", "orig"];

/// Annotation names with a precomputed per-vertex label blob.
pub const ANNOTATION_NAMES: [&str; 3] = ["aparc", "brodmann", "shaefer-400-7"];

/// The two families of brain-surface blobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceKind {
    Mesh,
    Annotation,
}

impl SurfaceKind {
    fn dir(self) -> &'static str {
        match self {
            SurfaceKind::Mesh => "mesh",
            SurfaceKind::Annotation => "annotation",
        }
    }

    /// The closed set of valid names for this kind.
    pub fn valid_names(self) -> &'static [&'static str] {
        match self {
            SurfaceKind::Mesh => &MESH_NAMES,
            SurfaceKind::Annotation => &ANNOTATION_NAMES,
        }
    }
}

/// All errors that can occur reading datasets.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("Dataset not found: {0}")]
    NotFound(String),

    #[error("Dataset '{path}' is not valid JSON: {source}")]
    InvalidJson {
        path: String,
        source: serde_json::Error,
    },

    #[error("IO error on '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
}

/// Read-only view over the dataset directory.
///
/// `root` should be the canonical data path from
/// [`crate::config::Config::validate_data_dir`]. Callers validate surface
/// names against the fixed sets before asking for a blob, so every path
/// built here is a known literal layout — no user-controlled path segments
/// beyond the checked names.
pub struct DatasetStore {
    root: PathBuf,
}

impl DatasetStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Returns a reference to the dataset root path.
    pub fn root(&self) -> &Path {
        &self.root
    }

    async fn read_json(&self, rel: &str) -> Result<serde_json::Value, DatasetError> {
        let path = self.root.join(rel);
        let bytes = fs::read(&path).await.map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                DatasetError::NotFound(rel.to_string())
            } else {
                DatasetError::Io {
                    path: rel.to_string(),
                    source: e,
                }
            }
        })?;

        serde_json::from_slice(&bytes).map_err(|e| DatasetError::InvalidJson {
            path: rel.to_string(),
            source: e,
        })
    }

    /// Read the brain-surface blob for a mesh or annotation name.
    ///
    /// `name` must already be a member of the kind's valid-name set.
    pub async fn brain_surface(
        &self,
        kind: SurfaceKind,
        name: &str,
    ) -> Result<serde_json::Value, DatasetError> {
        self.read_json(&format!("brain-surface/{}/{}.json", kind.dir(), name))
            .await
    }

    /// Look up the benchmark sample array for `name`.
    ///
    /// `Ok(None)` means the dictionary loads but has no such key.
    pub async fn benchmark_samples(&self, name: &str) -> Result<Option<Vec<f64>>, DatasetError> {
        let value = self.read_json("benchmark.json").await?;
        let mut table: HashMap<String, Vec<f64>> =
            serde_json::from_value(value).map_err(|e| DatasetError::InvalidJson {
                path: "benchmark.json".to_string(),
                source: e,
            })?;
        Ok(table.remove(name))
    }

    /// Look up the detail object for a region name.
    ///
    /// `Ok(None)` means the dictionary loads but has no such key.
    pub async fn region_detail(
        &self,
        name: &str,
    ) -> Result<Option<serde_json::Value>, DatasetError> {
        let value = self.read_json("region-detail.json").await?;
        let mut table: HashMap<String, serde_json::Value> =
            serde_json::from_value(value).map_err(|e| DatasetError::InvalidJson {
                path: "region-detail.json".to_string(),
                source: e,
            })?;
        Ok(table.remove(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store(dir: &tempfile::TempDir) -> DatasetStore {
        DatasetStore::new(dir.path().to_path_buf())
    }

    fn write(dir: &tempfile::TempDir, rel: &str, content: &str) {
        let full = dir.path().join(rel);
        if let Some(parent) = full.parent() {
            std::fs::create_dir_all(parent).expect("create parent dirs");
        }
        std::fs::write(full, content).expect("write test file");
    }

    #[tokio::test]
    async fn test_brain_surface_blob_roundtrips() {
        let dir = tempfile::tempdir().unwrap();
        write(
            &dir,
            "brain-surface/mesh/pial.json",
            r#"{"vertices": [0.0, 1.0], "indices": [0]}"#,
        );

        let blob = store(&dir)
            .brain_surface(SurfaceKind::Mesh, "pial")
            .await
            .expect("blob should load");
        assert_eq!(blob["indices"], serde_json::json!([0]));
    }

    #[tokio::test]
    async fn test_missing_blob_is_not_found() {
        let dir = tempfile::tempdir().unwrap();

        let err = store(&dir)
            .brain_surface(SurfaceKind::Annotation, "aparc")
            .await
            .unwrap_err();
        assert!(matches!(err, DatasetError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_malformed_blob_is_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        write(&dir, "brain-surface/mesh/white.json", "{not json");

        let err = store(&dir)
            .brain_surface(SurfaceKind::Mesh, "white")
            .await
            .unwrap_err();
        assert!(matches!(err, DatasetError::InvalidJson { .. }));
    }

    #[tokio::test]
    async fn test_benchmark_lookup() {
        let dir = tempfile::tempdir().unwrap();
        write(
            &dir,
            "benchmark.json",
            r#"{"thickness": [1.5, 2.0, 2.5], "curvature": []}"#,
        );

        let s = store(&dir);
        let samples = s.benchmark_samples("thickness").await.unwrap();
        assert_eq!(samples, Some(vec![1.5, 2.0, 2.5]));

        let missing = s.benchmark_samples("volume").await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_region_detail_lookup() {
        let dir = tempfile::tempdir().unwrap();
        write(
            &dir,
            "region-detail.json",
            r#"{"precuneus": {"lobe": "parietal"}}"#,
        );

        let s = store(&dir);
        let detail = s.region_detail("precuneus").await.unwrap();
        assert_eq!(detail, Some(serde_json::json!({"lobe": "parietal"})));

        assert!(s.region_detail("unknown").await.unwrap().is_none());
    }

    #[test]
    fn test_valid_name_sets() {
        assert!(SurfaceKind::Mesh.valid_names().contains(&"inflated"));
        assert!(SurfaceKind::Annotation.valid_names().contains(&"shaefer-400-7"));
        assert!(!SurfaceKind::Mesh.valid_names().contains(&"aparc"));
    }
}
