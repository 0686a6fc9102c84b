use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};

use crate::color::ClusterColors;
use crate::data::cache::{DataError, DatasetCache, LoadResult};
use crate::data::export::export_file;
use crate::data::filter::{cluster_sizes, list_cluster_ids, select_cluster, PaperRow, DEFAULT_LIMIT};
use crate::data::model::{ClusterId, LoadedResults};
use crate::data::store::ArtifactStore;

/// Cache shared by everything that reads the artifacts.
pub type SharedCache = Arc<DatasetCache<Box<dyn ArtifactStore>>>;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    cache: SharedCache,

    /// Outcome of the one-time load; an error halts every data section.
    pub results: LoadResult,

    /// Sorted distinct cluster identifiers (cached).
    pub cluster_ids: Vec<ClusterId>,

    /// Papers per cluster (cached).
    pub cluster_sizes: BTreeMap<ClusterId, usize>,

    pub colors: ClusterColors,

    /// Cluster whose papers are listed.
    pub selected: Option<ClusterId>,

    /// Maximum papers listed for the selected cluster.
    pub row_limit: usize,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    /// Load (or fetch the cached) results and derive the selector contents.
    pub fn new(cache: SharedCache) -> Self {
        let results = cache.load();
        let (cluster_ids, sizes) = match &results {
            Ok(loaded) => {
                if loaded.papers.is_empty() {
                    log::warn!("Papers table has a header but no rows");
                }
                (
                    list_cluster_ids(&loaded.papers),
                    cluster_sizes(&loaded.papers),
                )
            }
            Err(_) => (Vec::new(), BTreeMap::new()),
        };

        Self {
            cache,
            results,
            colors: ClusterColors::new(&cluster_ids),
            selected: cluster_ids.first().cloned(),
            cluster_ids,
            cluster_sizes: sizes,
            row_limit: DEFAULT_LIMIT,
            status_message: None,
        }
    }

    pub fn loaded(&self) -> Option<&LoadedResults> {
        self.results.as_deref().ok()
    }

    /// Change the listed cluster. Identifiers missing from the table are
    /// rejected and leave an empty listing.
    pub fn select_cluster(&mut self, id: ClusterId) -> Result<(), DataError> {
        let known = self.cluster_ids.binary_search(&id).is_ok();
        log::debug!("Selected cluster {id}");
        self.selected = Some(id.clone());
        if known {
            self.status_message = None;
            Ok(())
        } else {
            let err = DataError::InvalidSelection(id);
            log::warn!("{err}");
            self.status_message = Some(format!("Error: {err}"));
            Err(err)
        }
    }

    /// Papers listed for the current selection.
    pub fn selected_rows(&self) -> Vec<PaperRow<'_>> {
        match (self.loaded(), &self.selected) {
            (Some(loaded), Some(id)) => select_cluster(&loaded.papers, id, self.row_limit),
            _ => Vec::new(),
        }
    }

    /// Size of the selected cluster in the full table.
    pub fn selected_size(&self) -> usize {
        self.selected
            .as_ref()
            .and_then(|id| self.cluster_sizes.get(id))
            .copied()
            .unwrap_or(0)
    }

    /// Bytes of the pre-rendered embedding image.
    pub fn visualization(&self) -> Result<Arc<[u8]>, DataError> {
        self.cache.visualization()
    }

    /// Write the full-table CSV export to `path`; returns bytes written.
    pub fn export_to(&self, path: &Path) -> Result<usize> {
        let loaded = self
            .results
            .as_ref()
            .map_err(|e| anyhow::anyhow!("nothing to export: {e}"))?;
        let file = export_file(&loaded.papers)?;
        std::fs::write(path, &file.bytes)
            .with_context(|| format!("writing {}", path.display()))?;
        log::info!(
            "Exported {} papers to {} ({}, {} bytes)",
            loaded.papers.len(),
            path.display(),
            file.mime,
            file.bytes.len()
        );
        Ok(file.bytes.len())
    }
}
