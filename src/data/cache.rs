use std::sync::{Arc, OnceLock};

use thiserror::Error;

use super::loader::{parse_keywords, parse_papers};
use super::model::{ClusterId, LoadedResults};
use super::store::{Artifact, ArtifactStore};

// ---------------------------------------------------------------------------
// Errors surfaced to the user
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataError {
    /// An input artifact is missing or could not be parsed.
    #[error("{artifact} unavailable ({location}): {reason}")]
    DataUnavailable {
        artifact: Artifact,
        location: String,
        reason: String,
    },

    /// A cluster was requested that the loaded table does not contain.
    #[error("cluster {0} is not present in the loaded papers")]
    InvalidSelection(ClusterId),
}

impl DataError {
    fn unavailable(
        store: &dyn ArtifactStore,
        artifact: Artifact,
        err: impl std::fmt::Display,
    ) -> Self {
        DataError::DataUnavailable {
            artifact,
            location: store.describe(artifact),
            reason: err.to_string(),
        }
    }
}

pub type LoadResult = Result<Arc<LoadedResults>, DataError>;

// ---------------------------------------------------------------------------
// DatasetCache – at-most-once load of the papers and keywords
// ---------------------------------------------------------------------------

/// Memoizes the first load of the papers table and keyword map.
///
/// The first call to [`DatasetCache::load`] reads both artifacts through
/// the store; every later call returns the same outcome, success or
/// failure, without touching storage again. Concurrent first calls block
/// on the single initialisation.
pub struct DatasetCache<S> {
    store: S,
    results: OnceLock<LoadResult>,
    visualization: OnceLock<Result<Arc<[u8]>, DataError>>,
}

impl<S: ArtifactStore> DatasetCache<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            results: OnceLock::new(),
            visualization: OnceLock::new(),
        }
    }

    #[cfg(test)]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Load the papers and keywords, or return the cached outcome.
    pub fn load(&self) -> LoadResult {
        if let Some(cached) = self.results.get() {
            log::debug!("Serving cached results");
            return cached.clone();
        }
        self.results.get_or_init(|| self.read_results()).clone()
    }

    /// Raw bytes of the pre-rendered embedding image, cached like the data
    /// but independently of it.
    pub fn visualization(&self) -> Result<Arc<[u8]>, DataError> {
        self.visualization
            .get_or_init(|| {
                self.store
                    .read(Artifact::Visualization)
                    .map(Arc::<[u8]>::from)
                    .map_err(|e| {
                        let err = DataError::unavailable(&self.store, Artifact::Visualization, e);
                        log::error!("{err}");
                        err
                    })
            })
            .clone()
    }

    /// Whether a load outcome is already cached.
    #[cfg(test)]
    pub fn is_loaded(&self) -> bool {
        self.results.get().is_some()
    }

    /// Forget the cached outcomes. Requires exclusive access, so it can
    /// never race a reader.
    #[cfg(test)]
    pub fn reset(&mut self) {
        self.results.take();
        self.visualization.take();
    }

    fn read_results(&self) -> LoadResult {
        let outcome = self.read_artifacts();
        match &outcome {
            Ok(results) => log::info!(
                "Loaded {} papers and keywords for {} clusters",
                results.papers.len(),
                results.keywords.len()
            ),
            Err(e) => log::error!("Failed to load results: {e}"),
        }
        outcome
    }

    fn read_artifacts(&self) -> LoadResult {
        let store: &dyn ArtifactStore = &self.store;

        let bytes = store
            .read(Artifact::Papers)
            .map_err(|e| DataError::unavailable(store, Artifact::Papers, e))?;
        let papers = parse_papers(&bytes)
            .map_err(|e| DataError::unavailable(store, Artifact::Papers, format!("{e:#}")))?;

        let bytes = store
            .read(Artifact::Keywords)
            .map_err(|e| DataError::unavailable(store, Artifact::Keywords, e))?;
        let keywords = parse_keywords(&bytes)
            .map_err(|e| DataError::unavailable(store, Artifact::Keywords, format!("{e:#}")))?;

        Ok(Arc::new(LoadedResults { papers, keywords }))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::collections::HashMap;
    use std::io;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use super::*;

    /// In-memory store that counts every read.
    #[derive(Default)]
    pub(crate) struct CountingStore {
        files: Mutex<HashMap<Artifact, Vec<u8>>>,
        reads: AtomicUsize,
    }

    impl CountingStore {
        pub(crate) fn with(mut self, artifact: Artifact, contents: &[u8]) -> Self {
            self.files
                .get_mut()
                .unwrap()
                .insert(artifact, contents.to_vec());
            self
        }

        pub(crate) fn reads(&self) -> usize {
            self.reads.load(Ordering::SeqCst)
        }
    }

    impl ArtifactStore for CountingStore {
        fn read(&self, artifact: Artifact) -> io::Result<Vec<u8>> {
            self.reads.fetch_add(1, Ordering::SeqCst);
            self.files
                .lock()
                .unwrap()
                .get(&artifact)
                .cloned()
                .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no such artifact"))
        }
    }

    pub(crate) const PAPERS: &[u8] = b"\
title,year,citationCount,cluster_combined
A,2020,5,1
B,2021,3,2
C,2019,9,1
";
    pub(crate) const KEYWORDS: &[u8] = br#"{"1": ["nlp", "bert"], "2": ["graph", "gcn"]}"#;

    pub(crate) fn complete_store() -> CountingStore {
        CountingStore::default()
            .with(Artifact::Papers, PAPERS)
            .with(Artifact::Keywords, KEYWORDS)
    }

    #[test]
    fn second_load_is_served_from_cache() {
        let cache = DatasetCache::new(complete_store());
        assert!(!cache.is_loaded());

        let first = cache.load().unwrap();
        assert_eq!(cache.store().reads(), 2);

        let second = cache.load().unwrap();
        assert_eq!(cache.store().reads(), 2);
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(*first, *second);
        assert!(cache.is_loaded());
    }

    #[test]
    fn missing_papers_is_data_unavailable() {
        let store = CountingStore::default().with(Artifact::Keywords, KEYWORDS);
        let cache = DatasetCache::new(store);

        match cache.load() {
            Err(DataError::DataUnavailable { artifact, .. }) => {
                assert_eq!(artifact, Artifact::Papers)
            }
            other => panic!("expected DataUnavailable, got {other:?}"),
        }
        // Keywords are never read once the papers fail.
        assert_eq!(cache.store().reads(), 1);
    }

    #[test]
    fn failure_is_cached_until_reset() {
        let store = CountingStore::default().with(Artifact::Papers, PAPERS);
        let mut cache = DatasetCache::new(store);

        let first = cache.load().unwrap_err();
        let second = cache.load().unwrap_err();
        assert_eq!(first, second);
        assert_eq!(cache.store().reads(), 2);

        cache.reset();
        assert!(!cache.is_loaded());
        assert!(cache.load().is_err());
        assert_eq!(cache.store().reads(), 4);
    }

    #[test]
    fn malformed_keywords_are_data_unavailable() {
        let store = CountingStore::default()
            .with(Artifact::Papers, PAPERS)
            .with(Artifact::Keywords, b"{\"1\": [\"nlp\"");
        let cache = DatasetCache::new(store);

        let err = cache.load().unwrap_err();
        assert!(matches!(
            err,
            DataError::DataUnavailable {
                artifact: Artifact::Keywords,
                ..
            }
        ));
        assert!(err.to_string().contains("cluster keywords JSON"));
    }

    #[test]
    fn malformed_papers_carry_the_parse_reason() {
        let store = CountingStore::default()
            .with(Artifact::Papers, b"title,year\nA,2020\n")
            .with(Artifact::Keywords, KEYWORDS);
        let err = DatasetCache::new(store).load().unwrap_err();
        assert!(err.to_string().contains("citationCount"), "{err}");
    }

    #[test]
    fn concurrent_first_loads_read_once() {
        let cache = DatasetCache::new(complete_store());
        std::thread::scope(|s| {
            for _ in 0..8 {
                s.spawn(|| cache.load().unwrap());
            }
        });
        assert_eq!(cache.store().reads(), 2);
    }

    #[test]
    fn visualization_is_cached_independently() {
        let store = complete_store().with(Artifact::Visualization, b"\x89PNG");
        let cache = DatasetCache::new(store);

        assert_eq!(&*cache.visualization().unwrap(), b"\x89PNG");
        assert_eq!(&*cache.visualization().unwrap(), b"\x89PNG");
        assert_eq!(cache.store().reads(), 1);
        assert!(!cache.is_loaded());
    }

    #[test]
    fn missing_visualization_leaves_data_intact() {
        let cache = DatasetCache::new(complete_store());
        assert!(matches!(
            cache.visualization(),
            Err(DataError::DataUnavailable {
                artifact: Artifact::Visualization,
                ..
            })
        ));
        assert!(cache.load().is_ok());
    }
}
