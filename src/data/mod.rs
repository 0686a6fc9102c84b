/// Data layer: core types, storage, loading, caching, and views.
///
/// Architecture:
/// ```text
///  papers .csv   keywords .json   umap .png
///        │              │             │
///        ▼              ▼             ▼
///   ┌────────────────────────────────────┐
///   │  store    ArtifactStore (fs / stub) │
///   └────────────────────────────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse bytes → PaperTable, ClusterKeywords
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  cache    │  at-most-once load, shared Arc<LoadedResults>
///   └──────────┘
///        │
///        ▼
///   ┌──────────────────┐
///   │ filter / export   │  cluster ids, selection, CSV bytes
///   └──────────────────┘
/// ```

pub mod cache;
pub mod export;
pub mod filter;
pub mod loader;
pub mod metrics;
pub mod model;
pub mod store;
