use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Artifact locations
// ---------------------------------------------------------------------------

/// Environment variable that relocates the artifact root directory.
pub const ROOT_ENV_VAR: &str = "CLUSTER_VIEWER_ROOT";

pub const PAPERS_FILE: &str = "output/artifacts/final_clustered_papers_with_graph.csv";
pub const KEYWORDS_FILE: &str = "output/artifacts/cluster_keywords.json";
pub const VISUALIZATION_FILE: &str = "output/plots/umap_combined_clusters.png";

/// Where the three precomputed artifacts live on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    pub papers: PathBuf,
    pub keywords: PathBuf,
    pub visualization: PathBuf,
}

impl Default for ArtifactPaths {
    /// Paths relative to the current working directory.
    fn default() -> Self {
        Self::under(Path::new(""))
    }
}

impl ArtifactPaths {
    /// The fixed artifact layout below `root`.
    pub fn under(root: &Path) -> Self {
        Self {
            papers: root.join(PAPERS_FILE),
            keywords: root.join(KEYWORDS_FILE),
            visualization: root.join(VISUALIZATION_FILE),
        }
    }

    /// Default layout, rooted at `$CLUSTER_VIEWER_ROOT` when it is set.
    pub fn from_env() -> Self {
        match std::env::var_os(ROOT_ENV_VAR) {
            Some(root) if !root.is_empty() => {
                let root = PathBuf::from(root);
                log::info!("Using artifact root {}", root.display());
                Self::under(&root)
            }
            _ => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_paths_are_relative_to_cwd() {
        let paths = ArtifactPaths::default();
        assert_eq!(paths.papers, PathBuf::from(PAPERS_FILE));
        assert_eq!(paths.keywords, PathBuf::from(KEYWORDS_FILE));
        assert_eq!(paths.visualization, PathBuf::from(VISUALIZATION_FILE));
    }

    #[test]
    fn under_joins_every_artifact_onto_root() {
        let paths = ArtifactPaths::under(Path::new("/srv/results"));
        assert_eq!(
            paths.papers,
            PathBuf::from("/srv/results/output/artifacts/final_clustered_papers_with_graph.csv")
        );
        assert!(paths.keywords.starts_with("/srv/results"));
        assert!(paths.visualization.ends_with("umap_combined_clusters.png"));
    }
}
