use std::fmt;
use std::io;
use std::path::Path;

use crate::config::ArtifactPaths;

// ---------------------------------------------------------------------------
// Artifact – the three precomputed inputs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Artifact {
    Papers,
    Keywords,
    Visualization,
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Artifact::Papers => "papers CSV",
            Artifact::Keywords => "cluster keywords JSON",
            Artifact::Visualization => "embedding visualization",
        };
        f.write_str(name)
    }
}

// ---------------------------------------------------------------------------
// ArtifactStore – storage seam
// ---------------------------------------------------------------------------

/// Read access to the precomputed artifacts.
///
/// The viewer only ever reads whole files, so the seam is a single
/// byte-returning call. Tests substitute in-memory stores.
pub trait ArtifactStore: Send + Sync {
    fn read(&self, artifact: Artifact) -> io::Result<Vec<u8>>;

    /// Human-readable location of an artifact, for messages.
    fn describe(&self, artifact: Artifact) -> String {
        artifact.to_string()
    }
}

impl<T: ArtifactStore + ?Sized> ArtifactStore for Box<T> {
    fn read(&self, artifact: Artifact) -> io::Result<Vec<u8>> {
        (**self).read(artifact)
    }

    fn describe(&self, artifact: Artifact) -> String {
        (**self).describe(artifact)
    }
}

/// Reads artifacts from their fixed paths on the local filesystem.
#[derive(Debug, Clone)]
pub struct FsStore {
    paths: ArtifactPaths,
}

impl FsStore {
    pub fn new(paths: ArtifactPaths) -> Self {
        Self { paths }
    }

    pub fn path(&self, artifact: Artifact) -> &Path {
        match artifact {
            Artifact::Papers => &self.paths.papers,
            Artifact::Keywords => &self.paths.keywords,
            Artifact::Visualization => &self.paths.visualization,
        }
    }
}

impl ArtifactStore for FsStore {
    fn read(&self, artifact: Artifact) -> io::Result<Vec<u8>> {
        let path = self.path(artifact);
        log::debug!("Reading {artifact} from {}", path.display());
        std::fs::read(path)
    }

    fn describe(&self, artifact: Artifact) -> String {
        self.path(artifact).display().to_string()
    }
}
