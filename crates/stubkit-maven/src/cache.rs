//! On-disk POM cache mirroring the repository layout.
//!
//! Entries are immutable once written and are never invalidated; deleting
//! the cache directory is the only eviction path.

use std::fs;
use std::path::{Path, PathBuf};

use stubkit_util::errors::StubkitError;

/// Path-addressed POM store at
/// `<root>/<group-path>/<artifact>/<version>/<artifact>-<version>.pom`.
#[derive(Debug, Clone)]
pub struct PomCache {
    root: PathBuf,
}

impl PomCache {
    /// Create a cache rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The root directory of this cache.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path within the cache for a given coordinate's POM.
    pub fn pom_path(&self, group: &str, artifact: &str, version: &str) -> PathBuf {
        self.root
            .join(group.replace('.', "/"))
            .join(artifact)
            .join(version)
            .join(format!("{artifact}-{version}.pom"))
    }

    /// Read the cached POM bytes for a coordinate, if present.
    pub fn get(&self, group: &str, artifact: &str, version: &str) -> Option<Vec<u8>> {
        let path = self.pom_path(group, artifact, version);
        if !path.is_file() {
            return None;
        }
        fs::read(&path).ok()
    }

    /// Store raw POM bytes, creating directories as needed.
    pub fn put(
        &self,
        group: &str,
        artifact: &str,
        version: &str,
        data: &[u8],
    ) -> miette::Result<PathBuf> {
        let path = self.pom_path(group, artifact, version);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(StubkitError::Io)?;
        }
        fs::write(&path, data).map_err(StubkitError::Io)?;
        Ok(path)
    }

    /// Total size of the cache directory in bytes.
    pub fn size(&self) -> u64 {
        stubkit_util::fs::dir_size(&self.root)
    }

    /// Delete the entire cache directory.
    pub fn clean(&self) -> miette::Result<()> {
        if self.root.is_dir() {
            fs::remove_dir_all(&self.root).map_err(StubkitError::Io)?;
        }
        Ok(())
    }
}
