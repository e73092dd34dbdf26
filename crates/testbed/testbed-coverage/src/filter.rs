//! Which hit-map entries count, and how their paths are displayed.

use std::path::{Path, PathBuf};

use testbed_core::constants::DEFAULT_INCLUDE_MARKER;

/// Includes a hit-map entry only when its path contains `marker`.
///
/// Keeps build output, dependencies and test files out of the denominator.
#[derive(Debug, Clone)]
pub struct FileFilter {
    marker: String,
    repo_root: Option<PathBuf>,
}

impl FileFilter {
    pub fn new(marker: impl Into<String>) -> Self {
        Self {
            marker: normalize_separators(&marker.into()),
            repo_root: None,
        }
    }

    /// Display ranked paths relative to `root`.
    pub fn with_repo_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.repo_root = Some(root.into());
        self
    }

    pub fn marker(&self) -> &str {
        &self.marker
    }

    pub fn includes(&self, path: &str) -> bool {
        normalize_separators(path).contains(&self.marker)
    }

    /// `path` relative to the repository root when it lies under it.
    pub fn display_path(&self, path: &str) -> String {
        let relative = self
            .repo_root
            .as_deref()
            .and_then(|root| Path::new(path).strip_prefix(root).ok());
        match relative {
            Some(rel) => normalize_separators(&rel.to_string_lossy()),
            None => normalize_separators(path),
        }
    }
}

impl Default for FileFilter {
    fn default() -> Self {
        Self::new(DEFAULT_INCLUDE_MARKER)
    }
}

fn normalize_separators(path: &str) -> String {
    path.replace('\\', "/")
}
