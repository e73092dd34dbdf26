//! Coverage report configuration.

use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_HITMAP_PATH, DEFAULT_INCLUDE_MARKER, DEFAULT_SUMMARY_PATH, DEFAULT_WEAKEST_LIMIT,
};

/// `[coverage]` section of `testbed.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CoverageConfig {
    /// Pre-aggregated summary written by the backend test runner.
    pub summary_path: Option<PathBuf>,
    /// Raw per-file hit map written by the frontend test runner.
    pub hitmap_path: Option<PathBuf>,
    /// Hit-map entries are only counted when their path contains this.
    pub include_marker: Option<String>,
    /// Ranked file paths are shown relative to this directory. A relative
    /// value is taken against the working directory.
    pub repo_root: Option<PathBuf>,
    /// Number of entries in the weakest-files listing. Default: 5.
    pub weakest_limit: Option<usize>,
}

impl CoverageConfig {
    pub fn effective_summary_path(&self) -> PathBuf {
        self.summary_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SUMMARY_PATH))
    }

    pub fn effective_hitmap_path(&self) -> PathBuf {
        self.hitmap_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_HITMAP_PATH))
    }

    pub fn effective_include_marker(&self) -> &str {
        self.include_marker.as_deref().unwrap_or(DEFAULT_INCLUDE_MARKER)
    }

    /// Absolute repository root. A relative `repo_root` is taken against the
    /// current directory, which is also the fallback.
    pub fn effective_repo_root(&self) -> PathBuf {
        match std::env::current_dir() {
            Ok(cwd) => self.repo_root_in(&cwd),
            Err(_) => self.repo_root.clone().unwrap_or_else(|| PathBuf::from(".")),
        }
    }

    /// [`effective_repo_root`](Self::effective_repo_root) against an explicit base.
    pub fn repo_root_in(&self, cwd: &Path) -> PathBuf {
        match &self.repo_root {
            Some(root) if root.is_absolute() => root.clone(),
            Some(root) => normalize_lexically(&cwd.join(root)),
            None => cwd.to_path_buf(),
        }
    }

    pub fn effective_weakest_limit(&self) -> usize {
        self.weakest_limit.unwrap_or(DEFAULT_WEAKEST_LIMIT)
    }
}

/// Drop `.` and fold `..` without touching the filesystem.
fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !out.pop() {
                    out.push(component);
                }
            }
            other => out.push(other),
        }
    }
    out
}
