//! `TestDatabaseHandle`: the files one worker owns.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use testbed_core::constants::SIDECAR_SUFFIXES;
use testbed_core::WorkerId;

/// Identifies the database file (and its sidecars) of one test worker.
///
/// The primary path is derived from the worker id alone, so two workers can
/// only share a file if they share an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestDatabaseHandle {
    worker_id: WorkerId,
    primary_path: PathBuf,
}

impl TestDatabaseHandle {
    /// `{db_dir}/test-{worker_id}.db`
    pub fn new(db_dir: impl AsRef<Path>, worker_id: WorkerId) -> Self {
        let primary_path = db_dir.as_ref().join(file_name_for(&worker_id));
        Self {
            worker_id,
            primary_path,
        }
    }

    pub fn worker_id(&self) -> &WorkerId {
        &self.worker_id
    }

    pub fn primary_path(&self) -> &Path {
        &self.primary_path
    }

    /// `-journal`, `-wal`, `-shm`, in that order.
    pub fn sidecar_paths(&self) -> [PathBuf; 3] {
        SIDECAR_SUFFIXES.map(|suffix| {
            let mut name: OsString = self.primary_path.as_os_str().to_owned();
            name.push(suffix);
            PathBuf::from(name)
        })
    }

    /// Primary path followed by the sidecars.
    pub fn all_paths(&self) -> Vec<PathBuf> {
        let mut paths = Vec::with_capacity(1 + SIDECAR_SUFFIXES.len());
        paths.push(self.primary_path.clone());
        paths.extend(self.sidecar_paths());
        paths
    }

    /// Recover the worker id from a primary or sidecar file name.
    ///
    /// `test-3.db`, `test-3.db-wal` → `3`. Anything else → `None`.
    pub fn worker_id_from_file_name(name: &str) -> Option<WorkerId> {
        let rest = name.strip_prefix("test-")?;
        let (id, suffix) = rest.split_once(".db")?;
        let known_suffix = suffix.is_empty() || SIDECAR_SUFFIXES.contains(&suffix);
        if !known_suffix {
            return None;
        }
        WorkerId::new(id).ok()
    }
}

fn file_name_for(worker_id: &WorkerId) -> String {
    format!("test-{worker_id}.db")
}
