//! Best-effort removal of worker database files.
//!
//! Nothing here returns an error. Every failure is logged with the
//! `[cleanup-failed]` marker and collected in a [`CleanupReport`], so a
//! broken cleanup can never turn a passing test run into a failing one.

use std::collections::BTreeSet;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;
use testbed_core::constants::MARKER_CLEANUP_FAILED;
use testbed_core::WorkerId;

use crate::handle::TestDatabaseHandle;

/// Which teardown step failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CleanupStep {
    Disconnect,
    RemoveFile,
}

/// One logged and discarded teardown failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CleanupFailure {
    pub step: CleanupStep,
    pub path: PathBuf,
    pub message: String,
}

/// Outcome of tearing down one worker's fixture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CleanupReport {
    pub worker_id: WorkerId,
    /// Files that existed and were deleted.
    pub removed: Vec<PathBuf>,
    /// Files that were already gone. Not an error.
    pub absent: Vec<PathBuf>,
    pub failures: Vec<CleanupFailure>,
}

impl CleanupReport {
    pub fn new(worker_id: WorkerId) -> Self {
        Self {
            worker_id,
            removed: Vec::new(),
            absent: Vec::new(),
            failures: Vec::new(),
        }
    }

    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    /// Log a failure and keep it.
    pub(crate) fn record_failure(&mut self, step: CleanupStep, path: &Path, message: String) {
        tracing::warn!(
            worker_id = %self.worker_id,
            path = %path.display(),
            step = ?step,
            "{MARKER_CLEANUP_FAILED} {message}"
        );
        self.failures.push(CleanupFailure {
            step,
            path: path.to_path_buf(),
            message,
        });
    }

    fn remove(&mut self, path: &Path) {
        match std::fs::remove_file(path) {
            Ok(()) => {
                tracing::debug!(worker_id = %self.worker_id, path = %path.display(), "removed");
                self.removed.push(path.to_path_buf());
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(worker_id = %self.worker_id, path = %path.display(), "absent");
                self.absent.push(path.to_path_buf());
            }
            Err(e) => self.record_failure(CleanupStep::RemoveFile, path, e.to_string()),
        }
    }
}

/// Delete the primary database file and each sidecar independently.
///
/// Idempotent: on a second call every path lands in `absent`.
pub fn remove_fixture_files(handle: &TestDatabaseHandle) -> CleanupReport {
    let mut report = CleanupReport::new(handle.worker_id().clone());
    remove_fixture_files_into(handle, &mut report);
    report
}

pub(crate) fn remove_fixture_files_into(handle: &TestDatabaseHandle, report: &mut CleanupReport) {
    for path in handle.all_paths() {
        report.remove(&path);
    }
}

/// Remove the files of every worker found in `db_dir`.
///
/// Picks up databases and stray sidecars left behind by a killed run. Files
/// that do not look like `test-{worker}.db[-suffix]` are left alone.
pub fn sweep_orphans(db_dir: &Path) -> Vec<CleanupReport> {
    let Some(dir) = db_dir.to_str() else {
        tracing::warn!(path = %db_dir.display(), "{MARKER_CLEANUP_FAILED} fixture directory is not valid UTF-8");
        return Vec::new();
    };
    let pattern = format!("{}/test-*.db*", glob::Pattern::escape(dir));
    let entries = match glob::glob(&pattern) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!(path = %db_dir.display(), error = %e, "{MARKER_CLEANUP_FAILED} bad sweep pattern");
            return Vec::new();
        }
    };

    let mut workers = BTreeSet::new();
    for entry in entries {
        match entry {
            Ok(path) => {
                let id = path
                    .file_name()
                    .and_then(|n| n.to_str())
                    .and_then(TestDatabaseHandle::worker_id_from_file_name);
                if let Some(id) = id {
                    workers.insert(id);
                }
            }
            Err(e) => {
                tracing::warn!(path = %e.path().display(), error = %e, "{MARKER_CLEANUP_FAILED} unreadable entry");
            }
        }
    }

    workers
        .into_iter()
        .map(|id| remove_fixture_files(&TestDatabaseHandle::new(db_dir, id)))
        .collect()
}
