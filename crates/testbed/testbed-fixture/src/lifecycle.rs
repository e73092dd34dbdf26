//! `FixtureLifecycle` drives one worker's fixture through its phases.
//!
//! ```text
//! Uninitialized ──setup──▶ Connected ──before_each──▶ Running ─┐
//!                                                      ▲        │ before_each
//!                                                      └────────┘
//! (any) ──teardown──▶ Disconnected ──▶ FilesRemoved
//! ```
//!
//! `&mut self` on every phase keeps truncate-then-run strictly sequential:
//! one writer per fixture, no overlapping tests.

use std::fmt;

use serde::Serialize;
use testbed_core::config::FixtureConfig;
use testbed_core::errors::{FixtureError, FixtureResult};

use crate::backend::{FixtureBackend, SqliteBackend};
use crate::cleanup::{remove_fixture_files_into, CleanupReport, CleanupStep};
use crate::handle::TestDatabaseHandle;
use crate::order::TruncationOrder;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LifecycleState {
    Uninitialized,
    Connected,
    /// At least one test has been reset and run.
    Running,
    Disconnected,
    FilesRemoved,
}

impl LifecycleState {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Uninitialized => "uninitialized",
            Self::Connected => "connected",
            Self::Running => "running",
            Self::Disconnected => "disconnected",
            Self::FilesRemoved => "files_removed",
        }
    }

    fn holds_connection(self) -> bool {
        matches!(self, Self::Connected | Self::Running)
    }
}

impl fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-worker test fixture.
///
/// Setup and truncation errors propagate. Teardown never fails; it returns a
/// [`CleanupReport`] instead. Dropping a fixture that still holds its
/// connection releases it.
pub struct FixtureLifecycle<B: FixtureBackend = SqliteBackend> {
    handle: TestDatabaseHandle,
    order: TruncationOrder,
    backend: B,
    state: LifecycleState,
    tests_run: u64,
}

impl FixtureLifecycle<SqliteBackend> {
    /// SQLite fixture with the Kanban schema and truncation order.
    pub fn sqlite(handle: TestDatabaseHandle) -> Self {
        Self::new(handle, TruncationOrder::kanban(), SqliteBackend::new())
    }

    /// SQLite fixture for the worker named by the environment, laid out as
    /// `[fixture]` configures it.
    pub fn from_config(config: &FixtureConfig) -> Self {
        let handle = TestDatabaseHandle::new(config.effective_db_dir(), config.resolve_worker_id());
        let order = TruncationOrder::new(config.effective_truncation_order());
        Self::new(handle, order, SqliteBackend::new())
    }
}

impl<B: FixtureBackend> FixtureLifecycle<B> {
    pub fn new(handle: TestDatabaseHandle, order: TruncationOrder, backend: B) -> Self {
        Self {
            handle,
            order,
            backend,
            state: LifecycleState::Uninitialized,
            tests_run: 0,
        }
    }

    pub fn handle(&self) -> &TestDatabaseHandle {
        &self.handle
    }

    pub fn order(&self) -> &TruncationOrder {
        &self.order
    }

    pub fn state(&self) -> LifecycleState {
        self.state
    }

    pub fn tests_run(&self) -> u64 {
        self.tests_run
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// Open the worker's database. Fatal on failure: no test may run.
    pub fn setup(&mut self) -> FixtureResult<()> {
        self.expect_state("set up", &[LifecycleState::Uninitialized])?;

        let path = self.handle.primary_path();
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir).map_err(|e| FixtureError::Setup {
                path: path.to_path_buf(),
                message: format!("cannot create {}: {e}", dir.display()),
            })?;
        }

        if let Err(e) = self.backend.connect(path) {
            tracing::error!(worker_id = %self.handle.worker_id(), path = %path.display(), error = %e, "fixture setup failed");
            return Err(e);
        }

        tracing::info!(worker_id = %self.handle.worker_id(), path = %path.display(), "fixture connected");
        self.state = LifecycleState::Connected;
        Ok(())
    }

    /// Clear every table in truncation order.
    ///
    /// Stops at the first failing table and returns its error; the caller
    /// must treat the current test as failed.
    pub fn before_each(&mut self) -> FixtureResult<()> {
        self.expect_state(
            "truncate",
            &[LifecycleState::Connected, LifecycleState::Running],
        )?;

        for table in self.order.iter() {
            if let Err(e) = self.backend.truncate(table) {
                tracing::error!(worker_id = %self.handle.worker_id(), table, error = %e, "truncation failed");
                return Err(e);
            }
        }

        tracing::debug!(worker_id = %self.handle.worker_id(), tables = self.order.len(), "fixture reset");
        self.state = LifecycleState::Running;
        Ok(())
    }

    /// Reset the fixture, then run `test` against the backend.
    pub fn run_test<F, T>(&mut self, test: F) -> FixtureResult<T>
    where
        F: FnOnce(&mut B) -> T,
    {
        self.before_each()?;
        self.tests_run += 1;
        Ok(test(&mut self.backend))
    }

    /// Close the connection and remove the database files.
    ///
    /// File removal is attempted even when closing fails. Calling this again
    /// only repeats the (now empty) file removal.
    pub fn teardown(&mut self) -> CleanupReport {
        let mut report = CleanupReport::new(self.handle.worker_id().clone());

        if self.state.holds_connection() {
            if let Err(e) = self.backend.disconnect() {
                report.record_failure(
                    CleanupStep::Disconnect,
                    self.handle.primary_path(),
                    e.to_string(),
                );
            }
            self.state = LifecycleState::Disconnected;
        }

        remove_fixture_files_into(&self.handle, &mut report);
        self.state = LifecycleState::FilesRemoved;

        tracing::info!(
            worker_id = %self.handle.worker_id(),
            removed = report.removed.len(),
            failures = report.failures.len(),
            tests_run = self.tests_run,
            "fixture torn down"
        );
        report
    }

    fn expect_state(
        &self,
        operation: &'static str,
        allowed: &[LifecycleState],
    ) -> FixtureResult<()> {
        if allowed.contains(&self.state) {
            Ok(())
        } else {
            Err(FixtureError::InvalidPhase {
                operation,
                actual: self.state.as_str(),
            })
        }
    }
}

impl<B: FixtureBackend> Drop for FixtureLifecycle<B> {
    fn drop(&mut self) {
        if self.state.holds_connection() {
            if let Err(e) = self.backend.disconnect() {
                tracing::warn!(worker_id = %self.handle.worker_id(), error = %e, "failed to release fixture connection on drop");
            }
        }
    }
}
