//! Fixture file cleanup. Never fails the process.

use std::process::ExitCode;

use testbed_core::{TestbedConfig, WorkerId};
use testbed_fixture::{remove_fixture_files, sweep_orphans, CleanupReport, TestDatabaseHandle};

/// Remove one worker's files.
pub fn run(config: &TestbedConfig, worker_id: Option<WorkerId>) -> ExitCode {
    let worker_id = worker_id.unwrap_or_else(|| config.fixture.resolve_worker_id());
    let handle = TestDatabaseHandle::new(config.fixture.effective_db_dir(), worker_id);
    print_report(&remove_fixture_files(&handle));
    ExitCode::SUCCESS
}

/// Remove every worker's files.
pub fn sweep(config: &TestbedConfig) -> ExitCode {
    let reports = sweep_orphans(&config.fixture.effective_db_dir());
    if reports.is_empty() {
        println!("No test databases to remove.");
    }
    for report in &reports {
        print_report(report);
    }
    ExitCode::SUCCESS
}

pub(crate) fn print_report(report: &CleanupReport) {
    println!(
        "worker {}: removed {} file(s), {} cleanup failure(s)",
        report.worker_id,
        report.removed.len(),
        report.failures.len()
    );
}
