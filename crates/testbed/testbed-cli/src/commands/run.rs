//! Wrapped test run: forward the test command's status, nothing else.

use std::process::{Command, ExitCode};

use anyhow::Context;
use testbed_core::constants::MARKER_CLEANUP_FAILED;
use testbed_core::TestbedConfig;
use testbed_fixture::sweep_orphans;

use super::coverage;

/// Run `command`, then clean up and report.
///
/// Cleanup and reporting problems are logged; they never change the exit
/// status. Only a command that cannot be started is an error here.
pub fn run(config: &TestbedConfig, command: &[String], json: bool) -> anyhow::Result<ExitCode> {
    let (program, args) = command
        .split_first()
        .context("no test command given")?;

    tracing::info!(program = %program, "running test command");
    let status = Command::new(program)
        .args(args)
        .status()
        .with_context(|| format!("failed to start `{program}`"))?;

    let db_dir = config.fixture.effective_db_dir();
    for report in sweep_orphans(&db_dir) {
        if !report.is_clean() {
            tracing::warn!(worker_id = %report.worker_id, failures = report.failures.len(), "{MARKER_CLEANUP_FAILED} sweep left files behind");
        }
    }

    match coverage::build(config) {
        Ok(report) => {
            if let Err(e) = coverage::print(&report, json) {
                tracing::warn!(error = %e, "failed to print coverage report");
            }
        }
        Err(e) => {
            let message = format!("{e:#}");
            tracing::warn!(error = %message, "coverage report skipped");
        }
    }

    Ok(exit_code_for(status))
}

fn exit_code_for(status: std::process::ExitStatus) -> ExitCode {
    match status.code() {
        Some(0) => ExitCode::SUCCESS,
        // Exit statuses are 0..=255 on every platform we forward from.
        Some(code) => ExitCode::from(u8::try_from(code).unwrap_or(1)),
        // Killed by a signal.
        None => ExitCode::FAILURE,
    }
}
