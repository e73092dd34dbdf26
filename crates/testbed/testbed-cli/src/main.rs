//! Test-harness tooling for the Kanban board.
//!
//! # Usage
//!
//! ```bash
//! testbed <command> [options]
//! ```
//!
//! # Commands
//!
//! - `teardown [--worker-id ID]` - Remove one worker's test database files
//! - `sweep` - Remove every worker's test database files
//! - `coverage [--json]` - Print the combined backend/frontend coverage report
//! - `run -- <cmd>...` - Run the test command, clean up, report, forward its exit status

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use testbed_core::constants::{DEFAULT_CONFIG_FILE, MARKER_CLEANUP_FAILED};
use testbed_core::{
    ConfigError, CoverageError, FixtureError, TestbedConfig, TestbedErrorCode, WorkerId,
};

mod commands;

/// Test-fixture cleanup and coverage reporting.
#[derive(Parser)]
#[command(name = "testbed")]
#[command(about = "Test-fixture cleanup and coverage reporting", long_about = None)]
struct Cli {
    /// Path to the harness config file
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Remove a worker's database and its -journal/-wal/-shm sidecars.
    ///
    /// Best-effort: failures are logged and the exit status is always 0.
    Teardown {
        /// Worker id (default: from the environment, then the configured fallback)
        #[arg(long)]
        worker_id: Option<WorkerId>,
    },

    /// Remove the database files of every worker in the fixture directory.
    Sweep,

    /// Print the coverage report.
    ///
    /// Missing artifacts are skipped; a malformed artifact fails the command.
    Coverage {
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Run a test command, then sweep fixtures and print the coverage report.
    ///
    /// Exits with the test command's status.
    Run {
        /// Emit the coverage report as JSON
        #[arg(long)]
        json: bool,

        /// The test command and its arguments
        #[arg(trailing_var_arg = true, allow_hyphen_values = true, required = true)]
        command: Vec<String>,
    },
}

fn main() -> ExitCode {
    testbed_core::tracing::init();
    let cli = Cli::parse();

    match dispatch(cli) {
        Ok(code) => code,
        Err(e) => {
            if let Some(code) = error_code_of(&e) {
                tracing::error!(code, "command failed");
            }
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn dispatch(cli: Cli) -> anyhow::Result<ExitCode> {
    match cli.command {
        Commands::Teardown { worker_id } => {
            let config = load_for_cleanup(&cli.config);
            Ok(commands::teardown::run(&config, worker_id))
        }
        Commands::Sweep => {
            let config = load_for_cleanup(&cli.config);
            Ok(commands::teardown::sweep(&config))
        }
        Commands::Coverage { json } => {
            let config = TestbedConfig::load(&cli.config)?;
            commands::coverage::run(&config, json)
        }
        Commands::Run { json, command } => {
            let config = TestbedConfig::load(&cli.config)?;
            commands::run::run(&config, &command, json)
        }
    }
}

/// Cleanup never fails the process: a broken config falls back to defaults.
fn load_for_cleanup(path: &Path) -> TestbedConfig {
    TestbedConfig::load(path).unwrap_or_else(|e| {
        tracing::warn!(
            path = %path.display(),
            code = e.error_code(),
            error = %e,
            "{MARKER_CLEANUP_FAILED} unusable config, cleaning up with defaults"
        );
        TestbedConfig::default()
    })
}

/// Stable code of the first harness error in the chain.
fn error_code_of(err: &anyhow::Error) -> Option<&'static str> {
    err.chain().find_map(|cause| {
        if let Some(e) = cause.downcast_ref::<ConfigError>() {
            Some(e.error_code())
        } else if let Some(e) = cause.downcast_ref::<CoverageError>() {
            Some(e.error_code())
        } else {
            cause.downcast_ref::<FixtureError>().map(|e| e.error_code())
        }
    })
}
