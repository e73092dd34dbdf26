//! Test-fixture errors for the per-worker SQLite database.

use std::path::PathBuf;

use super::error_code::{self, TestbedErrorCode};

/// Errors raised while setting up or resetting a worker's fixture.
///
/// Teardown never produces one of these: cleanup problems are collected in a
/// report instead of being returned.
#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    #[error("Failed to open test database {path}: {message}")]
    Setup { path: PathBuf, message: String },

    #[error("Failed to install fixture schema: {message}")]
    Schema { message: String },

    #[error("Failed to truncate table `{table}`: {message}")]
    Truncation { table: String, message: String },

    #[error("Failed to close test database: {message}")]
    Disconnect { message: String },

    #[error("Fixture is {actual}, cannot {operation}")]
    InvalidPhase {
        operation: &'static str,
        actual: &'static str,
    },

    #[error("No open connection to the test database")]
    NotConnected,

    #[error("Invalid worker id {0:?}: expected ASCII letters, digits, '-' or '_'")]
    InvalidWorkerId(String),
}

impl TestbedErrorCode for FixtureError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Setup { .. } => error_code::FIXTURE_SETUP_FAILED,
            Self::Schema { .. } => error_code::FIXTURE_SCHEMA_FAILED,
            Self::Truncation { .. } => error_code::FIXTURE_TRUNCATION_FAILED,
            Self::Disconnect { .. } => error_code::FIXTURE_DISCONNECT_FAILED,
            Self::InvalidPhase { .. } => error_code::FIXTURE_INVALID_PHASE,
            Self::NotConnected => error_code::FIXTURE_NOT_CONNECTED,
            Self::InvalidWorkerId(_) => error_code::INVALID_WORKER_ID,
        }
    }
}

pub type FixtureResult<T> = Result<T, FixtureError>;
