//! Coverage-artifact errors.

use std::path::PathBuf;

use super::error_code::{self, TestbedErrorCode};

/// Errors that abort a coverage report.
///
/// A missing artifact is not an error; it is reported as "no data".
#[derive(Debug, thiserror::Error)]
pub enum CoverageError {
    #[error("Failed to read coverage artifact {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed coverage artifact {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl TestbedErrorCode for CoverageError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Read { .. } => error_code::COVERAGE_READ_FAILED,
            Self::Parse { .. } => error_code::COVERAGE_PARSE_FAILED,
        }
    }
}

pub type CoverageResult<T> = Result<T, CoverageError>;
