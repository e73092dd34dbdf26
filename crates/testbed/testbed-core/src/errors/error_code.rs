//! Stable error codes, surfaced in logs and JSON output.

/// Implemented by every harness error enum.
pub trait TestbedErrorCode {
    fn error_code(&self) -> &'static str;
}

pub const FIXTURE_SETUP_FAILED: &str = "FIXTURE_SETUP_FAILED";
pub const FIXTURE_SCHEMA_FAILED: &str = "FIXTURE_SCHEMA_FAILED";
pub const FIXTURE_TRUNCATION_FAILED: &str = "FIXTURE_TRUNCATION_FAILED";
pub const FIXTURE_DISCONNECT_FAILED: &str = "FIXTURE_DISCONNECT_FAILED";
pub const FIXTURE_INVALID_PHASE: &str = "FIXTURE_INVALID_PHASE";
pub const FIXTURE_NOT_CONNECTED: &str = "FIXTURE_NOT_CONNECTED";
pub const INVALID_WORKER_ID: &str = "INVALID_WORKER_ID";
pub const COVERAGE_READ_FAILED: &str = "COVERAGE_READ_FAILED";
pub const COVERAGE_PARSE_FAILED: &str = "COVERAGE_PARSE_FAILED";
pub const CONFIG_READ_ERROR: &str = "CONFIG_READ_ERROR";
pub const CONFIG_PARSE_ERROR: &str = "CONFIG_PARSE_ERROR";
pub const CONFIG_INVALID: &str = "CONFIG_INVALID";
