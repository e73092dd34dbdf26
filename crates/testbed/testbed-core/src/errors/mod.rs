//! Error types for every harness subsystem.
//! One `thiserror` enum per subsystem, each mapped to a stable error code.

pub mod config_error;
pub mod coverage_error;
pub mod error_code;
pub mod fixture_error;

pub use config_error::ConfigError;
pub use coverage_error::{CoverageError, CoverageResult};
pub use fixture_error::{FixtureError, FixtureResult};
