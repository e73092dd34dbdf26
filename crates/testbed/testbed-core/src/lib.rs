//! # testbed-core
//!
//! Foundation crate for the Kanban backend test harness.
//! Defines errors, config, tracing setup, constants, and worker identifiers.
//! The fixture, coverage, and CLI crates all depend on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::TestbedConfig;
pub use errors::error_code::TestbedErrorCode;
pub use errors::{ConfigError, CoverageError, FixtureError};
pub use types::WorkerId;
