//! Subcommand implementations.

pub mod coverage;
pub mod run;
pub mod teardown;
