//! Harness configuration, read from `testbed.toml`.

pub mod coverage_config;
pub mod fixture_config;
pub mod testbed_config;

pub use coverage_config::CoverageConfig;
pub use fixture_config::FixtureConfig;
pub use testbed_config::TestbedConfig;
