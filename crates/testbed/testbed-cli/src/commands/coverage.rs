//! Coverage report.

use std::process::ExitCode;

use anyhow::Context;
use testbed_core::TestbedConfig;
use testbed_coverage::{CoverageAggregator, CoverageReport};

pub fn run(config: &TestbedConfig, json: bool) -> anyhow::Result<ExitCode> {
    let report = build(config)?;
    print(&report, json)?;
    Ok(ExitCode::SUCCESS)
}

pub(crate) fn build(config: &TestbedConfig) -> anyhow::Result<CoverageReport> {
    CoverageAggregator::from_config(&config.coverage)
        .run()
        .context("coverage report failed")
}

pub(crate) fn print(report: &CoverageReport, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else if report.is_empty() {
        println!("No coverage data available.");
    } else {
        print!("{report}");
    }
    Ok(())
}
