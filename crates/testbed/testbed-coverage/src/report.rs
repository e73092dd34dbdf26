//! Human-readable and JSON coverage report.

use std::fmt;

use serde::Serialize;

use crate::counts::{Counts, FileCounts};
use crate::ranking::CoverageFileEntry;
use crate::summary::CoverageSummary;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrontendCoverage {
    pub summary: CoverageSummary,
    pub totals: FileCounts,
    /// Number of hit-map files that passed the filter.
    pub files: usize,
    pub weakest: Vec<CoverageFileEntry>,
}

/// One optional section per artifact; a missing artifact leaves its section out.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoverageReport {
    pub backend: Option<CoverageSummary>,
    pub frontend: Option<FrontendCoverage>,
}

impl CoverageReport {
    pub fn is_empty(&self) -> bool {
        self.backend.is_none() && self.frontend.is_none()
    }
}

impl fmt::Display for CoverageReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(backend) = &self.backend {
            writeln!(f, "Backend coverage:  {backend}")?;
        }
        if let Some(frontend) = &self.frontend {
            let FileCounts {
                statements,
                branches,
                functions,
            } = frontend.totals;
            writeln!(
                f,
                "Frontend coverage: statements {} | branches {} | functions {} | files {}",
                with_counts(statements),
                with_counts(branches),
                with_counts(functions),
                frontend.files
            )?;
            if !frontend.weakest.is_empty() {
                writeln!(f, "Weakest frontend files (statements):")?;
                for entry in &frontend.weakest {
                    writeln!(f, "  {:>6.2}%  {}", entry.statement_pct, entry.file_path)?;
                }
            }
        }
        Ok(())
    }
}

fn with_counts(counts: Counts) -> String {
    format!("{:.2}% ({}/{})", counts.pct(), counts.covered, counts.total)
}
