//! Normalized coverage percentages.

use std::fmt;

use serde::Serialize;

/// Percentages in `[0, 100]` for one source tree.
///
/// `lines` is only known for pre-aggregated summaries; hit maps carry no
/// line information.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CoverageSummary {
    pub lines: Option<f64>,
    pub statements: f64,
    pub branches: f64,
    pub functions: f64,
}

impl fmt::Display for CoverageSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(lines) = self.lines {
            write!(f, "lines {lines:.2}% | ")?;
        }
        write!(
            f,
            "statements {:.2}% | branches {:.2}% | functions {:.2}%",
            self.statements, self.branches, self.functions
        )
    }
}
