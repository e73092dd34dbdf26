//! # testbed-coverage
//!
//! Single-pass coverage report over two differently shaped artifacts:
//! - a pre-aggregated summary (`total.{lines,statements,branches,functions}.pct`)
//! - a raw per-file hit map (statement, branch-arm and function hit counts)
//!
//! Both normalize to a [`CoverageSummary`]. Hit-map totals are summed
//! covered/total counts across files, never an average of per-file percentages.

pub mod aggregator;
pub mod artifact;
pub mod counts;
pub mod filter;
pub mod loader;
pub mod ranking;
pub mod report;
pub mod summary;

pub use aggregator::{aggregate_hitmap, CoverageAggregator};
pub use artifact::{CoverageArtifact, FileHits, HitMapArtifact, SummaryArtifact};
pub use counts::{round2, Counts, FileCounts};
pub use filter::FileFilter;
pub use ranking::{weakest_files, CoverageFileEntry};
pub use report::{CoverageReport, FrontendCoverage};
pub use summary::CoverageSummary;
