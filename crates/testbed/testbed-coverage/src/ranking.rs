//! Weakest-files ranking.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoverageFileEntry {
    /// Relative to the repository root when possible.
    pub file_path: String,
    pub statement_pct: f64,
}

/// The `limit` lowest statement percentages, ascending.
///
/// Stable: files with equal percentages keep their input order.
pub fn weakest_files(mut entries: Vec<CoverageFileEntry>, limit: usize) -> Vec<CoverageFileEntry> {
    entries.sort_by(|a, b| a.statement_pct.total_cmp(&b.statement_pct));
    entries.truncate(limit);
    entries
}
