//! `CoverageAggregator` loads both artifacts and builds the report.

use std::path::PathBuf;

use testbed_core::config::CoverageConfig;
use testbed_core::errors::CoverageResult;

use crate::artifact::{CoverageArtifact, HitMapArtifact};
use crate::filter::FileFilter;
use crate::loader::{load_hitmap, load_summary};
use crate::ranking::{weakest_files, CoverageFileEntry};
use crate::report::{CoverageReport, FrontendCoverage};

/// Single-pass batch report. Never mutates its inputs, never retries.
#[derive(Debug, Clone)]
pub struct CoverageAggregator {
    summary_path: PathBuf,
    hitmap_path: PathBuf,
    filter: FileFilter,
    weakest_limit: usize,
}

impl CoverageAggregator {
    pub fn new(
        summary_path: impl Into<PathBuf>,
        hitmap_path: impl Into<PathBuf>,
        filter: FileFilter,
        weakest_limit: usize,
    ) -> Self {
        Self {
            summary_path: summary_path.into(),
            hitmap_path: hitmap_path.into(),
            filter,
            weakest_limit,
        }
    }

    pub fn from_config(config: &CoverageConfig) -> Self {
        let filter = FileFilter::new(config.effective_include_marker())
            .with_repo_root(config.effective_repo_root());
        Self::new(
            config.effective_summary_path(),
            config.effective_hitmap_path(),
            filter,
            config.effective_weakest_limit(),
        )
    }

    /// Build the report. Missing artifacts drop their section; malformed ones fail.
    ///
    /// Both sides are normalized through [`CoverageArtifact::normalize`]; the
    /// hit map additionally feeds the weakest-files ranking.
    pub fn run(&self) -> CoverageResult<CoverageReport> {
        let backend = load_summary(&self.summary_path)?
            .map(|summary| CoverageArtifact::from(summary).normalize(&self.filter));
        let frontend = load_hitmap(&self.hitmap_path)?
            .map(|hitmap| aggregate_hitmap(hitmap, &self.filter, self.weakest_limit));

        tracing::info!(
            backend = backend.is_some(),
            frontend = frontend.is_some(),
            "coverage report built"
        );
        Ok(CoverageReport { backend, frontend })
    }
}

/// Normalize a hit map and rank its weakest included files.
pub fn aggregate_hitmap(hitmap: HitMapArtifact, filter: &FileFilter, limit: usize) -> FrontendCoverage {
    let entries: Vec<CoverageFileEntry> = hitmap
        .included(filter)
        .map(|(path, hits)| CoverageFileEntry {
            file_path: filter.display_path(path),
            statement_pct: hits.counts().statements.pct(),
        })
        .collect();

    let excluded = hitmap.files.len() - entries.len();
    tracing::debug!(included = entries.len(), excluded, marker = filter.marker(), "hit map filtered");

    let totals = hitmap.totals(filter);
    let files = entries.len();
    let weakest = weakest_files(entries, limit);
    let summary = CoverageArtifact::from(hitmap).normalize(filter);

    FrontendCoverage {
        summary,
        totals,
        files,
        weakest,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::counts::Counts;

    fn hitmap(json: &str) -> HitMapArtifact {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn summary_and_totals_agree_and_skip_excluded_files() {
        let map = hitmap(
            r#"{
                "/repo/frontend/src/a.ts": {"statement-hits": {"0": 1, "1": 0}, "branch-hits": {"0": [1, 1]}},
                "/repo/frontend/src/b.ts": {"statement-hits": {"0": 0}},
                "/repo/frontend/node_modules/x.js": {"statement-hits": {"0": 5, "1": 5, "2": 5}}
            }"#,
        );
        let filter = FileFilter::default().with_repo_root("/repo");
        let frontend = aggregate_hitmap(map.clone(), &filter, 5);

        assert_eq!(frontend.files, 2);
        assert_eq!(frontend.totals.statements, Counts::new(1, 3));
        assert_eq!(frontend.summary, CoverageArtifact::from(map).normalize(&filter));
        assert_eq!(frontend.summary.statements, 33.33);
        assert_eq!(frontend.summary.branches, 100.0);
        assert_eq!(frontend.summary.lines, None);

        let paths: Vec<&str> = frontend.weakest.iter().map(|e| e.file_path.as_str()).collect();
        assert_eq!(paths, ["frontend/src/b.ts", "frontend/src/a.ts"]);
    }
}
