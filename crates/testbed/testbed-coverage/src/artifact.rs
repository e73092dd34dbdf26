//! The two coverage artifact shapes and their normalization.

use std::collections::BTreeMap;

use rustc_hash::FxHashMap;
use serde::Deserialize;

use crate::counts::{round2, Counts, FileCounts};
use crate::filter::FileFilter;
use crate::summary::CoverageSummary;

// ─── Pre-aggregated summary ────────────────────────────────────────────────

/// `{"total": {"lines": {"pct": ..}, "statements": .., "branches": .., "functions": ..}}`
///
/// Per-file entries next to `total` are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct SummaryArtifact {
    pub total: SummaryTotals,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SummaryTotals {
    pub lines: MetricPct,
    pub statements: MetricPct,
    pub branches: MetricPct,
    pub functions: MetricPct,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MetricPct {
    pub pct: PctValue,
}

/// Summary writers emit `"Unknown"` instead of a number when a metric has
/// no instrumentation points.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PctValue {
    Number(f64),
    Text(String),
}

impl PctValue {
    pub fn as_pct(&self) -> f64 {
        match self {
            Self::Number(n) if n.is_finite() => round2(n.clamp(0.0, 100.0)),
            _ => 0.0,
        }
    }
}

impl SummaryArtifact {
    pub fn normalize(&self) -> CoverageSummary {
        let t = &self.total;
        CoverageSummary {
            lines: Some(t.lines.pct.as_pct()),
            statements: t.statements.pct.as_pct(),
            branches: t.branches.pct.as_pct(),
            functions: t.functions.pct.as_pct(),
        }
    }
}

// ─── Raw per-file hit map ──────────────────────────────────────────────────

/// Absolute file path → hit counts. Sorted by path so ranking ties are stable.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct HitMapArtifact {
    pub files: BTreeMap<String, FileHits>,
}

/// Hit counts for one file.
///
/// Accepts both the long key names and the single-letter keys used by
/// Istanbul's `coverage-final.json`; every other field is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FileHits {
    #[serde(default, rename = "statement-hits", alias = "s")]
    pub statement_hits: FxHashMap<String, u64>,
    /// Each branch maps to one hit count per arm.
    #[serde(default, rename = "branch-hits", alias = "b")]
    pub branch_hits: FxHashMap<String, Vec<u64>>,
    #[serde(default, rename = "function-hits", alias = "f")]
    pub function_hits: FxHashMap<String, u64>,
}

impl FileHits {
    /// Every branch arm is its own unit: a two-armed branch contributes two.
    pub fn counts(&self) -> FileCounts {
        FileCounts {
            statements: Counts::from_hits(self.statement_hits.values().copied()),
            branches: Counts::from_hits(self.branch_hits.values().flatten().copied()),
            functions: Counts::from_hits(self.function_hits.values().copied()),
        }
    }
}

impl HitMapArtifact {
    /// Files the filter includes, in path order.
    pub fn included<'a>(
        &'a self,
        filter: &'a FileFilter,
    ) -> impl Iterator<Item = (&'a str, &'a FileHits)> + 'a {
        self.files
            .iter()
            .filter(move |(path, _)| filter.includes(path))
            .map(|(path, hits)| (path.as_str(), hits))
    }

    /// Summed counts over included files.
    pub fn totals(&self, filter: &FileFilter) -> FileCounts {
        let mut totals = FileCounts::default();
        for (_, hits) in self.included(filter) {
            totals += hits.counts();
        }
        totals
    }

    pub fn normalize(&self, filter: &FileFilter) -> CoverageSummary {
        let totals = self.totals(filter);
        CoverageSummary {
            lines: None,
            statements: totals.statements.pct(),
            branches: totals.branches.pct(),
            functions: totals.functions.pct(),
        }
    }
}

// ─── Either shape ──────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub enum CoverageArtifact {
    Summary(SummaryArtifact),
    HitMap(HitMapArtifact),
}

impl CoverageArtifact {
    /// The filter only applies to hit maps; summaries are already aggregated.
    pub fn normalize(&self, filter: &FileFilter) -> CoverageSummary {
        match self {
            Self::Summary(summary) => summary.normalize(),
            Self::HitMap(hitmap) => hitmap.normalize(filter),
        }
    }
}

impl From<SummaryArtifact> for CoverageArtifact {
    fn from(summary: SummaryArtifact) -> Self {
        Self::Summary(summary)
    }
}

impl From<HitMapArtifact> for CoverageArtifact {
    fn from(hitmap: HitMapArtifact) -> Self {
        Self::HitMap(hitmap)
    }
}
