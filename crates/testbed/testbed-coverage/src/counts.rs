//! Covered/total accounting.

use std::ops::{Add, AddAssign};

use serde::Serialize;

/// Round a percentage to two decimals: scale by 100, round, divide.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Covered and total instrumentation points for one metric.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Counts {
    pub covered: u64,
    pub total: u64,
}

impl Counts {
    pub fn new(covered: u64, total: u64) -> Self {
        Self { covered, total }
    }

    /// One unit per hit count; covered when the count is non-zero.
    pub fn from_hits<I>(hits: I) -> Self
    where
        I: IntoIterator<Item = u64>,
    {
        hits.into_iter().fold(Self::default(), |acc, hits| Self {
            covered: acc.covered + u64::from(hits > 0),
            total: acc.total + 1,
        })
    }

    /// `covered / total * 100` rounded to two decimals; 0 when there is nothing to cover.
    pub fn pct(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        (self.covered as f64 / self.total as f64 * 10_000.0).round() / 100.0
    }
}

impl Add for Counts {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            covered: self.covered + rhs.covered,
            total: self.total + rhs.total,
        }
    }
}

impl AddAssign for Counts {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

/// Per-metric counts for one file, or summed across files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FileCounts {
    pub statements: Counts,
    pub branches: Counts,
    pub functions: Counts,
}

impl AddAssign for FileCounts {
    fn add_assign(&mut self, rhs: Self) {
        self.statements += rhs.statements;
        self.branches += rhs.branches;
        self.functions += rhs.functions;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pct_of_empty_is_zero() {
        assert_eq!(Counts::default().pct(), 0.0);
    }

    #[test]
    fn pct_rounds_to_two_decimals() {
        assert_eq!(Counts::new(1, 3).pct(), 33.33);
        assert_eq!(Counts::new(2, 3).pct(), 66.67);
        assert_eq!(Counts::new(7, 10).pct(), 70.0);
    }

    #[test]
    fn from_hits_counts_nonzero_as_covered() {
        let counts = Counts::from_hits([0, 1, 5, 0]);
        assert_eq!(counts, Counts::new(2, 4));
    }

    #[test]
    fn sums_are_count_wise() {
        let mut total = FileCounts::default();
        total += FileCounts {
            statements: Counts::new(1, 1),
            ..Default::default()
        };
        total += FileCounts {
            statements: Counts::new(0, 99),
            ..Default::default()
        };
        // 1/100, not the 50% an average of per-file percentages would give.
        assert_eq!(total.statements.pct(), 1.0);
    }
}
