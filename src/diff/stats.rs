//! Added/removed line counting over raw unified diff text.

use std::iter::Sum;
use std::ops::Add;

use serde::{Deserialize, Serialize};

use super::FileDiff;

/// Line counts derived from one file's diff text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffStats {
    pub added: usize,
    pub removed: usize,
}

impl DiffStats {
    /// `added - removed`, which may be negative.
    pub fn net(&self) -> i64 {
        self.added as i64 - self.removed as i64
    }

    /// Sum of the per-file stats of every diff.
    pub fn total(diffs: &[FileDiff]) -> DiffStats {
        diffs.iter().map(FileDiff::stats).sum()
    }
}

impl Add for DiffStats {
    type Output = DiffStats;

    fn add(self, rhs: DiffStats) -> DiffStats {
        DiffStats {
            added: self.added + rhs.added,
            removed: self.removed + rhs.removed,
        }
    }
}

impl Sum for DiffStats {
    fn sum<I: Iterator<Item = DiffStats>>(iter: I) -> DiffStats {
        iter.fold(DiffStats::default(), Add::add)
    }
}

/// Count added and removed lines in a unified diff.
///
/// Lines starting with `+` count as added and lines starting with `-` as
/// removed, except the `+++`/`---` file header markers. Counting by prefix
/// rather than by subtracting a header line keeps the result at zero for
/// empty or header-less text.
pub fn compute_stats(diff_text: &str) -> DiffStats {
    let mut stats = DiffStats::default();

    for line in diff_text.lines() {
        if line.starts_with('+') && !line.starts_with("+++") {
            stats.added += 1;
        } else if line.starts_with('-') && !line.starts_with("---") {
            stats.removed += 1;
        }
    }

    stats
}
