//! Per-file diff records and line statistics.

pub mod stats;

use serde::{Deserialize, Serialize};

pub use stats::{DiffStats, compute_stats};

/// Unified diff text for a single changed file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileDiff {
    pub path: String,
    /// Raw unified diff content. May be empty.
    pub diff_text: String,
}

impl FileDiff {
    pub fn new(path: impl Into<String>, diff_text: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            diff_text: diff_text.into(),
        }
    }

    /// Last path segment after the final `/`.
    pub fn basename(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or(&self.path)
    }

    /// Substring after the final `.` in the path, or `""` when there is none.
    pub fn extension(&self) -> &str {
        match self.path.rfind('.') {
            Some(idx) => &self.path[idx + 1..],
            None => "",
        }
    }

    /// Added/removed line counts for this file.
    pub fn stats(&self) -> DiffStats {
        compute_stats(&self.diff_text)
    }
}
