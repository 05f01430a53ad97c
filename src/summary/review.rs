//! Markdown review summary with per-file complexity ratings.

use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::diff::{DiffStats, FileDiff};

/// Returned by [`compose_review`] for an empty change set.
pub const NO_REVIEW_MESSAGE: &str = "No changes to review.";

const MEDIUM_THRESHOLD: usize = 300;
const HIGH_THRESHOLD: usize = 1000;

/// Coarse size bucket for a file's diff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Low,
    Medium,
    High,
}

impl Complexity {
    /// Rate by raw character length of the diff text.
    pub fn from_diff_len(len: usize) -> Self {
        if len >= HIGH_THRESHOLD {
            Complexity::High
        } else if len >= MEDIUM_THRESHOLD {
            Complexity::Medium
        } else {
            Complexity::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Complexity::Low => "low",
            Complexity::Medium => "medium",
            Complexity::High => "high",
        }
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Render a net line count with an explicit sign: `+0`, `+4`, `-2`.
pub fn format_net(net: i64) -> String {
    if net >= 0 {
        format!("+{net}")
    } else {
        net.to_string()
    }
}

/// Build a Markdown review of the diffs: an overview block followed by one
/// subsection per file.
///
/// Headings start at level 4 so they nest under a report's `## Code Review`
/// without clashing with its `### {path}` file headings.
pub fn compose_review(diffs: &[FileDiff]) -> String {
    if diffs.is_empty() {
        return NO_REVIEW_MESSAGE.to_string();
    }

    let per_file: Vec<(&FileDiff, DiffStats)> =
        diffs.iter().map(|diff| (diff, diff.stats())).collect();
    let total: DiffStats = per_file.iter().map(|(_, stats)| *stats).sum();
    let file_types: BTreeSet<&str> = diffs.iter().map(FileDiff::extension).collect();

    let mut review = String::from("#### Overview\n\n");
    review.push_str(&format!("- Files changed: {}\n", diffs.len()));
    review.push_str(&format!("- File types: {}\n", file_types.len()));
    review.push_str(&format!("- Total additions: +{}\n", total.added));
    review.push_str(&format!("- Total deletions: -{}\n", total.removed));
    review.push_str(&format!("- Net change: {}\n", format_net(total.net())));

    review.push_str("\n#### Files\n");
    for (diff, stats) in per_file {
        let complexity = Complexity::from_diff_len(diff.diff_text.chars().count());
        debug!(
            "{}: +{} -{} ({})",
            diff.path, stats.added, stats.removed, complexity
        );
        review.push_str(&format!("\n##### `{}`\n\n", diff.path));
        review.push_str(&format!("- Added: {}\n", stats.added));
        review.push_str(&format!("- Removed: {}\n", stats.removed));
        review.push_str(&format!("- Net change: {}\n", format_net(stats.net())));
        review.push_str(&format!("- Complexity: {}\n", complexity));
    }

    review
}
