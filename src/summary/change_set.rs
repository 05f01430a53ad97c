//! One-line summaries of a change set.

use std::collections::BTreeSet;

use crate::diff::FileDiff;

/// Returned for an empty change set.
pub const NO_CHANGES_MESSAGE: &str = "No changes detected";

/// Above this many files the summary switches from naming files to counting them.
pub const DEFAULT_MAX_LISTED_FILES: usize = 5;

/// Tuning for [`summarize_change_set_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryOptions {
    pub max_listed_files: usize,
}

impl Default for SummaryOptions {
    fn default() -> Self {
        Self {
            max_listed_files: DEFAULT_MAX_LISTED_FILES,
        }
    }
}

/// Summarize a change set with the default [`SummaryOptions`].
pub fn summarize_change_set(diffs: &[FileDiff]) -> String {
    summarize_change_set_with(diffs, &SummaryOptions::default())
}

/// Summarize a change set.
///
/// - no files: `No changes detected`
/// - one file: `Update {path}`
/// - up to `options.max_listed_files`: `Update {basename}, {basename}, ...`
/// - more: `Update {n} {ext} files` when every file shares an extension,
///   otherwise `Update {n} files across {m} file types`
pub fn summarize_change_set_with(diffs: &[FileDiff], options: &SummaryOptions) -> String {
    match diffs {
        [] => NO_CHANGES_MESSAGE.to_string(),
        [only] => format!("Update {}", only.path),
        _ if diffs.len() <= options.max_listed_files => {
            let names: Vec<&str> = diffs.iter().map(FileDiff::basename).collect();
            format!("Update {}", names.join(", "))
        }
        _ => {
            let extensions: BTreeSet<&str> = diffs.iter().map(FileDiff::extension).collect();
            match extensions.iter().next() {
                Some(ext) if extensions.len() == 1 => {
                    format!("Update {} {} files", diffs.len(), ext)
                }
                _ => format!(
                    "Update {} files across {} file types",
                    diffs.len(),
                    extensions.len()
                ),
            }
        }
    }
}
