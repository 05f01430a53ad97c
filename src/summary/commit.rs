//! Conventional commit message composition.

use serde::Serialize;
use tracing::debug;

use super::change_set::{NO_CHANGES_MESSAGE, summarize_change_set};
use crate::classify::{ChangeType, KeywordCatalog, classify};
use crate::diff::FileDiff;

/// A generated commit message with per-file statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommitMessage {
    /// `type(scope): summary`
    pub message: String,
    /// One `path: +added -removed` line per file.
    pub details: String,
}

impl CommitMessage {
    /// Subject line, blank line, then the details as the body.
    pub fn format(&self) -> String {
        format!("{}\n\n{}", self.message, self.details)
    }
}

/// Compose a commit message for the diffs.
///
/// `change_type` overrides the classifier; a blank `scope` is treated as
/// absent.
pub fn compose_commit_message(
    diffs: &[FileDiff],
    change_type: Option<ChangeType>,
    scope: Option<&str>,
    catalog: &KeywordCatalog,
) -> CommitMessage {
    let change_type = change_type.unwrap_or_else(|| classify(diffs, catalog));
    let scope_suffix = match scope.map(str::trim) {
        Some(scope) if !scope.is_empty() => format!("({scope})"),
        _ => String::new(),
    };

    let message = format!(
        "{}{}: {}",
        change_type,
        scope_suffix,
        summarize_change_set(diffs)
    );

    let details = if diffs.is_empty() {
        NO_CHANGES_MESSAGE.to_string()
    } else {
        diffs
            .iter()
            .map(|diff| {
                let stats = diff.stats();
                debug!("{}: +{} -{}", diff.path, stats.added, stats.removed);
                format!("{}: +{} -{}", diff.path, stats.added, stats.removed)
            })
            .collect::<Vec<_>>()
            .join("\n")
    };

    CommitMessage { message, details }
}
