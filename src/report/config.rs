//! Per-invocation report options.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::classify::ChangeType;
use crate::error::ConfigError;

/// Title used when none is configured.
pub const DEFAULT_TITLE: &str = "Code Review Results";

/// Commit message overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommitOptions {
    /// Overrides the classified change type.
    #[serde(rename = "type")]
    pub change_type: Option<ChangeType>,
    pub scope: Option<String>,
}

/// Which sections a report contains.
///
/// Deserializes from a flat JSON object; missing fields keep their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub title: String,
    pub include_changes: bool,
    pub include_commit_message: bool,
    pub include_review: bool,
    /// Used verbatim as the review section instead of the generated review.
    pub review_comments: Option<String>,
    #[serde(flatten)]
    pub commit: CommitOptions,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            include_changes: true,
            include_commit_message: true,
            include_review: false,
            review_comments: None,
            commit: CommitOptions::default(),
        }
    }
}

impl ReportConfig {
    /// Load a config from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Review comments, if present and non-empty.
    pub fn review_comments(&self) -> Option<&str> {
        self.review_comments
            .as_deref()
            .filter(|comments| !comments.is_empty())
    }
}
