//! Result states of a report run.

use std::path::{Path, PathBuf};

use serde::Serialize;

/// What assembling (and optionally saving) a report produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum AnalysisOutcome {
    Success { content: String },
    /// Nothing to report, e.g. a clean working tree.
    Warning { reason: String },
    #[serde(rename = "error")]
    Failure { reason: String },
}

impl AnalysisOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, AnalysisOutcome::Success { .. })
    }

    /// The report content for a success.
    pub fn content(&self) -> Option<&str> {
        match self {
            AnalysisOutcome::Success { content } => Some(content),
            _ => None,
        }
    }
}

/// The status surfaced to callers once a report has been handled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ReportStatus {
    Success { path: PathBuf, message: String },
    Warning { message: String },
    Error { message: String },
}

impl ReportStatus {
    /// Describe an outcome whose content was written to `path`.
    pub fn from_outcome(outcome: &AnalysisOutcome, path: &Path) -> Self {
        match outcome {
            AnalysisOutcome::Success { .. } => ReportStatus::Success {
                path: path.to_path_buf(),
                message: format!("Report written to {}", path.display()),
            },
            AnalysisOutcome::Warning { reason } => ReportStatus::Warning {
                message: reason.clone(),
            },
            AnalysisOutcome::Failure { reason } => ReportStatus::Error {
                message: reason.clone(),
            },
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ReportStatus::Success { message, .. }
            | ReportStatus::Warning { message }
            | ReportStatus::Error { message } => message,
        }
    }
}
