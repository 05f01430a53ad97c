//! diffscribe - Analyze working-tree diffs and assemble Markdown review reports.
//!
//! # Overview
//!
//! diffscribe reads per-file diffs from a git working tree, classifies the
//! intent of the change with keyword heuristics, computes line statistics,
//! and assembles a Markdown report with a commit message, a review summary,
//! and the raw file diffs.

pub mod classify;
pub mod diff;
pub mod error;
pub mod git;
pub mod report;
pub mod summary;

// Re-export commonly used types
pub use classify::{ChangeType, KeywordCatalog, classify};
pub use diff::{DiffStats, FileDiff, compute_stats};
pub use error::{ConfigError, GitError, ReportError};
pub use report::{AnalysisOutcome, ReportAssembler, ReportConfig, ReportStatus, assemble};
pub use summary::{CommitMessage, compose_commit_message, compose_review, summarize_change_set};
