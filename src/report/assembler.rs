//! Markdown report assembly.
//!
//! A report is a level-1 title, an italic generation timestamp, then up to
//! three sections in a fixed order:
//!
//! 1. `## Code Review`
//! 2. `## Commit Message` (with `### Details`)
//! 3. `## File Changes` (one `### {path}` per file)

use chrono::{DateTime, SecondsFormat, Utc};
use tracing::debug;

use super::config::ReportConfig;
use super::outcome::AnalysisOutcome;
use crate::classify::KeywordCatalog;
use crate::diff::FileDiff;
use crate::summary::{compose_commit_message, compose_review};

/// Warning reason when there is nothing to report.
pub const NO_CHANGES_WARNING: &str = "No changes detected in the target directory";

/// Builds reports using a keyword catalog for commit classification.
#[derive(Debug, Clone, Copy)]
pub struct ReportAssembler<'a> {
    catalog: &'a KeywordCatalog,
}

impl Default for ReportAssembler<'static> {
    fn default() -> Self {
        Self::new(KeywordCatalog::builtin())
    }
}

impl<'a> ReportAssembler<'a> {
    pub fn new(catalog: &'a KeywordCatalog) -> Self {
        Self { catalog }
    }

    /// Assemble a report stamped with the current time.
    pub fn assemble(&self, diffs: &[FileDiff], config: &ReportConfig) -> AnalysisOutcome {
        self.assemble_at(diffs, config, Utc::now())
    }

    /// Assemble a report stamped with `generated_at`.
    ///
    /// Returns [`AnalysisOutcome::Warning`] for an empty change set regardless
    /// of `config`. Never returns a failure.
    pub fn assemble_at(
        &self,
        diffs: &[FileDiff],
        config: &ReportConfig,
        generated_at: DateTime<Utc>,
    ) -> AnalysisOutcome {
        if diffs.is_empty() {
            return AnalysisOutcome::Warning {
                reason: NO_CHANGES_WARNING.to_string(),
            };
        }

        let mut content = format!(
            "# {}\n\n_Generated on {}_\n\n",
            config.title,
            generated_at.to_rfc3339_opts(SecondsFormat::Secs, true)
        );

        if config.include_review {
            content.push_str(&self.review_section(diffs, config));
        }
        if config.include_commit_message {
            content.push_str(&self.commit_section(diffs, config));
        }
        if config.include_changes {
            content.push_str(&file_changes_section(diffs));
        }

        let mut content = content.trim_end().to_string();
        content.push('\n');

        debug!(
            "Assembled report for {} file(s), {} bytes",
            diffs.len(),
            content.len()
        );

        AnalysisOutcome::Success { content }
    }

    fn review_section(&self, diffs: &[FileDiff], config: &ReportConfig) -> String {
        let body = match config.review_comments() {
            Some(comments) => comments.to_string(),
            None => compose_review(diffs).trim_end().to_string(),
        };
        format!("## Code Review\n\n{body}\n\n")
    }

    fn commit_section(&self, diffs: &[FileDiff], config: &ReportConfig) -> String {
        let commit = compose_commit_message(
            diffs,
            config.commit.change_type,
            config.commit.scope.as_deref(),
            self.catalog,
        );

        let mut section = String::from("## Commit Message\n\n");
        section.push_str(&fenced("", &commit.message));
        section.push_str("### Details\n\n");
        section.push_str(&fenced("", &commit.details));
        section
    }
}

/// Assemble a report with the built-in keyword catalog.
pub fn assemble(diffs: &[FileDiff], config: &ReportConfig) -> AnalysisOutcome {
    ReportAssembler::default().assemble(diffs, config)
}

fn file_changes_section(diffs: &[FileDiff]) -> String {
    let mut section = String::from("## File Changes\n\n");
    for diff in diffs {
        section.push_str(&format!("### {}\n\n", diff.path));
        section.push_str(&fenced("diff", &diff.diff_text));
    }
    section
}

/// Wrap `body` in a code fence longer than any backtick run it contains.
fn fenced(info: &str, body: &str) -> String {
    let fence = "`".repeat(longest_backtick_run(body).max(2) + 1);
    let body = body.trim_end_matches('\n');
    if body.is_empty() {
        format!("{fence}{info}\n{fence}\n\n")
    } else {
        format!("{fence}{info}\n{body}\n{fence}\n\n")
    }
}

fn longest_backtick_run(text: &str) -> usize {
    let mut longest = 0;
    let mut current = 0;
    for c in text.chars() {
        if c == '`' {
            current += 1;
            longest = longest.max(current);
        } else {
            current = 0;
        }
    }
    longest
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    use crate::classify::ChangeType;

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap()
    }

    fn sample() -> Vec<FileDiff> {
        vec![
            FileDiff::new(
                "src/auth.rs",
                "--- a/src/auth.rs\n+++ b/src/auth.rs\n@@ -1 +1,2 @@\n-old\n+new\n+login\n",
            ),
            FileDiff::new("README.md", "+docs\n"),
        ]
    }

    #[test]
    fn test_header_and_timestamp() {
        let outcome = ReportAssembler::default().assemble_at(&sample(), &ReportConfig::default(), at());
        let content = outcome.content().unwrap();
        assert!(content.starts_with("# Code Review Results\n\n_Generated on 2024-03-01T12:30:00Z_\n\n"));
    }

    #[test]
    fn test_default_sections_in_order() {
        let outcome = ReportAssembler::default().assemble_at(&sample(), &ReportConfig::default(), at());
        let content = outcome.content().unwrap();
        assert!(!content.contains("## Code Review\n"));
        let commit = content.find("## Commit Message").unwrap();
        let details = content.find("### Details").unwrap();
        let files = content.find("## File Changes").unwrap();
        assert!(commit < details && details < files);
        assert!(content.contains("### src/auth.rs\n\n```diff\n--- a/src/auth.rs"));
    }

    #[test]
    fn test_review_section_comes_first() {
        let config = ReportConfig {
            include_review: true,
            ..ReportConfig::default()
        };
        let outcome = ReportAssembler::default().assemble_at(&sample(), &config, at());
        let content = outcome.content().unwrap();
        let review = content.find("## Code Review").unwrap();
        let commit = content.find("## Commit Message").unwrap();
        assert!(review < commit);
        assert!(content.contains("- Files changed: 2"));
    }

    #[test]
    fn test_review_comments_used_verbatim() {
        let config = ReportConfig {
            include_review: true,
            review_comments: Some("Looks good, ship it.".to_string()),
            ..ReportConfig::default()
        };
        let outcome = ReportAssembler::default().assemble_at(&sample(), &config, at());
        let content = outcome.content().unwrap();
        assert!(content.contains("## Code Review\n\nLooks good, ship it.\n\n"));
        assert!(!content.contains("#### Overview"));
    }

    #[test]
    fn test_commit_section_uses_overrides() {
        let config = ReportConfig {
            include_changes: false,
            commit: crate::report::CommitOptions {
                change_type: Some(ChangeType::Feat),
                scope: Some("auth".to_string()),
            },
            ..ReportConfig::default()
        };
        let outcome = ReportAssembler::default().assemble_at(&sample(), &config, at());
        let content = outcome.content().unwrap();
        assert!(content.contains("```\nfeat(auth): Update auth.rs, README.md\n```"));
        assert!(content.contains("```\nsrc/auth.rs: +2 -1\nREADME.md: +1 -0\n```"));
        assert!(!content.contains("## File Changes"));
    }

    #[test]
    fn test_all_sections_disabled_leaves_header() {
        let config = ReportConfig {
            title: "Empty".to_string(),
            include_changes: false,
            include_commit_message: false,
            include_review: false,
            ..ReportConfig::default()
        };
        let outcome = ReportAssembler::default().assemble_at(&sample(), &config, at());
        assert_eq!(
            outcome.content().unwrap(),
            "# Empty\n\n_Generated on 2024-03-01T12:30:00Z_\n"
        );
    }

    #[test]
    fn test_empty_diffs_warn() {
        let outcome = assemble(&[], &ReportConfig::default());
        assert_eq!(
            outcome,
            AnalysisOutcome::Warning {
                reason: NO_CHANGES_WARNING.to_string()
            }
        );
    }

    #[test]
    fn test_fence_grows_past_backticks_in_body() {
        assert_eq!(fenced("diff", "+```rust\n"), "````diff\n+```rust\n````\n\n");
        assert_eq!(fenced("", "plain"), "```\nplain\n```\n\n");
        assert_eq!(fenced("diff", ""), "```diff\n```\n\n");
    }

    #[test]
    fn test_custom_catalog_drives_classification() {
        let catalog = KeywordCatalog::new(ChangeType::Chore)
            .with_triggers(ChangeType::Style, ["docs"]);
        let config = ReportConfig {
            include_changes: false,
            ..ReportConfig::default()
        };
        let outcome = ReportAssembler::new(&catalog).assemble_at(&sample(), &config, at());
        assert!(outcome.content().unwrap().contains("style: Update auth.rs, README.md"));
    }
}
