//! Persist assembled reports to disk.

use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{info, warn};

use super::outcome::AnalysisOutcome;
use crate::error::ReportError;

/// Write `content` to `path`, creating parent directories as needed.
///
/// The content goes to a temp file in the target directory first and is
/// renamed into place, so a failed write never leaves a partial report.
pub async fn write_report(path: &Path, content: &str) -> Result<(), ReportError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    tokio::fs::create_dir_all(&dir)
        .await
        .map_err(|source| ReportError::CreateDir {
            path: dir.clone(),
            source,
        })?;

    let target = path.to_path_buf();
    let content = content.to_string();
    tokio::task::spawn_blocking(move || persist(&dir, &target, &content))
        .await
        .map_err(|e| ReportError::WriteTask(e.to_string()))?
}

fn persist(dir: &Path, target: &Path, content: &str) -> Result<(), ReportError> {
    let write_err = |source: std::io::Error| ReportError::Write {
        path: target.to_path_buf(),
        source,
    };

    let mut file = NamedTempFile::new_in(dir).map_err(write_err)?;
    file.write_all(content.as_bytes()).map_err(write_err)?;
    file.persist(target).map_err(|e| write_err(e.error))?;
    Ok(())
}

/// Save a successful outcome to `path`.
///
/// I/O errors become [`AnalysisOutcome::Failure`] and the content is
/// discarded. Warnings and failures pass through untouched.
pub async fn save_outcome(outcome: AnalysisOutcome, path: &Path) -> AnalysisOutcome {
    match outcome {
        AnalysisOutcome::Success { content } => match write_report(path, &content).await {
            Ok(()) => {
                info!("Wrote report to {}", path.display());
                AnalysisOutcome::Success { content }
            }
            Err(e) => {
                warn!("{e}");
                AnalysisOutcome::Failure {
                    reason: e.to_string(),
                }
            }
        },
        other => other,
    }
}
