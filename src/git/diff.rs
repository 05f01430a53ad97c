//! Per-file diff collection from the working tree using git2.

use std::path::Path;

use git2::{Diff, DiffDelta, DiffFormat, DiffOptions, ErrorCode, Repository, Tree};
use tracing::debug;

use crate::diff::FileDiff;
use crate::error::GitError;

/// Open the repository containing `path`.
pub fn open_repository(path: &Path) -> Result<Repository, GitError> {
    Repository::discover(path).map_err(GitError::OpenRepository)
}

/// Resolve the HEAD tree, distinguishing empty-repo errors from real failures.
///
/// Returns `Ok(None)` for repos with no commits (unborn branch / not found),
/// `Ok(Some(tree))` for repos with a valid HEAD, or `Err(GitError::DiffFailed)`
/// for real errors (corrupt HEAD, permission issues, missing objects).
fn resolve_head_tree(repo: &Repository) -> Result<Option<Tree<'_>>, GitError> {
    let head_ref = match repo.head() {
        Ok(r) => r,
        Err(e)
            if e.code() == ErrorCode::UnbornBranch || e.code() == ErrorCode::NotFound =>
        {
            return Ok(None);
        }
        Err(e) => return Err(GitError::DiffFailed(e)),
    };

    let tree = head_ref.peel_to_tree().map_err(GitError::DiffFailed)?;
    Ok(Some(tree))
}

/// Collect one [`FileDiff`] per changed file (staged, unstaged and untracked)
/// relative to HEAD.
pub fn collect_file_diffs(repo: &Repository) -> Result<Vec<FileDiff>, GitError> {
    collect_file_diffs_for_paths(repo, &[])
}

/// Same as [`collect_file_diffs`], restricted to the given pathspecs.
///
/// An empty `paths` slice means the whole working tree.
pub fn collect_file_diffs_for_paths(
    repo: &Repository,
    paths: &[String],
) -> Result<Vec<FileDiff>, GitError> {
    let head_tree = resolve_head_tree(repo)?;

    let mut opts = DiffOptions::new();
    opts.include_untracked(true)
        .recurse_untracked_dirs(true)
        .show_untracked_content(true);
    for p in paths {
        opts.pathspec(p);
    }

    let diff = repo
        .diff_tree_to_workdir_with_index(head_tree.as_ref(), Some(&mut opts))
        .map_err(GitError::DiffFailed)?;

    let files = split_by_file(&diff)?;
    debug!("Collected diffs for {} file(s)", files.len());
    Ok(files)
}

fn delta_path(delta: &DiffDelta<'_>) -> Option<String> {
    delta
        .new_file()
        .path()
        .or_else(|| delta.old_file().path())
        .map(|p| p.to_string_lossy().replace('\\', "/"))
}

/// Render a patch and split its text into one entry per file, in git's
/// delta order.
fn split_by_file(diff: &Diff<'_>) -> Result<Vec<FileDiff>, GitError> {
    let mut files: Vec<FileDiff> = Vec::new();

    diff.print(DiffFormat::Patch, |delta, _hunk, line| {
        let Some(path) = delta_path(&delta) else {
            return true;
        };

        if files.last().is_none_or(|f| f.path != path) {
            files.push(FileDiff::new(path, String::new()));
        }

        if let Some(file) = files.last_mut() {
            let origin = line.origin();
            if origin == '+' || origin == '-' || origin == ' ' {
                file.diff_text.push(origin);
            }
            file.diff_text
                .push_str(&String::from_utf8_lossy(line.content()));
        }

        true
    })
    .map_err(GitError::DiffFailed)?;

    Ok(files)
}
