//! Shared test utilities for integration tests.
//!
//! Not all functions are used by every test file, but they're shared across tests.
#![allow(dead_code)]

use std::path::Path;

use diffscribe::FileDiff;
use git2::{Repository, Signature};

/// Build a unified diff for `path` with the given removed and added lines.
pub fn unified_diff(path: &str, removed: &[&str], added: &[&str]) -> String {
    let mut text = format!(
        "diff --git a/{path} b/{path}\n--- a/{path}\n+++ b/{path}\n@@ -1,{} +1,{} @@\n",
        removed.len(),
        added.len()
    );
    for line in removed {
        text.push_str(&format!("-{line}\n"));
    }
    for line in added {
        text.push_str(&format!("+{line}\n"));
    }
    text
}

/// A [`FileDiff`] with a realistic unified diff body.
pub fn file_diff(path: &str, removed: &[&str], added: &[&str]) -> FileDiff {
    FileDiff::new(path, unified_diff(path, removed, added))
}

/// A small mixed change set used across report tests.
pub fn sample_change_set() -> Vec<FileDiff> {
    vec![
        file_diff("src/auth/login.ts", &["return null;"], &["return session;", "audit(user);"]),
        file_diff("docs/auth.md", &[], &["## Login flow"]),
        file_diff("package.json", &["\"version\": \"1.0.0\""], &["\"version\": \"1.1.0\""]),
    ]
}

/// A test git repository builder for integration tests.
pub struct TestRepo {
    pub dir: tempfile::TempDir,
    pub repo: Repository,
}

impl TestRepo {
    /// Create a new empty git repository in a temp directory.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp directory");
        let repo = Repository::init(dir.path()).expect("Failed to init git repo");
        Self { dir, repo }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Get the test signature for commits.
    fn signature(&self) -> Signature<'_> {
        Signature::now("Test User", "test@example.com").expect("Failed to create signature")
    }

    /// Write a file relative to the repository root, creating directories.
    pub fn write(&self, name: &str, content: &str) {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(path, content).expect("Failed to write test file");
    }

    /// Write the given files and commit them all.
    pub fn commit_files(&self, files: &[(&str, &str)], message: &str) {
        let mut index = self.repo.index().expect("Failed to get index");
        for (name, content) in files {
            self.write(name, content);
            index.add_path(Path::new(name)).expect("Failed to add file");
        }
        index.write().expect("Failed to write index");
        let tree_id = index.write_tree().expect("Failed to write tree");
        let tree = self.repo.find_tree(tree_id).expect("Failed to find tree");

        let sig = self.signature();
        let parent = self.repo.head().ok().and_then(|h| h.peel_to_commit().ok());
        let parents: Vec<&git2::Commit> = parent.iter().collect();

        self.repo
            .commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
            .expect("Failed to create commit");
    }
}
