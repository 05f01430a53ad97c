//! Git working-tree access using git2-rs.

pub mod diff;

pub use diff::{collect_file_diffs, collect_file_diffs_for_paths, open_repository};
