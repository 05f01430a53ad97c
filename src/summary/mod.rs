//! Human-readable prose generated from diffs and their statistics.

pub mod change_set;
pub mod commit;
pub mod review;

pub use change_set::{
    DEFAULT_MAX_LISTED_FILES, NO_CHANGES_MESSAGE, SummaryOptions, summarize_change_set,
    summarize_change_set_with,
};
pub use commit::{CommitMessage, compose_commit_message};
pub use review::{Complexity, NO_REVIEW_MESSAGE, compose_review, format_net};
