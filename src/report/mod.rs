//! Report assembly and persistence.

pub mod assembler;
pub mod config;
pub mod outcome;
pub mod writer;

pub use assembler::{NO_CHANGES_WARNING, ReportAssembler, assemble};
pub use config::{CommitOptions, DEFAULT_TITLE, ReportConfig};
pub use outcome::{AnalysisOutcome, ReportStatus};
pub use writer::{save_outcome, write_report};
