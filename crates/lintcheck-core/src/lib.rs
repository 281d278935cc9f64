//! Core engine: folds linter records into annotations + a verdict and decides
//! what the check run and the process should report.
//!
//! Everything here is pure; process spawning and network calls live in
//! `lintcheck-app`.

mod normalize;
mod outcome;
mod render;
mod report;
mod workflow;

pub use normalize::{
    ELLIPSIS, TRUNCATE_KEEP, TRUNCATE_THRESHOLD, annotation_level, build_annotation, line_range,
    normalize_message, relative_path,
};
pub use outcome::{Outcome, outcome_for};
pub use render::{build_receipt, check_run_output, check_run_update};
pub use report::{conclude, report};
pub use workflow::{error_command, render_annotation_commands, warning_command};
