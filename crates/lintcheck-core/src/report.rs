use lintcheck_types::{Conclusion, DiagnosticRecord, LintReport, Verdict};

use crate::normalize::{build_annotation, relative_path};

/// Folds linter records into a [`LintReport`].
///
/// Records and their messages are visited in collector order, so annotation
/// order matches the linter's own output. `workspace` is the prefix stripped
/// from each record's path.
pub fn report(records: &[DiagnosticRecord], workspace: &str) -> LintReport {
    let mut total_warnings = 0u32;
    let mut total_errors = 0u32;
    let mut annotations = Vec::new();

    for record in records {
        total_warnings = total_warnings.saturating_add(record.warning_count);
        total_errors = total_errors.saturating_add(record.error_count);

        let path = relative_path(&record.file_path, workspace);
        annotations.extend(record.messages.iter().map(|m| build_annotation(&path, m)));
    }

    let (conclusion, summary_lines) = conclude(total_warnings, total_errors);

    LintReport {
        verdict: Verdict {
            total_warnings,
            total_errors,
            conclusion,
            summary_lines,
        },
        annotations,
    }
}

/// Conclusion and summary lines for a pair of totals.
///
/// Warnings are evaluated first; errors then overwrite the conclusion.
pub fn conclude(total_warnings: u32, total_errors: u32) -> (Conclusion, Vec<String>) {
    let mut conclusion = Conclusion::Success;
    let mut summary_lines = Vec::new();

    if total_warnings > 0 {
        summary_lines.push(format!(":warning: Found {total_warnings} warnings."));
        conclusion = Conclusion::Neutral;
    }

    if total_errors > 0 {
        summary_lines.push(format!(":x: Found {total_errors} errors."));
        conclusion = Conclusion::Failure;
    }

    (conclusion, summary_lines)
}
