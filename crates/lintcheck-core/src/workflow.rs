//! GitHub Actions workflow commands (`::error::…`, `::warning file=…::…`).
//!
//! Used for process-level notices and for `--dry-run`, where annotations are
//! printed instead of being attached to a check run.

use lintcheck_types::{Annotation, AnnotationLevel};

pub fn error_command(message: &str) -> String {
    format!("::error::{}", escape_data(message))
}

pub fn warning_command(message: &str) -> String {
    format!("::warning::{}", escape_data(message))
}

pub fn render_annotation_commands(annotations: &[Annotation]) -> Vec<String> {
    annotations
        .iter()
        .map(|a| {
            let command = match a.annotation_level {
                AnnotationLevel::Notice => "notice",
                AnnotationLevel::Warning => "warning",
                AnnotationLevel::Failure => "error",
            };
            let message = match &a.rule_id {
                Some(rule) => format!("[{rule}] {}", a.message),
                None => a.message.clone(),
            };
            format!(
                "::{command} file={path},line={line},endLine={end}::{msg}",
                path = escape_property(&a.path),
                line = a.start_line,
                end = a.end_line,
                msg = escape_data(&message)
            )
        })
        .collect()
}

fn escape_data(s: &str) -> String {
    s.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

fn escape_property(s: &str) -> String {
    escape_data(s).replace(':', "%3A").replace(',', "%2C")
}
