use lintcheck_types::{Annotation, AnnotationLevel, Message, Severity};

/// Messages with at least this many code points are truncated.
pub const TRUNCATE_THRESHOLD: usize = 64;
/// Code points kept from a truncated message, before [`ELLIPSIS`].
pub const TRUNCATE_KEEP: usize = 60;
pub const ELLIPSIS: &str = "...";

/// Replaces quote characters with backticks and bounds the length.
///
/// Length is measured in Unicode scalar values, never bytes.
pub fn normalize_message(text: &str) -> String {
    let replaced: String = text
        .chars()
        .map(|c| if c == '"' || c == '\'' { '`' } else { c })
        .collect();

    if replaced.chars().count() < TRUNCATE_THRESHOLD {
        return replaced;
    }

    let mut out: String = replaced.chars().take(TRUNCATE_KEEP).collect();
    out.push_str(ELLIPSIS);
    out
}

pub fn annotation_level(severity: Option<Severity>) -> AnnotationLevel {
    match severity {
        Some(Severity::Error) => AnnotationLevel::Failure,
        Some(Severity::Warning) => AnnotationLevel::Warning,
        Some(Severity::Info) | None => AnnotationLevel::Notice,
    }
}

/// Returns `(start_line, end_line)` with `1 <= start_line <= end_line`.
///
/// A missing or zero `line` starts at 1; a missing, zero or inverted
/// `end_line` collapses to the start line.
pub fn line_range(line: Option<u32>, end_line: Option<u32>) -> (u32, u32) {
    let start = line.filter(|l| *l > 0).unwrap_or(1);
    let end = end_line.filter(|e| *e >= start).unwrap_or(start);
    (start, end)
}

/// Strips the `<workspace>/` prefix from a linter path when present.
pub fn relative_path(file_path: &str, workspace: &str) -> String {
    let root = workspace.trim_end_matches('/');
    if root.is_empty() {
        return file_path.to_string();
    }

    file_path
        .strip_prefix(root)
        .and_then(|rest| rest.strip_prefix('/'))
        .unwrap_or(file_path)
        .to_string()
}

pub fn build_annotation(path: &str, message: &Message) -> Annotation {
    let (start_line, end_line) = line_range(message.line, message.end_line);
    Annotation {
        path: path.to_string(),
        start_line,
        end_line,
        annotation_level: annotation_level(message.severity),
        message: normalize_message(&message.message),
        rule_id: message.rule_id.clone(),
    }
}
