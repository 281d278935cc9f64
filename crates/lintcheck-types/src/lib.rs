//! Data types (linter records + check-run payloads + receipts) for lintcheck.
//!
//! This crate is intentionally "dumb": pure DTOs with serde + schemars.
//! The only logic here is the lenient decoding of linter output, which lives
//! in [`lenient`].

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub mod lenient;

// ── Schema Identifiers ─────────────────────────────────────────
pub const REPORT_SCHEMA_V1: &str = "lintcheck.report.v1";

// ── Frozen Vocabulary ──────────────────────────────────────────
pub const SUMMARY_NO_LINT: &str = "No lint found in your code.";
pub const TEXT_NO_LINT: &str = ":tada: No lint found in your code.";
pub const NOTICE_LINT_ERRORS: &str = ":x: Lint errors found!";
pub const NOTICE_LINT_WARNINGS: &str = ":x: Lint warnings found!";

/// Severity of a single linter message, as emitted by ESLint-style reporters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl Severity {
    /// Maps the numeric reporter code (0/1/2). Anything else is unknown.
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Severity::Info),
            1 => Some(Severity::Warning),
            2 => Some(Severity::Error),
            _ => None,
        }
    }

    pub fn code(self) -> u8 {
        match self {
            Severity::Info => 0,
            Severity::Warning => 1,
            Severity::Error => 2,
        }
    }
}

/// One finding inside a [`DiagnosticRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    #[serde(default, deserialize_with = "lenient::severity")]
    pub severity: Option<Severity>,
    #[serde(default, deserialize_with = "lenient::line")]
    pub line: Option<u32>,
    #[serde(default, deserialize_with = "lenient::line")]
    pub end_line: Option<u32>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub message: String,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub rule_id: Option<String>,
}

/// One file's worth of raw linter findings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosticRecord {
    #[serde(default, deserialize_with = "lenient::text")]
    pub file_path: String,
    #[serde(default, deserialize_with = "lenient::messages")]
    pub messages: Vec<Message>,
    #[serde(default, deserialize_with = "lenient::count")]
    pub warning_count: u32,
    #[serde(default, deserialize_with = "lenient::count")]
    pub error_count: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum AnnotationLevel {
    Notice,
    Warning,
    Failure,
}

impl AnnotationLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            AnnotationLevel::Notice => "notice",
            AnnotationLevel::Warning => "warning",
            AnnotationLevel::Failure => "failure",
        }
    }
}

/// A normalized finding, shaped the way the check-runs API expects it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Annotation {
    pub path: String,
    pub start_line: u32,
    pub end_line: u32,
    pub annotation_level: AnnotationLevel,
    pub message: String,
    /// The linter rule id. The API calls this field `raw_details`.
    #[serde(
        rename = "raw_details",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub rule_id: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Conclusion {
    Success,
    Neutral,
    Failure,
}

impl Conclusion {
    pub fn as_str(self) -> &'static str {
        match self {
            Conclusion::Success => "success",
            Conclusion::Neutral => "neutral",
            Conclusion::Failure => "failure",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Verdict {
    pub total_warnings: u32,
    pub total_errors: u32,
    pub conclusion: Conclusion,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub summary_lines: Vec<String>,
}

/// Verdict plus the annotations it was computed alongside.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct LintReport {
    pub verdict: Verdict,
    pub annotations: Vec<Annotation>,
}

// ── Check-run API payloads ─────────────────────────────────────

/// Minimal view of a check run returned by "list check runs for a ref".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckRunRef {
    pub id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckRunList {
    #[serde(default)]
    pub total_count: u64,
    #[serde(default)]
    pub check_runs: Vec<CheckRunRef>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CheckRunOutput {
    pub title: String,
    pub summary: String,
    pub text: String,
    pub annotations: Vec<Annotation>,
}

/// Body of the single terminal "update check run" call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CheckRunUpdate {
    pub head_sha: String,
    pub completed_at: String,
    pub conclusion: Conclusion,
    pub output: CheckRunOutput,
}

// ── Receipt ────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

/// On-disk record of one run, written with `--out`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ReportReceipt {
    pub schema: String,
    pub tool: ToolMeta,
    pub verdict: Verdict,
    pub annotations: Vec<Annotation>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enum_as_str_matches_serde() {
        for level in [
            AnnotationLevel::Notice,
            AnnotationLevel::Warning,
            AnnotationLevel::Failure,
        ] {
            let json = serde_json::to_string(&level).unwrap();
            assert_eq!(json, format!("\"{}\"", level.as_str()));
        }
        for conclusion in [Conclusion::Success, Conclusion::Neutral, Conclusion::Failure] {
            let json = serde_json::to_string(&conclusion).unwrap();
            assert_eq!(json, format!("\"{}\"", conclusion.as_str()));
        }
    }

    #[test]
    fn severity_codes_round_trip() {
        for sev in [Severity::Info, Severity::Warning, Severity::Error] {
            assert_eq!(Severity::from_code(i64::from(sev.code())), Some(sev));
        }
        assert_eq!(Severity::from_code(3), None);
        assert_eq!(Severity::from_code(-1), None);
    }

    #[test]
    fn annotation_rule_id_serializes_as_raw_details() {
        let a = Annotation {
            path: "a.js".to_string(),
            start_line: 1,
            end_line: 1,
            annotation_level: AnnotationLevel::Warning,
            message: "m".to_string(),
            rule_id: Some("semi".to_string()),
        };
        let v = serde_json::to_value(&a).unwrap();
        assert_eq!(v["raw_details"], "semi");
        assert_eq!(v["annotation_level"], "warning");
        assert!(v.get("rule_id").is_none());
    }

    #[test]
    fn annotation_without_rule_id_omits_raw_details() {
        let a = Annotation {
            path: "a.js".to_string(),
            start_line: 1,
            end_line: 1,
            annotation_level: AnnotationLevel::Notice,
            message: "m".to_string(),
            rule_id: None,
        };
        let v = serde_json::to_value(&a).unwrap();
        assert!(v.get("raw_details").is_none());
    }

    #[test]
    fn verdict_summary_lines_omitted_when_empty() {
        let v = Verdict {
            total_warnings: 0,
            total_errors: 0,
            conclusion: Conclusion::Success,
            summary_lines: vec![],
        };
        let json = serde_json::to_value(&v).unwrap();
        assert!(json.get("summary_lines").is_none());
    }

    #[test]
    fn check_run_list_tolerates_missing_fields() {
        let list: CheckRunList = serde_json::from_str("{}").unwrap();
        assert_eq!(list.total_count, 0);
        assert!(list.check_runs.is_empty());

        let list: CheckRunList = serde_json::from_str(
            r#"{"total_count":2,"check_runs":[{"id":7,"name":"lint","status":"queued"},{"id":9}]}"#,
        )
        .unwrap();
        assert_eq!(list.check_runs[0].id, 7);
        assert_eq!(list.check_runs[0].name.as_deref(), Some("lint"));
        assert_eq!(list.check_runs[1].name, None);
    }
}
