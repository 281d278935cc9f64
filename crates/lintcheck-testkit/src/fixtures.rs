//! Common test fixtures for lintcheck.
//!
//! This module provides sample linter outputs, their decoded records and
//! sample project manifests for use in tests across the workspace.

use lintcheck_types::{DiagnosticRecord, Message, Severity};

/// Workspace root that fixture paths are rooted under.
pub const WORKSPACE: &str = "/ws";

// =============================================================================
// Sample linter outputs (raw JSON reporter text)
// =============================================================================

pub mod sample_outputs {
    /// No files with findings.
    pub fn clean() -> &'static str {
        "[]"
    }

    /// One file with a single warning.
    pub fn warning_only() -> &'static str {
        r#"[
  {
    "filePath": "/ws/a.js",
    "messages": [
      {"ruleId": "no-unused-vars", "severity": 1, "message": "no-unused-vars", "line": 5, "column": 7}
    ],
    "errorCount": 0,
    "warningCount": 1,
    "fixableErrorCount": 0,
    "fixableWarningCount": 0
  }
]"#
    }

    /// Two files: one with an error and two warnings, one clean.
    pub fn errors_and_warnings() -> &'static str {
        r#"[
  {
    "filePath": "/ws/src/index.js",
    "messages": [
      {"ruleId": "semi", "severity": 2, "message": "Missing semicolon.", "line": 3, "endLine": 3},
      {"ruleId": "quotes", "severity": 1, "message": "Strings must use 'single' quotes.", "line": 8, "endLine": 6},
      {"ruleId": null, "severity": 1, "message": "File ignored by default."}
    ],
    "errorCount": 1,
    "warningCount": 2
  },
  {
    "filePath": "/ws/src/util.js",
    "messages": [],
    "errorCount": 0,
    "warningCount": 0
  }
]"#
    }

    /// What a linter prints when it crashes before reporting.
    pub fn malformed() -> &'static str {
        "Error: Cannot find module 'eslint-config-xo'\n    at Function.Module._resolveFilename"
    }

    /// Valid JSON that is not an array of records.
    pub fn wrong_shape() -> &'static str {
        r#"{"error": "bad config"}"#
    }
}

// =============================================================================
// Decoded records
// =============================================================================

pub mod sample_records {
    use super::*;

    pub fn warning_only() -> Vec<DiagnosticRecord> {
        vec![DiagnosticRecord {
            file_path: format!("{WORKSPACE}/a.js"),
            messages: vec![Message {
                severity: Some(Severity::Warning),
                line: Some(5),
                end_line: None,
                message: "no-unused-vars".to_string(),
                rule_id: Some("no-unused-vars".to_string()),
            }],
            warning_count: 1,
            error_count: 0,
        }]
    }

    pub fn errors_and_warnings() -> Vec<DiagnosticRecord> {
        vec![
            DiagnosticRecord {
                file_path: format!("{WORKSPACE}/src/index.js"),
                messages: vec![
                    Message {
                        severity: Some(Severity::Error),
                        line: Some(3),
                        end_line: Some(3),
                        message: "Missing semicolon.".to_string(),
                        rule_id: Some("semi".to_string()),
                    },
                    Message {
                        severity: Some(Severity::Warning),
                        line: Some(8),
                        end_line: Some(6),
                        message: "Strings must use 'single' quotes.".to_string(),
                        rule_id: Some("quotes".to_string()),
                    },
                    Message {
                        severity: Some(Severity::Warning),
                        line: None,
                        end_line: None,
                        message: "File ignored by default.".to_string(),
                        rule_id: None,
                    },
                ],
                warning_count: 2,
                error_count: 1,
            },
            DiagnosticRecord {
                file_path: format!("{WORKSPACE}/src/util.js"),
                messages: vec![],
                warning_count: 0,
                error_count: 0,
            },
        ]
    }
}

// =============================================================================
// Project manifests (package.json)
// =============================================================================

pub mod sample_manifests {
    pub fn plain() -> &'static str {
        r#"{"name": "demo", "version": "1.0.0"}"#
    }

    pub fn eslint_prettier_plugin() -> &'static str {
        r#"{"name": "demo", "eslintConfig": {"plugins": ["react", "prettier"]}}"#
    }

    pub fn eslint_other_plugins() -> &'static str {
        r#"{"name": "demo", "eslintConfig": {"plugins": ["react"]}}"#
    }

    pub fn xo_prettier() -> &'static str {
        r#"{"name": "demo", "xo": {"prettier": true, "space": true}}"#
    }

    pub fn xo_prettier_off() -> &'static str {
        r#"{"name": "demo", "xo": {"prettier": false}}"#
    }
}
