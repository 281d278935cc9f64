use lintcheck_types::{
    CheckRunOutput, CheckRunUpdate, Conclusion, LintReport, REPORT_SCHEMA_V1, ReportReceipt,
    SUMMARY_NO_LINT, TEXT_NO_LINT, ToolMeta,
};

/// Output block of the terminal check-run update.
pub fn check_run_output(title: &str, report: &LintReport) -> CheckRunOutput {
    let (summary, text) = match report.verdict.conclusion {
        Conclusion::Success => (SUMMARY_NO_LINT.to_string(), TEXT_NO_LINT.to_string()),
        Conclusion::Neutral | Conclusion::Failure => {
            let joined = report.verdict.summary_lines.join("\n");
            (joined.clone(), joined)
        }
    };

    CheckRunOutput {
        title: title.to_string(),
        summary,
        text,
        annotations: report.annotations.clone(),
    }
}

pub fn check_run_update(
    head_sha: &str,
    completed_at: &str,
    title: &str,
    report: &LintReport,
) -> CheckRunUpdate {
    CheckRunUpdate {
        head_sha: head_sha.to_string(),
        completed_at: completed_at.to_string(),
        conclusion: report.verdict.conclusion,
        output: check_run_output(title, report),
    }
}

pub fn build_receipt(report: &LintReport) -> ReportReceipt {
    ReportReceipt {
        schema: REPORT_SCHEMA_V1.to_string(),
        tool: ToolMeta {
            name: "lintcheck".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        verdict: report.verdict.clone(),
        annotations: report.annotations.clone(),
    }
}

#[cfg(test)]
mod tests {
    use lintcheck_types::{Annotation, AnnotationLevel, Verdict};

    use super::*;

    fn report_with(conclusion: Conclusion, summary_lines: Vec<&str>) -> LintReport {
        LintReport {
            verdict: Verdict {
                total_warnings: 1,
                total_errors: 1,
                conclusion,
                summary_lines: summary_lines.into_iter().map(String::from).collect(),
            },
            annotations: vec![Annotation {
                path: "a.js".to_string(),
                start_line: 1,
                end_line: 1,
                annotation_level: AnnotationLevel::Failure,
                message: "m".to_string(),
                rule_id: None,
            }],
        }
    }

    #[test]
    fn success_uses_fixed_strings() {
        let report = report_with(Conclusion::Success, vec![]);
        let out = check_run_output("lint", &report);
        assert_eq!(out.title, "lint");
        assert_eq!(out.summary, SUMMARY_NO_LINT);
        assert_eq!(out.text, TEXT_NO_LINT);
    }

    #[test]
    fn non_success_joins_summary_lines() {
        let report = report_with(
            Conclusion::Failure,
            vec![":warning: Found 1 warnings.", ":x: Found 1 errors."],
        );
        let out = check_run_output("lint", &report);
        assert_eq!(out.summary, ":warning: Found 1 warnings.\n:x: Found 1 errors.");
        assert_eq!(out.text, out.summary);
        assert_eq!(out.annotations, report.annotations);
    }

    #[test]
    fn update_payload_shape() {
        let report = report_with(Conclusion::Neutral, vec![":warning: Found 1 warnings."]);
        let update = check_run_update("abc123", "2024-01-15T10:30:00.000Z", "lint", &report);
        let v = serde_json::to_value(&update).unwrap();
        assert_eq!(v["head_sha"], "abc123");
        assert_eq!(v["completed_at"], "2024-01-15T10:30:00.000Z");
        assert_eq!(v["conclusion"], "neutral");
        assert_eq!(v["output"]["title"], "lint");
        assert_eq!(v["output"]["annotations"][0]["annotation_level"], "failure");
        assert_eq!(v["output"]["annotations"][0]["start_line"], 1);
    }

    #[test]
    fn receipt_carries_schema_and_tool() {
        let report = report_with(Conclusion::Failure, vec![":x: Found 1 errors."]);
        let receipt = build_receipt(&report);
        assert_eq!(receipt.schema, REPORT_SCHEMA_V1);
        assert_eq!(receipt.tool.name, "lintcheck");
        assert_eq!(receipt.verdict, report.verdict);
    }
}
