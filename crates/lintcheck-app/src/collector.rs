//! Runs the external linter and decodes its JSON report.

use std::path::PathBuf;
use std::process::Stdio;

use lintcheck_types::DiagnosticRecord;
use tokio::process::Command;
use tracing::{debug, info};

use crate::context::ActionContext;

pub const REPORTER_FLAG: &str = "--reporter=json";

#[derive(Debug, thiserror::Error)]
pub enum CollectError {
    #[error("failed to run linter '{linter}': {source}")]
    Spawn {
        linter: String,
        source: std::io::Error,
    },
    #[error("linter output is not a JSON report: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collector {
    linter: PathBuf,
    workspace: PathBuf,
    trailing_args: Vec<String>,
}

impl Collector {
    pub fn new(ctx: &ActionContext) -> Self {
        Self {
            linter: ctx.linter.clone(),
            workspace: ctx.workspace.clone(),
            trailing_args: ctx.linter_args.clone(),
        }
    }

    /// Full argument list for one invocation.
    pub fn args(&self, extra_flags: &[String]) -> Vec<String> {
        std::iter::once(REPORTER_FLAG.to_string())
            .chain(extra_flags.iter().cloned())
            .chain(self.trailing_args.iter().cloned())
            .collect()
    }

    /// Runs the linter to completion and decodes its report.
    ///
    /// A non-zero exit status is expected whenever the linter finds errors
    /// and is not treated as a failure.
    pub async fn collect(
        &self,
        extra_flags: &[String],
    ) -> Result<Vec<DiagnosticRecord>, CollectError> {
        let args = self.args(extra_flags);
        debug!(
            linter = %self.linter.display(),
            cwd = %self.workspace.display(),
            ?args,
            "Running linter"
        );

        let output = Command::new(&self.linter)
            .args(&args)
            .current_dir(&self.workspace)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|source| CollectError::Spawn {
                linter: self.linter.display().to_string(),
                source,
            })?;

        let records = decode_output(&output.stdout, &output.stderr)?;
        info!(
            exit = ?output.status.code(),
            records = records.len(),
            "Linter finished"
        );
        Ok(records)
    }
}

/// Decodes whichever stream carries the report: stdout when it has any
/// content, else stderr. Entirely blank output means nothing was reported.
pub fn decode_output(stdout: &[u8], stderr: &[u8]) -> Result<Vec<DiagnosticRecord>, CollectError> {
    let stdout = String::from_utf8_lossy(stdout);
    let text = if stdout.trim().is_empty() {
        String::from_utf8_lossy(stderr)
    } else {
        stdout
    };

    if text.trim().is_empty() {
        debug!("Linter produced no output");
        return Ok(vec![]);
    }

    Ok(serde_json::from_str(&text)?)
}

#[cfg(test)]
mod tests {
    use lintcheck_testkit::{sample_outputs, sample_records};

    use super::*;

    fn ctx(linter_args: Vec<&str>) -> ActionContext {
        ActionContext {
            workspace: PathBuf::from("/ws"),
            linter: PathBuf::from("/ws/node_modules/.bin/xo"),
            linter_args: linter_args.into_iter().map(String::from).collect(),
            github: None,
        }
    }

    #[test]
    fn args_order_reporter_then_manifest_then_user() {
        let c = Collector::new(&ctx(vec!["--space"]));
        assert_eq!(
            c.args(&["--prettier".to_string()]),
            vec!["--reporter=json", "--prettier", "--space"]
        );
        assert_eq!(c.args(&[]), vec!["--reporter=json", "--space"]);
    }

    #[test]
    fn decode_prefers_stdout() {
        let records = decode_output(sample_outputs::warning_only().as_bytes(), b"noise").unwrap();
        assert_eq!(records, sample_records::warning_only());
    }

    #[test]
    fn decode_falls_back_to_stderr() {
        let records = decode_output(b"  \n", sample_outputs::warning_only().as_bytes()).unwrap();
        assert_eq!(records, sample_records::warning_only());
    }

    #[test]
    fn decode_blank_is_empty() {
        assert!(decode_output(b"", b"").unwrap().is_empty());
        assert!(decode_output(sample_outputs::clean().as_bytes(), b"").unwrap().is_empty());
    }

    #[test]
    fn decode_rejects_non_json() {
        let err = decode_output(sample_outputs::malformed().as_bytes(), b"").unwrap_err();
        assert!(matches!(err, CollectError::Decode(_)));

        let err = decode_output(sample_outputs::wrong_shape().as_bytes(), b"").unwrap_err();
        assert!(matches!(err, CollectError::Decode(_)));
    }

    #[test]
    fn decode_keeps_linter_order() {
        let records = decode_output(sample_outputs::errors_and_warnings().as_bytes(), b"").unwrap();
        let paths: Vec<&str> = records.iter().map(|r| r.file_path.as_str()).collect();
        assert_eq!(paths, vec!["/ws/src/index.js", "/ws/src/util.js"]);
    }

    #[tokio::test]
    async fn collect_reports_missing_binary() {
        let td = tempfile::TempDir::new().expect("temp");
        let ctx = ActionContext {
            workspace: td.path().to_path_buf(),
            linter: td.path().join("does-not-exist"),
            linter_args: vec![],
            github: None,
        };
        let err = Collector::new(&ctx).collect(&[]).await.unwrap_err();
        assert!(matches!(err, CollectError::Spawn { .. }));
    }
}
