use std::path::Path;

use anyhow::{Context, Result, bail};
use chrono::Utc;
use lintcheck_core::{Outcome, build_receipt, outcome_for, report};
use lintcheck_types::LintReport;
use tracing::{debug, info};

use crate::checks::ChecksApi;
use crate::collector::Collector;
use crate::context::ActionContext;
use crate::manifest::ProjectManifest;
use crate::publish::publish;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineRun {
    pub report: LintReport,
    /// Set when a check run was updated.
    pub check_run_id: Option<u64>,
    pub outcome: Outcome,
}

/// Collect, aggregate, optionally write a receipt, then publish.
///
/// `checks` is `None` for a dry run. Any error (collector, manifest, receipt
/// or publish) aborts the run; publish failures are never downgraded.
pub async fn run_pipeline(
    ctx: &ActionContext,
    checks: Option<&dyn ChecksApi>,
    receipt: Option<&Path>,
) -> Result<PipelineRun> {
    let manifest = ProjectManifest::load(&ctx.workspace)?;
    let extra_flags = manifest.extra_flags();
    debug!(?extra_flags, "Resolved manifest flags");

    let records = Collector::new(ctx)
        .collect(&extra_flags)
        .await
        .context("collect linter diagnostics")?;

    let report = report(&records, &ctx.workspace_prefix());
    info!(
        warnings = report.verdict.total_warnings,
        errors = report.verdict.total_errors,
        conclusion = report.verdict.conclusion.as_str(),
        "Aggregated linter results"
    );

    if let Some(path) = receipt {
        write_receipt(path, &report)?;
    }

    let check_run_id = match checks {
        Some(api) => {
            let Some(github) = &ctx.github else {
                bail!("missing repository context; cannot publish the check run");
            };
            Some(publish(api, github, &report, Utc::now()).await?)
        }
        None => None,
    };

    let outcome = outcome_for(&report.verdict);
    Ok(PipelineRun {
        report,
        check_run_id,
        outcome,
    })
}

pub fn write_receipt(path: &Path, report: &LintReport) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create dir {}", parent.display()))?;
        }
    }

    let bytes = serde_json::to_vec_pretty(&build_receipt(report)).context("serialize receipt")?;
    std::fs::write(path, bytes).with_context(|| format!("write {}", path.display()))?;
    debug!("Wrote receipt to '{}'", path.display());
    Ok(())
}
