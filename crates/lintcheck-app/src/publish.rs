use chrono::{DateTime, SecondsFormat, Utc};
use lintcheck_core::check_run_update;
use lintcheck_types::LintReport;
use tracing::info;

use crate::checks::{ChecksApi, ChecksApiError};
use crate::context::GithubContext;

#[derive(Debug, thiserror::Error)]
pub enum PublishError {
    #[error("failed to list check runs for '{git_ref}': {source}")]
    Lookup {
        git_ref: String,
        source: ChecksApiError,
    },
    #[error("no check run found for '{git_ref}'")]
    NoCheckRun { git_ref: String },
    #[error("failed to update check run {check_run_id}: {source}")]
    Update {
        check_run_id: u64,
        source: ChecksApiError,
    },
}

/// Moves the current check run to its terminal state.
///
/// The check run is the first one listed for the context's ref. Exactly one
/// update is issued; nothing is retried. Returns the updated check run id.
pub async fn publish(
    api: &dyn ChecksApi,
    github: &GithubContext,
    report: &LintReport,
    completed_at: DateTime<Utc>,
) -> Result<u64, PublishError> {
    let list = api
        .list_for_ref(&github.owner, &github.repo, &github.git_ref)
        .await
        .map_err(|source| PublishError::Lookup {
            git_ref: github.git_ref.clone(),
            source,
        })?;

    let check_run_id = list
        .check_runs
        .first()
        .map(|run| run.id)
        .ok_or_else(|| PublishError::NoCheckRun {
            git_ref: github.git_ref.clone(),
        })?;

    let completed_at = completed_at.to_rfc3339_opts(SecondsFormat::Millis, true);
    let body = check_run_update(&github.sha, &completed_at, &github.action, report);

    api.update(&github.owner, &github.repo, check_run_id, &body)
        .await
        .map_err(|source| PublishError::Update {
            check_run_id,
            source,
        })?;

    info!(
        check_run_id,
        conclusion = report.verdict.conclusion.as_str(),
        annotations = report.annotations.len(),
        "Check run completed"
    );
    Ok(check_run_id)
}
