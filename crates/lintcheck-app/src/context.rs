use std::path::{Path, PathBuf};

pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Ambient inputs of one run, resolved once up front.
///
/// `github` is `None` when nothing is published (`--dry-run`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionContext {
    /// Project root; the linter runs here and its paths are relativized against it.
    pub workspace: PathBuf,
    pub linter: PathBuf,
    /// Appended after the reporter and manifest-derived flags.
    pub linter_args: Vec<String>,
    pub github: Option<GithubContext>,
}

impl ActionContext {
    /// Default linter location: the project's locally installed `xo`.
    pub fn default_linter(workspace: &Path) -> PathBuf {
        workspace.join("node_modules").join(".bin").join("xo")
    }

    pub fn workspace_prefix(&self) -> String {
        self.workspace.to_string_lossy().into_owned()
    }
}

/// Trigger metadata and credentials for the check-runs API.
#[derive(Clone, PartialEq, Eq)]
pub struct GithubContext {
    pub token: String,
    pub owner: String,
    pub repo: String,
    pub sha: String,
    pub git_ref: String,
    /// Name of the triggering action; used as the check-run output title.
    pub action: String,
    pub api_url: String,
}

impl std::fmt::Debug for GithubContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GithubContext")
            .field("token", &"<redacted>")
            .field("owner", &self.owner)
            .field("repo", &self.repo)
            .field("sha", &self.sha)
            .field("git_ref", &self.git_ref)
            .field("action", &self.action)
            .field("api_url", &self.api_url)
            .finish()
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("invalid repository '{0}': expected 'owner/repo'")]
pub struct RepositoryParseError(pub String);

/// Splits `owner/repo` (the `GITHUB_REPOSITORY` format).
pub fn parse_repository(value: &str) -> Result<(String, String), RepositoryParseError> {
    let (owner, repo) = value
        .split_once('/')
        .ok_or_else(|| RepositoryParseError(value.to_string()))?;

    if owner.is_empty() || repo.is_empty() || repo.contains('/') {
        return Err(RepositoryParseError(value.to_string()));
    }

    Ok((owner.to_string(), repo.to_string()))
}
