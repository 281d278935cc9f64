//! REST client for the GitHub check-runs endpoints.
//!
//! Wraps the two calls lintcheck needs (list check runs for a ref, update a
//! check run) using [`reqwest`]. The [`ChecksApi`] trait is the seam tests
//! substitute.

use async_trait::async_trait;
use lintcheck_types::{CheckRunList, CheckRunUpdate};
use reqwest::Url;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT};
use tracing::debug;

const ACCEPT_GITHUB_JSON: &str = "application/vnd.github+json";
const API_VERSION_HEADER: &str = "x-github-api-version";
const API_VERSION: &str = "2022-11-28";

/// Errors from the check-runs REST layer.
#[derive(Debug, thiserror::Error)]
pub enum ChecksApiError {
    /// The HTTP request itself failed (network, DNS, TLS, decoding).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API answered with a non-2xx status code.
    #[error("GitHub API error ({status}): {body}")]
    Api { status: u16, body: String },

    #[error("invalid API base URL '{0}'")]
    InvalidBaseUrl(String),
}

#[async_trait]
pub trait ChecksApi: Send + Sync {
    async fn list_for_ref(
        &self,
        owner: &str,
        repo: &str,
        git_ref: &str,
    ) -> Result<CheckRunList, ChecksApiError>;

    async fn update(
        &self,
        owner: &str,
        repo: &str,
        check_run_id: u64,
        body: &CheckRunUpdate,
    ) -> Result<(), ChecksApiError>;
}

/// HTTP client for one GitHub (or GitHub Enterprise) API endpoint.
pub struct GithubChecks {
    client: reqwest::Client,
    base_url: Url,
    token: String,
}

impl GithubChecks {
    /// * `api_url` - API root, e.g. `https://api.github.com` or
    ///   `https://ghe.example.com/api/v3`.
    pub fn new(api_url: &str, token: impl Into<String>) -> Result<Self, ChecksApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_GITHUB_JSON));
        headers.insert(API_VERSION_HEADER, HeaderValue::from_static(API_VERSION));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("lintcheck/", env!("CARGO_PKG_VERSION"))),
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Self::with_client(client, api_url, token)
    }

    /// Reuse an existing [`reqwest::Client`]. Default headers are the
    /// caller's responsibility.
    pub fn with_client(
        client: reqwest::Client,
        api_url: &str,
        token: impl Into<String>,
    ) -> Result<Self, ChecksApiError> {
        let base_url =
            Url::parse(api_url).map_err(|_| ChecksApiError::InvalidBaseUrl(api_url.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(ChecksApiError::InvalidBaseUrl(api_url.to_string()));
        }

        Ok(Self {
            client,
            base_url,
            token: token.into(),
        })
    }

    /// Appends percent-encoded path segments to the API root.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url, ChecksApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ChecksApiError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    // ---- private helpers ----

    /// Returns the response unchanged on success, or
    /// [`ChecksApiError::Api`] with the status and body text on failure.
    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, ChecksApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(ChecksApiError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }
}

#[async_trait]
impl ChecksApi for GithubChecks {
    async fn list_for_ref(
        &self,
        owner: &str,
        repo: &str,
        git_ref: &str,
    ) -> Result<CheckRunList, ChecksApiError> {
        let url = self.endpoint(&["repos", owner, repo, "commits", git_ref, "check-runs"])?;
        debug!(%url, "Listing check runs");

        let response = self
            .client
            .get(url)
            .bearer_auth(&self.token)
            .send()
            .await?;

        let response = Self::ensure_success(response).await?;
        Ok(response.json::<CheckRunList>().await?)
    }

    async fn update(
        &self,
        owner: &str,
        repo: &str,
        check_run_id: u64,
        body: &CheckRunUpdate,
    ) -> Result<(), ChecksApiError> {
        let id = check_run_id.to_string();
        let url = self.endpoint(&["repos", owner, repo, "check-runs", &id])?;
        debug!(%url, annotations = body.output.annotations.len(), "Updating check run");

        let response = self
            .client
            .patch(url)
            .bearer_auth(&self.token)
            .json(body)
            .send()
            .await?;

        Self::ensure_success(response).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_encodes_ref_slashes() {
        let api = GithubChecks::new("https://api.github.com", "t").unwrap();
        let url = api
            .endpoint(&["repos", "octo", "demo", "commits", "refs/heads/main", "check-runs"])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.github.com/repos/octo/demo/commits/refs%2Fheads%2Fmain/check-runs"
        );
    }

    #[test]
    fn endpoint_keeps_enterprise_prefix() {
        let api = GithubChecks::new("https://ghe.example.com/api/v3/", "t").unwrap();
        let url = api.endpoint(&["repos", "o", "r", "check-runs", "42"]).unwrap();
        assert_eq!(
            url.as_str(),
            "https://ghe.example.com/api/v3/repos/o/r/check-runs/42"
        );
    }

    #[test]
    fn rejects_unusable_base_url() {
        assert!(matches!(
            GithubChecks::new("not a url", "t"),
            Err(ChecksApiError::InvalidBaseUrl(_))
        ));
        assert!(matches!(
            GithubChecks::new("mailto:octo@example.com", "t"),
            Err(ChecksApiError::InvalidBaseUrl(_))
        ));
    }
}
