//! Application layer: runs the linter, aggregates, and publishes the check run.

mod checks;
mod collector;
mod context;
mod manifest;
mod pipeline;
mod publish;

pub use checks::{ChecksApi, ChecksApiError, GithubChecks};
pub use collector::{CollectError, Collector, REPORTER_FLAG, decode_output};
pub use context::{
    ActionContext, DEFAULT_API_URL, GithubContext, RepositoryParseError, parse_repository,
};
pub use manifest::{MANIFEST_FILE, ManifestError, PRETTIER_FLAG, ProjectManifest};
pub use pipeline::{PipelineRun, run_pipeline, write_receipt};
pub use publish::{PublishError, publish};
