use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing::{debug, info};

use lintcheck_app::{
    ActionContext, ChecksApi, DEFAULT_API_URL, GithubChecks, GithubContext, parse_repository,
    run_pipeline,
};
use lintcheck_core::{Outcome, error_command, render_annotation_commands, warning_command};

#[derive(Parser, Debug)]
#[command(name = "lintcheck")]
#[command(about = "Run the project linter and report its findings on the current check run", long_about = None)]
struct Cli {
    /// Enable verbose (info-level) logging to stderr.
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    /// Enable debug-level logging to stderr.
    #[arg(long, global = true)]
    debug: bool,

    /// Project root. The linter runs here and reported paths are made relative to it.
    #[arg(long, env = "GITHUB_WORKSPACE", default_value = ".")]
    workspace: PathBuf,

    /// Linter binary. Defaults to <workspace>/node_modules/.bin/xo.
    ///
    /// Relative paths are resolved against the workspace; bare names are looked up on PATH.
    #[arg(long, value_name = "PATH")]
    linter: Option<PathBuf>,

    /// Extra argument appended to the linter command line. Repeatable.
    #[arg(long = "linter-arg", value_name = "ARG", action = clap::ArgAction::Append, allow_hyphen_values = true)]
    linter_args: Vec<String>,

    /// Print annotations as workflow commands instead of updating the check run.
    #[arg(long)]
    dry_run: bool,

    /// Write a JSON receipt of the verdict and annotations.
    #[arg(long, value_name = "PATH")]
    out: Option<PathBuf>,

    /// Token for the check-runs API.
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Repository as `owner/repo`.
    #[arg(long, env = "GITHUB_REPOSITORY")]
    repository: Option<String>,

    /// Commit SHA the check run belongs to.
    #[arg(long, env = "GITHUB_SHA")]
    sha: Option<String>,

    /// Ref whose check runs are listed.
    #[arg(long = "ref", env = "GITHUB_REF")]
    git_ref: Option<String>,

    /// Name of the triggering action; used as the check-run title.
    #[arg(long, env = "GITHUB_ACTION")]
    action: Option<String>,

    #[arg(long, env = "GITHUB_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,
}

#[cfg(not(test))]
#[tokio::main]
async fn main() -> ExitCode {
    let outcome = match run_with_args(std::env::args_os()).await {
        Ok(outcome) => outcome,
        Err(err) => Outcome::Failed(format!("{err:#}")),
    };
    emit_outcome(&outcome)
}

async fn run_with_args<I, T>(args: I) -> Result<Outcome>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = Cli::parse_from(args);

    init_logging(cli.verbose, cli.debug);

    let ctx = action_context(&cli)?;
    debug!(?ctx, "Resolved action context");

    let client = match &ctx.github {
        Some(github) if !cli.dry_run => Some(
            GithubChecks::new(&github.api_url, github.token.clone())
                .context("create check-runs client")?,
        ),
        _ => None,
    };

    let run = run_pipeline(
        &ctx,
        client.as_ref().map(|c| c as &dyn ChecksApi),
        cli.out.as_deref(),
    )
    .await?;

    if cli.dry_run {
        for line in render_annotation_commands(&run.report.annotations) {
            println!("{line}");
        }
    }

    if let Some(id) = run.check_run_id {
        info!(check_run_id = id, "Published check run");
    }

    Ok(run.outcome)
}

/// Prints the process-level notice and maps the outcome to an exit code.
fn emit_outcome(outcome: &Outcome) -> ExitCode {
    match outcome {
        Outcome::Clean => {}
        Outcome::Warned(msg) => println!("{}", warning_command(msg)),
        Outcome::Failed(msg) => println!("{}", error_command(msg)),
    }
    ExitCode::from(outcome.exit_code())
}

fn action_context(cli: &Cli) -> Result<ActionContext> {
    let workspace = cli
        .workspace
        .canonicalize()
        .with_context(|| format!("resolve workspace '{}'", cli.workspace.display()))?;

    let linter = resolve_linter(&workspace, cli.linter.as_deref());

    let github = if cli.dry_run {
        None
    } else {
        Some(github_context(cli)?)
    };

    Ok(ActionContext {
        workspace,
        linter,
        linter_args: cli.linter_args.clone(),
        github,
    })
}

fn resolve_linter(workspace: &Path, linter: Option<&Path>) -> PathBuf {
    match linter {
        None => ActionContext::default_linter(workspace),
        Some(p) if p.is_absolute() || p.components().count() == 1 => p.to_path_buf(),
        Some(p) => workspace.join(p),
    }
}

fn github_context(cli: &Cli) -> Result<GithubContext> {
    fn required(value: &Option<String>, flag: &str, env: &str) -> Result<String> {
        match value.as_deref() {
            Some(v) if !v.trim().is_empty() => Ok(v.to_string()),
            _ => bail!("missing {flag} (or {env}); pass --dry-run to skip publishing"),
        }
    }

    let token = required(&cli.token, "--token", "GITHUB_TOKEN")?;
    let repository = required(&cli.repository, "--repository", "GITHUB_REPOSITORY")?;
    let (owner, repo) = parse_repository(&repository)?;

    Ok(GithubContext {
        token,
        owner,
        repo,
        sha: required(&cli.sha, "--sha", "GITHUB_SHA")?,
        git_ref: required(&cli.git_ref, "--ref", "GITHUB_REF")?,
        action: required(&cli.action, "--action", "GITHUB_ACTION")?,
        api_url: cli.api_url.clone(),
    })
}

/// Initialize tracing/logging based on CLI flags.
///
/// Logs go to stderr; stdout is reserved for workflow commands.
fn init_logging(verbose: bool, debug: bool) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let level = if debug {
        "debug"
    } else if verbose {
        "info"
    } else {
        "warn"
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    debug!("Logging initialized at level: {}", level);
}
