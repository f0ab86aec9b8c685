//! Gitpr CLI entrypoint for pull request fetching.

use std::io::{self, Write};
use std::process::ExitCode;

use gitpr::report::{load_pull_requests, select_pull_requests, write_json_lines, write_summary};
use gitpr::{AppError, GitHubApi, GitPrConfig, InMemoryStore, PullRequestStore};
use ortho_config::OrthoConfig;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), AppError> {
    let config = load_config()?;
    init_logging(&config.log_level)?;

    let args = config.pull_request_args()?;
    let api = GitHubApi::connect(config.api_settings())?;

    let mut store = InMemoryStore::new();
    let fetched = load_pull_requests(&api, &args, &mut store)?;
    tracing::info!("stored {fetched} pull request(s)");

    let selected = select_pull_requests(&store, config.author.as_deref())?;
    let mut stdout = io::stdout().lock();
    write_summary(&mut stdout, &selected, store.len())?;
    if config.print {
        write_json_lines(&mut stdout, &selected)?;
    }
    Ok(())
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`AppError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<GitPrConfig, AppError> {
    GitPrConfig::load().map_err(|error| AppError::Configuration {
        message: error.to_string(),
    })
}

/// Installs a stderr subscriber filtered by `RUST_LOG`, or by `level` when
/// `RUST_LOG` is unset. An unparsable level falls back to `info`.
///
/// # Errors
///
/// Returns [`AppError::Configuration`] when a global subscriber is already
/// installed.
fn init_logging(level: &str) -> Result<(), AppError> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .try_init()
        .map_err(|error| AppError::Configuration {
            message: format!("failed to initialise logging: {error}"),
        })
}
