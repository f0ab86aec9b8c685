//! Application configuration loaded from CLI, environment, and files.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.gitpr.toml` in the current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `GITPR_USER`, `GITPR_TOKEN`, … or the
//!    legacy `GITHUB_TOKEN` for the token
//! 4. **Command-line arguments** – `--user`/`-u`, `--org`/`-o`, …
//!
//! # Configuration File
//!
//! ```toml
//! base_url = "https://api.github.com"
//! token = "ghp_example"
//! org = "acme"
//! repos = "widgets,gadgets"
//! state = "all"
//! log_level = "debug"
//! ```
//!
//! The resolved configuration is turned into [`ApiSettings`] and
//! [`PullRequestArgs`] here; nothing past this module reads the environment.

use std::env;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::github::settings::DEFAULT_BASE_URL;
use crate::github::{ApiSettings, PullRequestArgs, PullRequestState, Scope};

const DEFAULT_APPLICATION_NAME: &str = "gitpr";
const DEFAULT_LOG_LEVEL: &str = "info";

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Example
///
/// ```no_run
/// use gitpr::GitPrConfig;
/// use ortho_config::OrthoConfig;
///
/// let config = GitPrConfig::load().expect("failed to load configuration");
/// let args = config.pull_request_args().expect("user or org required");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "GITPR",
    discovery(
        dotfile_name = ".gitpr.toml",
        config_file_name = "gitpr.toml",
        app_name = "gitpr"
    )
)]
pub struct GitPrConfig {
    /// GitHub API base address.
    ///
    /// Defaults to `https://api.github.com`; set it for GitHub Enterprise
    /// (e.g. `https://ghe.example.com/api/v3`).
    #[ortho_config(cli_short = 'b')]
    pub base_url: String,

    /// Personal access token sent as `Authorization: token ...`.
    ///
    /// Falls back to `GITHUB_TOKEN` when unset.
    #[ortho_config(cli_short = 't')]
    pub token: Option<String>,

    /// Client identifier sent as the `User-Agent` header.
    #[ortho_config(cli_short = 'a')]
    pub application_name: String,

    /// User whose repositories are queried. Mutually exclusive with `org`.
    #[ortho_config(cli_short = 'u')]
    pub user: Option<String>,

    /// Organization whose repositories are queried. Mutually exclusive with
    /// `user`.
    #[ortho_config(cli_short = 'o')]
    pub org: Option<String>,

    /// Comma-separated repository names. When unset every repository of the
    /// user or organization is queried.
    #[ortho_config(cli_short = 'r')]
    pub repos: Option<String>,

    /// Pull request state requested from GitHub: `open`, `closed`, or `all`.
    #[ortho_config(cli_short = 's')]
    pub state: Option<String>,

    /// Only report pull requests opened by this login.
    #[ortho_config()]
    pub author: Option<String>,

    /// Log filter used when `RUST_LOG` is unset (e.g. `info`, `debug`).
    #[ortho_config(cli_short = 'l')]
    pub log_level: String,

    /// Print every reported pull request as a JSON line.
    #[ortho_config(cli_short = 'p')]
    pub print: bool,
}

impl Default for GitPrConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            token: None,
            application_name: DEFAULT_APPLICATION_NAME.to_owned(),
            user: None,
            org: None,
            repos: None,
            state: None,
            author: None,
            log_level: DEFAULT_LOG_LEVEL.to_owned(),
            print: false,
        }
    }
}

impl GitPrConfig {
    /// Resolves the token from configuration or the legacy `GITHUB_TOKEN`
    /// environment variable.
    #[must_use]
    pub fn resolve_token(&self) -> Option<String> {
        self.token
            .clone()
            .filter(|token| !token.trim().is_empty())
            .or_else(|| env::var("GITHUB_TOKEN").ok())
    }

    /// Connection settings for [`GitHubApi`](crate::github::GitHubApi).
    #[must_use]
    pub fn api_settings(&self) -> ApiSettings {
        ApiSettings::new(self.application_name.as_str())
            .with_base_url(self.base_url.as_str())
            .with_token(self.resolve_token())
    }

    /// Repository names listed in `repos`, trimmed, without empty entries.
    #[must_use]
    pub fn repository_names(&self) -> Vec<String> {
        self.repos
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(ToOwned::to_owned)
            .collect()
    }

    /// Parsed `state` option.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Configuration`] for values other than `open`,
    /// `closed`, or `all`.
    pub fn pull_request_state(&self) -> Result<Option<PullRequestState>, AppError> {
        self.state
            .as_deref()
            .map(str::parse::<PullRequestState>)
            .transpose()
            .map_err(|message| AppError::Configuration { message })
    }

    /// Arguments for the pull request gateway.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Configuration`] when neither or both of `user` and
    /// `org` are set, or when `state` is invalid.
    pub fn pull_request_args(&self) -> Result<PullRequestArgs, AppError> {
        Scope::from_parts(self.user.as_deref(), self.org.as_deref()).map_err(|error| {
            AppError::Configuration {
                message: format!("{error} (use --user or --org)"),
            }
        })?;

        Ok(PullRequestArgs {
            user: self.user.clone(),
            org: self.org.clone(),
            repos: self.repository_names(),
            state: self.pull_request_state()?,
        })
    }
}
