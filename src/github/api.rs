//! Entry point that owns the transport and hands out gateways.

use super::error::GitHubError;
use super::gateway::{PullRequestGateway, RepositoryGateway};
use super::settings::ApiSettings;
use super::transport::{HttpTransport, Transport};

/// GitHub API handle.
///
/// Owns one transport configured from [`ApiSettings`]; every gateway it
/// returns shares that transport.
///
/// # Example
///
/// ```no_run
/// use gitpr::github::{ApiSettings, GitHubApi, PullRequestArgs, ResourceGateway};
///
/// let api = GitHubApi::connect(ApiSettings::new("gitpr")).expect("settings are valid");
/// let args = PullRequestArgs {
///     user: Some("octocat".to_owned()),
///     ..PullRequestArgs::default()
/// };
/// let pull_requests = api.pull_requests().fetch(&args).expect("fetch failed");
/// println!("{} pull requests", pull_requests.len());
/// ```
#[derive(Debug)]
pub struct GitHubApi<T = HttpTransport> {
    settings: ApiSettings,
    transport: T,
}

impl GitHubApi<HttpTransport> {
    /// Validates the settings and builds an HTTP transport from them.
    ///
    /// # Errors
    ///
    /// Returns the validation error from [`ApiSettings::validate`] or the
    /// construction error from [`HttpTransport::new`].
    pub fn connect(settings: ApiSettings) -> Result<Self, GitHubError> {
        settings.validate()?;
        let transport = HttpTransport::new(&settings)?;
        Ok(Self {
            settings,
            transport,
        })
    }
}

impl<T: Transport> GitHubApi<T> {
    /// Wraps an existing transport.
    ///
    /// # Errors
    ///
    /// Returns the validation error from [`ApiSettings::validate`].
    pub fn with_transport(settings: ApiSettings, transport: T) -> Result<Self, GitHubError> {
        settings.validate()?;
        Ok(Self {
            settings,
            transport,
        })
    }

    /// Repository listing gateway.
    #[must_use]
    pub fn repositories(&self) -> RepositoryGateway<'_> {
        RepositoryGateway::new(&self.transport)
    }

    /// Pull request listing gateway.
    #[must_use]
    pub fn pull_requests(&self) -> PullRequestGateway<'_> {
        PullRequestGateway::new(&self.transport)
    }

    /// Settings the handle was built from.
    #[must_use]
    pub const fn settings(&self) -> &ApiSettings {
        &self.settings
    }
}
