//! Pull request listing across the repositories of a user or organization.

use std::borrow::Cow;

use crate::github::descriptor::RequestDescriptor;
use crate::github::error::GitHubError;
use crate::github::models::PullRequestRecord;
use crate::github::paginator::{collect_json_pages, paginate_all};
use crate::github::scope::Scope;
use crate::github::transport::Transport;

use super::ResourceGateway;
use super::repository::{PullRequestState, RepositoryGateway};

/// Selects the pull requests to fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PullRequestArgs {
    /// Personal account owning the repositories.
    pub user: Option<String>,
    /// Organization owning the repositories.
    pub org: Option<String>,
    /// Repository names to query. When empty, every repository in the scope
    /// is discovered first.
    pub repos: Vec<String>,
    /// State filter sent to GitHub. When unset GitHub applies its own default
    /// (open pull requests only).
    pub state: Option<PullRequestState>,
}

impl PullRequestArgs {
    /// Validates the arguments into a [`Scope`].
    ///
    /// # Errors
    ///
    /// Returns [`GitHubError::InvalidScope`] unless exactly one of user or
    /// organization is set.
    pub fn scope(&self) -> Result<Scope, GitHubError> {
        Scope::from_parts(self.user.as_deref(), self.org.as_deref())
    }
}

/// Fetches pull requests repository by repository.
#[derive(Clone, Copy)]
pub struct PullRequestGateway<'a> {
    transport: &'a dyn Transport,
}

impl<'a> PullRequestGateway<'a> {
    /// Creates a gateway over the given transport.
    #[must_use]
    pub const fn new(transport: &'a dyn Transport) -> Self {
        Self { transport }
    }

    fn descriptor(
        scope: &Scope,
        repository: &str,
        state: Option<PullRequestState>,
    ) -> RequestDescriptor {
        let descriptor = RequestDescriptor::get(scope.pulls_endpoint(repository));
        match state {
            Some(filter) => descriptor.with_query("state", filter.as_str()),
            None => descriptor,
        }
    }

    fn repository_names<'args>(
        &self,
        scope: &Scope,
        args: &'args PullRequestArgs,
    ) -> Result<Cow<'args, [String]>, GitHubError> {
        if !args.repos.is_empty() {
            return Ok(Cow::Borrowed(args.repos.as_slice()));
        }

        let names: Vec<String> = RepositoryGateway::new(self.transport)
            .list(scope)?
            .into_iter()
            .map(|repository| repository.name)
            .collect();
        Ok(Cow::Owned(names))
    }
}

impl ResourceGateway for PullRequestGateway<'_> {
    type Args = PullRequestArgs;
    type Record = PullRequestRecord;

    /// Fetches every pull request of the selected repositories.
    ///
    /// Repositories are processed in order and their pull requests are
    /// concatenated in that order. A failure on any repository discards
    /// everything fetched so far.
    fn fetch(&self, args: &PullRequestArgs) -> Result<Vec<PullRequestRecord>, GitHubError> {
        let scope = args.scope()?;
        let repositories = self.repository_names(&scope, args)?;

        let mut pull_requests = Vec::new();
        for repository in repositories.iter() {
            let descriptor = Self::descriptor(&scope, repository, args.state);
            let before = pull_requests.len();
            paginate_all(
                self.transport,
                &descriptor,
                collect_json_pages("pull requests", &mut pull_requests),
            )?;
            tracing::debug!(
                "{}/{repository}: {} pull request(s)",
                scope.owner(),
                pull_requests.len().saturating_sub(before)
            );
        }

        tracing::info!(
            "fetched {} pull request(s) from {} repositories of {}",
            pull_requests.len(),
            repositories.len(),
            scope.owner()
        );
        Ok(pull_requests)
    }
}

#[cfg(test)]
mod tests;
