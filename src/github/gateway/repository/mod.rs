//! Repository listing for a user or organization.

use crate::github::descriptor::RequestDescriptor;
use crate::github::error::GitHubError;
use crate::github::models::RepositoryRecord;
use crate::github::paginator::{collect_json_pages, paginate_all};
use crate::github::scope::Scope;
use crate::github::transport::Transport;

use super::ResourceGateway;

mod types;

pub use types::{PullRequestState, RepositoryArgs};

/// Lists every repository owned by a user or organization.
#[derive(Clone, Copy)]
pub struct RepositoryGateway<'a> {
    transport: &'a dyn Transport,
}

impl<'a> RepositoryGateway<'a> {
    /// Creates a gateway over the given transport.
    #[must_use]
    pub const fn new(transport: &'a dyn Transport) -> Self {
        Self { transport }
    }

    /// Lists every repository in an already validated scope.
    ///
    /// # Errors
    ///
    /// Returns the first transport, pagination, or decode error.
    pub fn list(&self, scope: &Scope) -> Result<Vec<RepositoryRecord>, GitHubError> {
        let descriptor = RequestDescriptor::get(scope.repositories_endpoint());
        let mut repositories = Vec::new();

        paginate_all(
            self.transport,
            &descriptor,
            collect_json_pages("repositories", &mut repositories),
        )?;

        tracing::info!(
            "found {} repositories for {}",
            repositories.len(),
            scope.owner()
        );
        Ok(repositories)
    }
}

impl ResourceGateway for RepositoryGateway<'_> {
    type Args = RepositoryArgs;
    type Record = RepositoryRecord;

    fn fetch(&self, args: &RepositoryArgs) -> Result<Vec<RepositoryRecord>, GitHubError> {
        let scope = args.scope()?;
        self.list(&scope)
    }
}
