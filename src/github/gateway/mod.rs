//! Resource gateways built on the paginator.
//!
//! Each gateway turns validated arguments into one or more paginated
//! requests and decodes the pages into records. Gateways borrow the transport
//! owned by [`GitHubApi`](crate::github::GitHubApi).

mod pull_request;
mod repository;

pub use pull_request::{PullRequestArgs, PullRequestGateway};
pub use repository::{PullRequestState, RepositoryArgs, RepositoryGateway};

use crate::github::error::GitHubError;

/// Shared capability of the resource gateways.
pub trait ResourceGateway {
    /// Arguments selecting what to fetch.
    type Args;
    /// Record type produced.
    type Record;

    /// Fetches every matching record across all pages.
    ///
    /// # Errors
    ///
    /// Returns [`GitHubError::InvalidScope`] before any request when the
    /// arguments do not name exactly one of user or organization, and the
    /// first transport, pagination, or decode error otherwise.
    fn fetch(&self, args: &Self::Args) -> Result<Vec<Self::Record>, GitHubError>;
}
