//! Gitpr library crate for fetching GitHub pull requests.
//!
//! The library lists repositories and pull requests for a user or
//! organization through GitHub's paginated REST API, following the `Link`
//! header across every page, and keeps the results in an indexed
//! [`PullRequestStore`].

pub mod config;
pub mod error;
pub mod github;
pub mod report;
pub mod store;

pub use config::GitPrConfig;
pub use error::AppError;
pub use github::{
    ApiSettings, GitHubApi, GitHubError, PullRequestArgs, PullRequestRecord, RepositoryArgs,
    RequestDescriptor, Transport,
};
pub use store::{InMemoryStore, PullRequestKey, PullRequestStore, StoreError};
