//! Test helpers for constructing record fixtures.
//!
//! # Examples
//!
//! ```
//! use gitpr::github::models::test_support::pull_request;
//!
//! let record = pull_request(7, "octo/hello", "open");
//! assert_eq!(record.id, 7);
//! assert_eq!(record.repository_full_name(), Some("octo/hello"));
//! ```

use super::{CommitReference, PullRequestRecord, RepositoryRecord, UserRecord};

/// Builds a pull request with an id, target repository, and state.
///
/// The title is derived from the id so records are easy to tell apart.
#[must_use]
pub fn pull_request(id: u64, repository: &str, state: &str) -> PullRequestRecord {
    PullRequestRecord {
        id,
        number: id,
        state: state.to_owned(),
        title: format!("Pull request {id}"),
        base: CommitReference {
            ref_name: "main".to_owned(),
            repo: Some(repository_named(repository)),
            ..CommitReference::default()
        },
        ..PullRequestRecord::default()
    }
}

/// Builds a repository from an `owner/name` string.
///
/// A value without a slash is used as both name and full name.
#[must_use]
pub fn repository_named(full_name: &str) -> RepositoryRecord {
    let (owner, name) = full_name.split_once('/').unwrap_or(("", full_name));
    RepositoryRecord {
        name: name.to_owned(),
        full_name: full_name.to_owned(),
        owner: Some(UserRecord {
            login: owner.to_owned(),
            ..UserRecord::default()
        }),
        ..RepositoryRecord::default()
    }
}

/// Renders pull requests as the JSON array body GitHub would return.
///
/// # Panics
///
/// Panics if the records cannot be serialised.
#[must_use]
pub fn pull_requests_json(records: &[PullRequestRecord]) -> String {
    serde_json::to_string(records)
        .unwrap_or_else(|error| panic!("fixture should serialise: {error}"))
}

/// Renders repositories as the JSON array body GitHub would return.
///
/// # Panics
///
/// Panics if the records cannot be serialised.
#[must_use]
pub fn repositories_json(records: &[RepositoryRecord]) -> String {
    serde_json::to_string(records)
        .unwrap_or_else(|error| panic!("fixture should serialise: {error}"))
}
