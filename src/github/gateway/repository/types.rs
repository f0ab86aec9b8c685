//! Argument types for repository and pull request listing.

use std::fmt;
use std::str::FromStr;

use crate::github::error::GitHubError;
use crate::github::scope::Scope;

/// Pull request state filter for listing operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PullRequestState {
    /// Only open pull requests.
    #[default]
    Open,
    /// Only closed pull requests.
    Closed,
    /// All pull requests regardless of state.
    All,
}

impl PullRequestState {
    /// Returns the API parameter value for this state.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
            Self::All => "all",
        }
    }
}

impl fmt::Display for PullRequestState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PullRequestState {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "open" => Ok(Self::Open),
            "closed" => Ok(Self::Closed),
            "all" => Ok(Self::All),
            other => Err(format!(
                "unknown pull request state `{other}` (expected open, closed, or all)"
            )),
        }
    }
}

/// Selects the account whose repositories are listed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepositoryArgs {
    /// Personal account name.
    pub user: Option<String>,
    /// Organization name.
    pub org: Option<String>,
}

impl RepositoryArgs {
    /// Arguments for a user's repositories.
    #[must_use]
    pub fn for_user(user: impl Into<String>) -> Self {
        Self {
            user: Some(user.into()),
            org: None,
        }
    }

    /// Arguments for an organization's repositories.
    #[must_use]
    pub fn for_org(org: impl Into<String>) -> Self {
        Self {
            user: None,
            org: Some(org.into()),
        }
    }

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
