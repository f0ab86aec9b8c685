//! Records decoded from GitHub REST responses.
//!
//! Only the fields the crate reads or presents are modelled; unknown fields
//! are ignored and absent ones fall back to their defaults, so partial
//! payloads still decode.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

/// Timestamp as reported by GitHub (RFC 3339, UTC).
pub type Timestamp = DateTime<Utc>;

/// Account that owns, opened, or is assigned to something.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserRecord {
    /// Account identifier.
    pub id: u64,
    /// Login name.
    pub login: String,
    /// Account kind (`User`, `Organization`, `Bot`).
    #[serde(rename = "type")]
    pub kind: String,
    /// Profile page.
    pub html_url: String,
    /// Whether the account is a site administrator.
    pub site_admin: bool,
}

/// Milestone attached to a pull request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MilestoneRecord {
    /// Milestone identifier.
    pub id: u64,
    /// Milestone number within the repository.
    pub number: u64,
    /// Title.
    pub title: String,
    /// Description, if any.
    pub description: Option<String>,
    /// `open` or `closed`.
    pub state: String,
    /// Account that created the milestone.
    pub creator: Option<UserRecord>,
    /// Open issue count.
    pub open_issues: u64,
    /// Closed issue count.
    pub closed_issues: u64,
    /// Creation time.
    pub created_at: Option<Timestamp>,
    /// Last update time.
    pub updated_at: Option<Timestamp>,
    /// Closing time.
    pub closed_at: Option<Timestamp>,
    /// Due date.
    pub due_on: Option<Timestamp>,
}

/// Permissions the authenticated account holds on a repository.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RepositoryPermissions {
    /// Administrative access.
    pub admin: bool,
    /// Write access.
    pub push: bool,
    /// Read access.
    pub pull: bool,
}

/// Repository listing entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RepositoryRecord {
    /// Repository identifier.
    pub id: u64,
    /// Owning account.
    pub owner: Option<UserRecord>,
    /// Short name (e.g. `hello`).
    pub name: String,
    /// `owner/name`.
    pub full_name: String,
    /// Description, if any.
    pub description: Option<String>,
    /// Whether the repository is private.
    pub private: bool,
    /// Whether the repository is a fork.
    pub fork: bool,
    /// Whether the repository is archived.
    pub archived: bool,
    /// Web page.
    pub html_url: String,
    /// API address.
    pub url: String,
    /// Homepage, if any.
    pub homepage: Option<String>,
    /// Primary language, if detected.
    pub language: Option<String>,
    /// Default branch name.
    pub default_branch: String,
    /// Topics.
    pub topics: Vec<String>,
    /// Size in kilobytes.
    pub size: u64,
    /// Fork count.
    pub forks_count: u64,
    /// Star count.
    pub stargazers_count: u64,
    /// Watcher count.
    pub watchers_count: u64,
    /// Open issue count.
    pub open_issues_count: u64,
    /// Issues are enabled.
    pub has_issues: bool,
    /// Wiki is enabled.
    pub has_wiki: bool,
    /// Pages are enabled.
    pub has_pages: bool,
    /// Permissions of the calling account, when authenticated.
    pub permissions: Option<RepositoryPermissions>,
    /// Rebase merging is allowed.
    pub allow_rebase_merge: Option<bool>,
    /// Squash merging is allowed.
    pub allow_squash_merge: Option<bool>,
    /// Merge commits are allowed.
    pub allow_merge_commit: Option<bool>,
    /// Last push time.
    pub pushed_at: Option<Timestamp>,
    /// Creation time.
    pub created_at: Option<Timestamp>,
    /// Last update time.
    pub updated_at: Option<Timestamp>,
}

/// Branch tip a pull request is based on or merges from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommitReference {
    /// `owner:branch` label.
    pub label: String,
    /// Branch name.
    #[serde(rename = "ref")]
    pub ref_name: String,
    /// Commit SHA.
    pub sha: String,
    /// Owner of the branch.
    pub user: Option<UserRecord>,
    /// Repository holding the branch; absent when a fork was deleted.
    pub repo: Option<RepositoryRecord>,
}

/// Pull request listing entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PullRequestRecord {
    /// Pull request identifier.
    pub id: u64,
    /// Number within the repository.
    pub number: u64,
    /// `open` or `closed`.
    pub state: String,
    /// Title.
    pub title: String,
    /// Description, if any.
    pub body: Option<String>,
    /// Whether the conversation is locked.
    pub locked: bool,
    /// Whether the pull request is a draft.
    pub draft: bool,
    /// Web page.
    pub html_url: String,
    /// API address.
    pub url: String,
    /// Diff download address.
    pub diff_url: String,
    /// Patch download address.
    pub patch_url: String,
    /// Author.
    pub user: Option<UserRecord>,
    /// Assignee, if any.
    pub assignee: Option<UserRecord>,
    /// Milestone, if any.
    pub milestone: Option<MilestoneRecord>,
    /// Creation time.
    pub created_at: Option<Timestamp>,
    /// Last update time.
    pub updated_at: Option<Timestamp>,
    /// Closing time.
    pub closed_at: Option<Timestamp>,
    /// Merge time.
    pub merged_at: Option<Timestamp>,
    /// Merge commit SHA, if any.
    pub merge_commit_sha: Option<String>,
    /// Source branch.
    pub head: CommitReference,
    /// Target branch.
    pub base: CommitReference,
}

impl PullRequestRecord {
    /// Full name of the repository the pull request targets, if reported.
    #[must_use]
    pub fn repository_full_name(&self) -> Option<&str> {
        self.base
            .repo
            .as_ref()
            .map(|repo| repo.full_name.as_str())
            .filter(|name| !name.is_empty())
    }

    /// Author login, if reported.
    #[must_use]
    pub fn author(&self) -> Option<&str> {
        self.user.as_ref().map(|user| user.login.as_str())
    }

    /// Returns true once the pull request has been merged.
    #[must_use]
    pub const fn is_merged(&self) -> bool {
        self.merged_at.is_some()
    }
}
