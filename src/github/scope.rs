//! Account scope used to address a collection of repositories.

use super::error::GitHubError;

/// The user or organization whose repositories are listed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scope {
    /// A personal account.
    User(String),
    /// An organization account.
    Organization(String),
}

impl Scope {
    /// Builds a scope from optional user and organization names.
    ///
    /// Blank names count as absent.
    ///
    /// # Errors
    ///
    /// Returns [`GitHubError::InvalidScope`] unless exactly one of the two is
    /// present.
    pub fn from_parts(user: Option<&str>, org: Option<&str>) -> Result<Self, GitHubError> {
        let user_name = user.map(str::trim).filter(|name| !name.is_empty());
        let org_name = org.map(str::trim).filter(|name| !name.is_empty());
        match (user_name, org_name) {
            (Some(name), None) => Ok(Self::User(name.to_owned())),
            (None, Some(name)) => Ok(Self::Organization(name.to_owned())),
            _ => Err(GitHubError::InvalidScope),
        }
    }

    /// Account name, used as the owner of every repository in the scope.
    #[must_use]
    pub fn owner(&self) -> &str {
        match self {
            Self::User(name) | Self::Organization(name) => name,
        }
    }

    /// Endpoint listing the scope's repositories.
    #[must_use]
    pub fn repositories_endpoint(&self) -> String {
        match self {
            Self::User(name) => format!("/users/{name}/repos"),
            Self::Organization(name) => format!("/orgs/{name}/repos"),
        }
    }

    /// Endpoint listing pull requests of one repository in the scope.
    #[must_use]
    pub fn pulls_endpoint(&self, repository: &str) -> String {
        format!("/repos/{}/{repository}/pulls", self.owner())
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::Scope;
    use crate::github::error::GitHubError;

    #[rstest]
    #[case::user_only(Some("octo"), None, Ok(Scope::User("octo".to_owned())))]
    #[case::org_only(None, Some("acme"), Ok(Scope::Organization("acme".to_owned())))]
    #[case::blank_org_ignored(Some("octo"), Some("  "), Ok(Scope::User("octo".to_owned())))]
    #[case::both(Some("octo"), Some("acme"), Err(GitHubError::InvalidScope))]
    #[case::neither(None, None, Err(GitHubError::InvalidScope))]
    #[case::both_blank(Some(""), Some(""), Err(GitHubError::InvalidScope))]
    fn from_parts_requires_exactly_one(
        #[case] user: Option<&str>,
        #[case] org: Option<&str>,
        #[case] expected: Result<Scope, GitHubError>,
    ) {
        assert_eq!(Scope::from_parts(user, org), expected);
    }

    #[rstest]
    #[case::user(Scope::User("octo".to_owned()), "/users/octo/repos")]
    #[case::org(Scope::Organization("acme".to_owned()), "/orgs/acme/repos")]
    fn repositories_endpoint_follows_scope(#[case] scope: Scope, #[case] expected: &str) {
        assert_eq!(scope.repositories_endpoint(), expected);
    }

    #[test]
    fn pulls_endpoint_uses_scope_owner() {
        let scope = Scope::Organization("acme".to_owned());

        assert_eq!(scope.pulls_endpoint("widgets"), "/repos/acme/widgets/pulls");
    }
}
