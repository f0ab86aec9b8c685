//! Resolved settings shared by every client built from one [`GitHubApi`].
//!
//! [`GitHubApi`]: super::GitHubApi

use std::fmt;

use super::error::GitHubError;

/// Base address used when none is configured.
pub const DEFAULT_BASE_URL: &str = "https://api.github.com";

/// GitHub API generation to talk to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ApiVersion {
    /// REST API v3.
    #[default]
    V3,
    /// GraphQL API v4. Not implemented.
    V4,
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::V3 => f.write_str("v3"),
            Self::V4 => f.write_str("v4"),
        }
    }
}

/// Fully resolved connection settings.
///
/// Built once at startup and passed into [`GitHubApi`](super::GitHubApi);
/// nothing below this type reads the environment.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiSettings {
    base_url: String,
    token: Option<String>,
    application_name: String,
    version: ApiVersion,
}

impl ApiSettings {
    /// Creates settings for the given client identifier with the default
    /// base address and no credential.
    #[must_use]
    pub fn new(application_name: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            token: None,
            application_name: application_name.into(),
            version: ApiVersion::default(),
        }
    }

    /// Sets the API base address. An empty value keeps the default.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let value: String = base_url.into();
        if !value.trim().is_empty() {
            self.base_url = value;
        }
        self
    }

    /// Sets the credential sent as `Authorization: token ...`. An empty value
    /// clears it.
    #[must_use]
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|value| !value.trim().is_empty());
        self
    }

    /// Selects the API version.
    #[must_use]
    pub const fn with_version(mut self, version: ApiVersion) -> Self {
        self.version = version;
        self
    }

    /// Checks that the settings describe a usable client.
    ///
    /// # Errors
    ///
    /// Returns [`GitHubError::MissingApplicationName`] when no client
    /// identifier is set and [`GitHubError::UnsupportedVersion`] for any
    /// version other than v3.
    pub fn validate(&self) -> Result<(), GitHubError> {
        if self.version != ApiVersion::V3 {
            return Err(GitHubError::UnsupportedVersion {
                version: self.version.to_string(),
            });
        }
        if self.application_name.trim().is_empty() {
            return Err(GitHubError::MissingApplicationName);
        }
        Ok(())
    }

    /// API base address.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Credential, if any.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Client identifier sent as the user agent.
    #[must_use]
    pub fn application_name(&self) -> &str {
        &self.application_name
    }

    /// Selected API version.
    #[must_use]
    pub const fn version(&self) -> ApiVersion {
        self.version
    }
}

impl fmt::Debug for ApiSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiSettings")
            .field("base_url", &self.base_url)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("application_name", &self.application_name)
            .field("version", &self.version)
            .finish()
    }
}
