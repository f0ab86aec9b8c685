//! Single-request HTTP transport for the GitHub REST API.
//!
//! The transport turns a [`RequestDescriptor`] into one HTTP request and hands
//! back the response untouched. Status handling, body decoding, and paging are
//! left to the caller.

use std::fmt;
use std::io::{Cursor, Read};

use http::StatusCode;
use http::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT};
use reqwest::blocking::Client;
use url::Url;

use super::descriptor::RequestDescriptor;
use super::error::GitHubError;
use super::settings::ApiSettings;

const ACCEPT_V3: &str = "application/vnd.github.v3+json";

/// Raw response returned by a [`Transport`].
///
/// The body is an unread stream; whoever receives the response owns it.
pub struct ApiResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: Box<dyn Read + Send>,
}

impl ApiResponse {
    /// Creates a response from its parts.
    #[must_use]
    pub fn new(status: StatusCode, headers: HeaderMap, body: Box<dyn Read + Send>) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// Creates a response with an in-memory body.
    #[must_use]
    pub fn from_bytes(status: StatusCode, headers: HeaderMap, body: impl Into<Vec<u8>>) -> Self {
        Self::new(status, headers, Box::new(Cursor::new(body.into())))
    }

    /// HTTP status code.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    /// Response headers.
    #[must_use]
    pub const fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Hands over the body stream.
    #[must_use]
    pub fn into_body(self) -> Box<dyn Read + Send> {
        self.body
    }
}

impl fmt::Debug for ApiResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiResponse")
            .field("status", &self.status)
            .field("headers", &self.headers)
            .finish_non_exhaustive()
    }
}

/// Issues one request per call.
#[cfg_attr(test, mockall::automock)]
pub trait Transport: Send + Sync {
    /// Sends the request described by `descriptor`.
    ///
    /// # Errors
    ///
    /// Returns [`GitHubError::InvalidUrl`] when the target address cannot be
    /// built and [`GitHubError::Network`] when the request cannot be sent.
    fn issue(&self, descriptor: &RequestDescriptor) -> Result<ApiResponse, GitHubError>;
}

/// Blocking `reqwest` transport bound to one API base address.
#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: Url,
    token: Option<String>,
    user_agent: HeaderValue,
}

impl HttpTransport {
    /// Builds a transport from validated settings.
    ///
    /// # Errors
    ///
    /// Returns [`GitHubError::InvalidUrl`] when the base address does not
    /// parse, [`GitHubError::MissingApplicationName`] when the application
    /// name is not a valid header value, or [`GitHubError::Network`] when the
    /// HTTP client cannot be configured.
    pub fn new(settings: &ApiSettings) -> Result<Self, GitHubError> {
        let base_url = Url::parse(settings.base_url())
            .map_err(|error| GitHubError::InvalidUrl(format!("{}: {error}", settings.base_url())))?;
        let user_agent = HeaderValue::from_str(settings.application_name())
            .map_err(|_| GitHubError::MissingApplicationName)?;
        let client = Client::builder()
            .build()
            .map_err(|error| GitHubError::Network {
                message: format!("failed to configure HTTP client: {error}"),
            })?;

        Ok(Self {
            client,
            base_url,
            token: settings.token().map(ToOwned::to_owned),
            user_agent,
        })
    }

    /// Resolves the absolute address for a descriptor.
    ///
    /// The endpoint is appended to the base address path and the query
    /// parameters are encoded in key order.
    ///
    /// # Errors
    ///
    /// Returns [`GitHubError::InvalidUrl`] when the combined address does not
    /// parse.
    pub fn target_url(&self, descriptor: &RequestDescriptor) -> Result<Url, GitHubError> {
        let mut url = self.base_url.clone();
        let path = format!(
            "{}{}",
            url.path().trim_end_matches('/'),
            descriptor.endpoint()
        );
        url.set_path(&path);
        url.set_query(None);
        if !descriptor.query().is_empty() {
            url.query_pairs_mut().extend_pairs(descriptor.query());
        }
        if url.cannot_be_a_base() {
            return Err(GitHubError::InvalidUrl(url.to_string()));
        }
        Ok(url)
    }
}

impl fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpTransport")
            .field("base_url", &self.base_url.as_str())
            .field("authenticated", &self.token.is_some())
            .field("user_agent", &self.user_agent)
            .finish_non_exhaustive()
    }
}

impl Transport for HttpTransport {
    fn issue(&self, descriptor: &RequestDescriptor) -> Result<ApiResponse, GitHubError> {
        let url = self.target_url(descriptor)?;
        tracing::debug!(
            "performing request - {} {}",
            descriptor.method(),
            descriptor.endpoint()
        );

        let mut request = self
            .client
            .request(descriptor.method().clone(), url)
            .header(USER_AGENT, self.user_agent.clone())
            .header(ACCEPT, ACCEPT_V3);
        if let Some(token) = self.token.as_deref() {
            request = request.header(AUTHORIZATION, format!("token {token}"));
        }

        let response = request.send().map_err(|error| GitHubError::Network {
            message: format!("{} {} failed: {error}", descriptor.method(), descriptor.endpoint()),
        })?;

        let status = response.status();
        let headers = response.headers().clone();
        Ok(ApiResponse::new(status, headers, Box::new(response)))
    }
}
