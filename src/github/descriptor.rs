//! Description of a single outbound API request.

use std::collections::BTreeMap;

use http::Method;

/// Query parameter used to address a page of results.
pub const PAGE_PARAM: &str = "page";

/// Endpoint, method, and query parameters for one logical API request.
///
/// Descriptors own their query map, so a clone can be re-targeted at another
/// page without affecting the value it was cloned from.
///
/// # Example
///
/// ```
/// use gitpr::github::RequestDescriptor;
///
/// let base = RequestDescriptor::get("/users/octo/repos");
/// let second = base.clone().with_page(2);
/// assert_eq!(base.query_value("page"), None);
/// assert_eq!(second.query_value("page"), Some("2"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDescriptor {
    endpoint: String,
    method: Method,
    query: BTreeMap<String, String>,
}

impl RequestDescriptor {
    /// Creates a descriptor for the given method and endpoint path.
    #[must_use]
    pub fn new(method: Method, endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            method,
            query: BTreeMap::new(),
        }
    }

    /// Creates a `GET` descriptor for the given endpoint path.
    #[must_use]
    pub fn get(endpoint: impl Into<String>) -> Self {
        Self::new(Method::GET, endpoint)
    }

    /// Returns the descriptor with `key` set to `value`, replacing any
    /// previous value for that key.
    #[must_use]
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_query(key, value);
        self
    }

    /// Returns the descriptor addressed at the given 1-based page.
    #[must_use]
    pub fn with_page(self, page: u32) -> Self {
        self.with_query(PAGE_PARAM, page.to_string())
    }

    /// Sets a query parameter in place.
    pub fn set_query(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.query.insert(key.into(), value.into());
    }

    /// Endpoint path appended to the API base address.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// HTTP method of the request.
    #[must_use]
    pub const fn method(&self) -> &Method {
        &self.method
    }

    /// Query parameters in key order.
    #[must_use]
    pub const fn query(&self) -> &BTreeMap<String, String> {
        &self.query
    }

    /// Returns the value of a single query parameter.
    #[must_use]
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query.get(key).map(String::as_str)
    }
}
