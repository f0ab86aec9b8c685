//! Shared helpers for integration tests against a Wiremock GitHub.

use tokio::runtime::Runtime;
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

use gitpr::github::models::test_support::{pull_request, pull_requests_json};
use gitpr::{ApiSettings, GitHubApi};

/// Starts a runtime and a mock server bound to it.
///
/// # Panics
///
/// Panics if the Tokio runtime cannot be created.
pub fn start_server() -> (Runtime, MockServer) {
    let runtime =
        Runtime::new().unwrap_or_else(|error| panic!("failed to create runtime: {error}"));
    let server = runtime.block_on(MockServer::start());
    (runtime, server)
}

/// Connects a real HTTP client to `server`.
///
/// # Panics
///
/// Panics if the settings are rejected.
pub fn api_for(server: &MockServer) -> GitHubApi {
    let settings = ApiSettings::new("gitpr-integration")
        .with_base_url(&server.uri())
        .with_token(Some("integration-token".to_owned()));
    GitHubApi::connect(settings).unwrap_or_else(|error| panic!("failed to connect: {error}"))
}

/// `Link` header value advertising `last` as the final page of `endpoint`.
pub fn last_page_link(server: &MockServer, endpoint: &str, last: u32) -> String {
    format!(
        "<{uri}{endpoint}?page=2>; rel=\"next\", <{uri}{endpoint}?page={last}>; rel=\"last\"",
        uri = server.uri()
    )
}

/// Mounts one page of pull requests for `repository` at `page`.
///
/// Page 1 is matched by the absence of a `page` parameter and carries a
/// `Link` header announcing `total` pages.
pub fn mount_pulls_page(
    runtime: &Runtime,
    server: &MockServer,
    repository: &str,
    page: u32,
    total: u32,
    ids: &[u64],
) {
    let endpoint = format!("/repos/{repository}/pulls");
    let records: Vec<_> = ids
        .iter()
        .map(|id| pull_request(*id, repository, "open"))
        .collect();
    let mut response = ResponseTemplate::new(200).set_body_raw(
        pull_requests_json(&records),
        "application/json",
    );
    let base = Mock::given(method("GET")).and(path(endpoint.as_str()));
    let mock = if page == 1 {
        if total > 1 {
            response =
                response.insert_header("Link", last_page_link(server, &endpoint, total).as_str());
        }
        base.and(query_param_is_missing("page"))
            .respond_with(response)
    } else {
        base.and(query_param("page", page.to_string().as_str()))
            .respond_with(response)
    };
    runtime.block_on(mock.expect(1).mount(server));
}
