//! End-to-end fetches through the HTTP transport into the in-memory store.

mod support;

use rstest::rstest;
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, ResponseTemplate};

use gitpr::github::models::test_support::{
    pull_request, pull_requests_json, repositories_json, repository_named,
};
use gitpr::github::{GitHubError, PullRequestState};
use gitpr::report::load_pull_requests;
use gitpr::{AppError, InMemoryStore, PullRequestArgs, PullRequestKey, PullRequestStore};
use support::{api_for, mount_pulls_page, start_server};

fn user_args(repos: &[&str]) -> PullRequestArgs {
    PullRequestArgs {
        user: Some("octo".to_owned()),
        repos: repos.iter().map(|name| (*name).to_owned()).collect(),
        ..PullRequestArgs::default()
    }
}

#[test]
fn every_page_lands_in_the_store_in_order() {
    let (runtime, server) = start_server();
    mount_pulls_page(&runtime, &server, "octo/hello", 1, 3, &[1, 2]);
    mount_pulls_page(&runtime, &server, "octo/hello", 2, 3, &[3, 4]);
    mount_pulls_page(&runtime, &server, "octo/hello", 3, 3, &[5]);
    let api = api_for(&server);
    let mut store = InMemoryStore::new();

    let inserted = load_pull_requests(&api, &user_args(&["hello"]), &mut store)
        .expect("load should succeed");

    assert_eq!(inserted, 5);
    let ids: Vec<u64> = store
        .all()
        .expect("read should succeed")
        .iter()
        .map(|record| record.id)
        .collect();
    assert_eq!(ids, [1, 2, 3, 4, 5]);
    assert!(
        store
            .by_key(&PullRequestKey::new("octo/hello", 4))
            .expect("read should succeed")
            .is_some()
    );
}

#[test]
fn organization_repositories_are_discovered_then_fetched() {
    let (runtime, server) = start_server();
    let repositories = [repository_named("acme/widgets"), repository_named("acme/gadgets")];
    runtime.block_on(
        Mock::given(method("GET"))
            .and(path("/orgs/acme/repos"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_raw(repositories_json(&repositories), "application/json"),
            )
            .expect(1)
            .mount(&server),
    );
    mount_pulls_page(&runtime, &server, "acme/widgets", 1, 1, &[10]);
    mount_pulls_page(&runtime, &server, "acme/gadgets", 1, 2, &[20]);
    mount_pulls_page(&runtime, &server, "acme/gadgets", 2, 2, &[21]);
    let api = api_for(&server);
    let mut store = InMemoryStore::new();
    let args = PullRequestArgs {
        org: Some("acme".to_owned()),
        ..PullRequestArgs::default()
    };

    load_pull_requests(&api, &args, &mut store).expect("load should succeed");

    let keys: Vec<String> = store
        .all()
        .expect("read should succeed")
        .iter()
        .map(|record| PullRequestKey::of(record).to_string())
        .collect();
    assert_eq!(keys, ["acme/widgets#10", "acme/gadgets#20", "acme/gadgets#21"]);
}

#[rstest]
#[case::closed(PullRequestState::Closed, "closed")]
#[case::all(PullRequestState::All, "all")]
fn state_reaches_github_as_query(#[case] state: PullRequestState, #[case] expected: &str) {
    let (runtime, server) = start_server();
    runtime.block_on(
        Mock::given(method("GET"))
            .and(path("/repos/octo/hello/pulls"))
            .and(query_param("state", expected))
            .respond_with(ResponseTemplate::new(200).set_body_raw("[]", "application/json"))
            .expect(1)
            .mount(&server),
    );
    let api = api_for(&server);
    let mut store = InMemoryStore::new();
    let args = PullRequestArgs {
        state: Some(state),
        ..user_args(&["hello"])
    };

    let inserted = load_pull_requests(&api, &args, &mut store).expect("load should succeed");

    assert_eq!(inserted, 0);
    assert!(store.is_empty());
}

#[test]
fn failed_page_leaves_the_store_empty() {
    let (runtime, server) = start_server();
    mount_pulls_page(&runtime, &server, "octo/hello", 1, 2, &[1]);
    runtime.block_on(
        Mock::given(method("GET"))
            .and(path("/repos/octo/hello/pulls"))
            .and(query_param("page", "2"))
            .respond_with(
                ResponseTemplate::new(500).set_body_raw(
                    r#"{"message": "Server Error"}"#,
                    "application/json",
                ),
            )
            .expect(1)
            .mount(&server),
    );
    let api = api_for(&server);
    let mut store = InMemoryStore::new();

    let result = load_pull_requests(&api, &user_args(&["hello"]), &mut store);

    assert!(
        matches!(result, Err(AppError::GitHub(GitHubError::Api { .. }))),
        "expected Api error, got {result:?}"
    );
    assert!(store.is_empty(), "partial pages must not be stored");
}

#[test]
fn relative_last_link_walks_every_page() {
    let (runtime, server) = start_server();
    runtime.block_on(
        Mock::given(method("GET"))
            .and(path("/repos/octo/hello/pulls"))
            .and(query_param_is_missing("page"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("Link", "</repos/octo/hello/pulls?page=2>; rel=\"last\"")
                    .set_body_raw(
                        pull_requests_json(&[pull_request(1, "octo/hello", "open")]),
                        "application/json",
                    ),
            )
            .expect(1)
            .mount(&server),
    );
    mount_pulls_page(&runtime, &server, "octo/hello", 2, 2, &[2]);
    let api = api_for(&server);
    let mut store = InMemoryStore::new();

    let inserted = load_pull_requests(&api, &user_args(&["hello"]), &mut store)
        .expect("load should succeed");

    assert_eq!(inserted, 2);
}

#[test]
fn malformed_last_link_is_rejected() {
    let (runtime, server) = start_server();
    runtime.block_on(
        Mock::given(method("GET"))
            .and(path("/repos/octo/hello/pulls"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("Link", "<https://x.test/pulls?page=many>; rel=\"last\"")
                    .set_body_raw("[]", "application/json"),
            )
            .expect(1)
            .mount(&server),
    );
    let api = api_for(&server);
    let mut store = InMemoryStore::new();

    let result = load_pull_requests(&api, &user_args(&["hello"]), &mut store);

    assert!(
        matches!(
            result,
            Err(AppError::GitHub(GitHubError::InvalidPagination { .. }))
        ),
        "expected InvalidPagination, got {result:?}"
    );
}
