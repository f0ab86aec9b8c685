//! Tests for pull request listing.

use std::collections::HashSet;

use http::StatusCode;
use http::header::{HeaderMap, HeaderValue, LINK};
use mockall::Sequence;
use rstest::rstest;

use super::{PullRequestArgs, PullRequestGateway};
use crate::github::error::GitHubError;
use crate::github::gateway::{PullRequestState, ResourceGateway};
use crate::github::models::test_support::{
    pull_request, pull_requests_json, repositories_json, repository_named,
};
use crate::github::transport::{ApiResponse, MockTransport};

fn with_last(pages: u32) -> HeaderMap {
    let mut headers = HeaderMap::new();
    let link =
        format!("<https://api.github.com/repos/octo/hello/pulls?page={pages}>; rel=\"last\"");
    headers.insert(
        LINK,
        HeaderValue::from_str(&link).expect("link header should be valid"),
    );
    headers
}

fn pulls_page(ids: &[u64], repository: &str, headers: HeaderMap) -> ApiResponse {
    let records: Vec<_> = ids
        .iter()
        .map(|id| pull_request(*id, repository, "open"))
        .collect();
    ApiResponse::from_bytes(StatusCode::OK, headers, pull_requests_json(&records))
}

fn user_args(repos: &[&str]) -> PullRequestArgs {
    PullRequestArgs {
        user: Some("octo".to_owned()),
        repos: repos.iter().map(|name| (*name).to_owned()).collect(),
        ..PullRequestArgs::default()
    }
}

#[test]
fn three_pages_of_one_pull_request_each() {
    let mut transport = MockTransport::new();
    let mut sequence = Sequence::new();
    for page in 1..=3_u32 {
        transport
            .expect_issue()
            .withf(move |descriptor| {
                let expected = (page > 1).then(|| page.to_string());
                descriptor.endpoint() == "/repos/octo/hello/pulls"
                    && descriptor.query_value("page") == expected.as_deref()
            })
            .times(1)
            .in_sequence(&mut sequence)
            .returning(move |_| {
                let headers = if page == 1 { with_last(3) } else { HeaderMap::new() };
                Ok(pulls_page(&[u64::from(page) * 100], "octo/hello", headers))
            });
    }

    let pull_requests = PullRequestGateway::new(&transport)
        .fetch(&user_args(&["hello"]))
        .expect("fetch should succeed");

    let ids: Vec<u64> = pull_requests.iter().map(|record| record.id).collect();
    assert_eq!(ids, [100, 200, 300]);
    let unique: HashSet<u64> = ids.iter().copied().collect();
    assert_eq!(unique.len(), ids.len(), "identifiers should not repeat");
}

#[rstest]
#[case::both(PullRequestArgs {
    user: Some("octo".to_owned()),
    org: Some("acme".to_owned()),
    ..PullRequestArgs::default()
})]
#[case::neither(PullRequestArgs { repos: vec!["hello".to_owned()], ..PullRequestArgs::default() })]
fn invalid_scope_issues_no_requests(#[case] args: PullRequestArgs) {
    let mut transport = MockTransport::new();
    transport.expect_issue().never();

    let error = PullRequestGateway::new(&transport)
        .fetch(&args)
        .expect_err("scope should be rejected");

    assert_eq!(error, GitHubError::InvalidScope);
}

#[test]
fn empty_repository_list_discovers_repositories_first() {
    let mut transport = MockTransport::new();
    let mut sequence = Sequence::new();
    transport
        .expect_issue()
        .withf(|descriptor| descriptor.endpoint() == "/orgs/acme/repos")
        .times(1)
        .in_sequence(&mut sequence)
        .returning(|_| {
            let repositories = [repository_named("acme/one"), repository_named("acme/two")];
            Ok(ApiResponse::from_bytes(
                StatusCode::OK,
                HeaderMap::new(),
                repositories_json(&repositories),
            ))
        });
    transport
        .expect_issue()
        .withf(|descriptor| descriptor.endpoint() == "/repos/acme/one/pulls")
        .times(1)
        .in_sequence(&mut sequence)
        .returning(|_| Ok(pulls_page(&[1, 2], "acme/one", HeaderMap::new())));
    transport
        .expect_issue()
        .withf(|descriptor| descriptor.endpoint() == "/repos/acme/two/pulls")
        .times(1)
        .in_sequence(&mut sequence)
        .returning(|_| Ok(pulls_page(&[3], "acme/two", HeaderMap::new())));
    let args = PullRequestArgs {
        org: Some("acme".to_owned()),
        ..PullRequestArgs::default()
    };

    let pull_requests = PullRequestGateway::new(&transport)
        .fetch(&args)
        .expect("fetch should succeed");

    let repositories: Vec<Option<&str>> = pull_requests
        .iter()
        .map(|record| record.repository_full_name())
        .collect();
    assert_eq!(
        repositories,
        [Some("acme/one"), Some("acme/one"), Some("acme/two")]
    );
    assert!(args.repos.is_empty(), "caller arguments must not change");
}

#[test]
fn failure_on_any_repository_discards_results() {
    let mut transport = MockTransport::new();
    transport
        .expect_issue()
        .withf(|descriptor| descriptor.endpoint() == "/repos/octo/first/pulls")
        .times(1)
        .returning(|_| Ok(pulls_page(&[1], "octo/first", HeaderMap::new())));
    transport
        .expect_issue()
        .withf(|descriptor| descriptor.endpoint() == "/repos/octo/second/pulls")
        .times(1)
        .returning(|_| {
            Ok(ApiResponse::from_bytes(
                StatusCode::OK,
                HeaderMap::new(),
                "[{\"id\": \"not a number\"}]",
            ))
        });
    transport
        .expect_issue()
        .withf(|descriptor| descriptor.endpoint() == "/repos/octo/third/pulls")
        .never();

    let result =
        PullRequestGateway::new(&transport).fetch(&user_args(&["first", "second", "third"]));

    assert!(
        matches!(result, Err(GitHubError::Decode { resource: "pull requests", .. })),
        "expected Decode error, got {result:?}"
    );
}

#[rstest]
#[case::all(Some(PullRequestState::All), Some("all"))]
#[case::closed(Some(PullRequestState::Closed), Some("closed"))]
#[case::github_default(None, None)]
fn state_filter_is_forwarded(
    #[case] state: Option<PullRequestState>,
    #[case] expected: Option<&'static str>,
) {
    let mut transport = MockTransport::new();
    transport
        .expect_issue()
        .withf(move |descriptor| descriptor.query_value("state") == expected)
        .times(1)
        .returning(|_| Ok(pulls_page(&[], "octo/hello", HeaderMap::new())));
    let args = PullRequestArgs {
        state,
        ..user_args(&["hello"])
    };

    let pull_requests = PullRequestGateway::new(&transport)
        .fetch(&args)
        .expect("fetch should succeed");

    assert!(pull_requests.is_empty());
}
