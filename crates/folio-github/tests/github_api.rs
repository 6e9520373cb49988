//! Mock API tests for the GitHub forge.
//!
//! These tests use wiremock to simulate the GitHub REST API and test the
//! collector and forge behavior without network access.

use std::time::Duration;

use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use folio_core::error::{Error, InvalidRecordError, TransportError};
use folio_core::{ApiUrl, CollectOptions, Collector, Forge, OrgName};
use folio_github::{GithubClient, GithubForge};

/// Helper to create an API URL from a mock server.
fn mock_api_url(server: &MockServer) -> ApiUrl {
    // For tests, we need to allow HTTP localhost
    ApiUrl::new(&format!("http://127.0.0.1:{}", server.address().port())).unwrap()
}

fn forge_for(server: &MockServer) -> GithubForge {
    GithubForge::new(GithubClient::new(mock_api_url(server)))
}

fn org() -> OrgName {
    OrgName::new("acme").unwrap()
}

/// A well-formed repository payload.
fn repo_json(name: &str, watchers: u64) -> Value {
    json!({
        "name": name,
        "description": format!("The {name} project"),
        "language": "Rust",
        "html_url": format!("https://github.com/acme/{name}"),
        "pushed_at": "2024-04-28T12:00:00Z",
        "created_at": "2020-01-01T00:00:00Z",
        "watchers": watchers
    })
}

// ============================================================================
// Pagination Tests
// ============================================================================

#[tokio::test]
async fn collect_stops_at_empty_page() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/orgs/acme/repos"))
        .and(query_param("page", "1"))
        .and(query_param("per_page", "2"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([repo_json("a", 1), repo_json("b", 2)])),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/orgs/acme/repos"))
        .and(query_param("page", "2"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([repo_json("c", 3), repo_json("d", 4)])),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/orgs/acme/repos"))
        .and(query_param("page", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let forge = forge_for(&server);
    let collector = Collector::new(CollectOptions {
        per_page: 2,
        max_pages: 10,
    });

    let repos = collector.collect(&forge, &org()).await.unwrap();

    // 2 full pages of 2; the empty third page terminated the run. The
    // mock expectations verify exactly 3 requests were made.
    assert_eq!(repos.len(), 4);
    let names: Vec<_> = repos.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["a", "b", "c", "d"]);
}

#[tokio::test]
async fn collect_errors_when_api_never_drains() {
    let server = MockServer::start().await;

    // Every page is full, so the endpoint never signals end-of-data.
    Mock::given(method("GET"))
        .and(path("/orgs/acme/repos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([repo_json("x", 1)])))
        .expect(3)
        .mount(&server)
        .await;

    let forge = forge_for(&server);
    let collector = Collector::new(CollectOptions {
        per_page: 1,
        max_pages: 3,
    });

    let err = collector.collect(&forge, &org()).await.unwrap_err();

    assert!(matches!(err, Error::PageLimitExceeded { limit: 3 }));
}

// ============================================================================
// Malformed Payload Tests
// ============================================================================

#[tokio::test]
async fn lenient_forge_skips_malformed_records() {
    let server = MockServer::start().await;

    let broken = json!({
        "name": "broken",
        "description": null,
        "language": null,
        "html_url": "https://github.com/acme/broken",
        "pushed_at": null,
        "created_at": "2020-01-01T00:00:00Z",
        "watchers": 7
    });

    Mock::given(method("GET"))
        .and(path("/orgs/acme/repos"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([repo_json("good", 5), broken])))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/orgs/acme/repos"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let forge = forge_for(&server);
    let repos = Collector::default().collect(&forge, &org()).await.unwrap();

    assert_eq!(repos.len(), 1);
    assert_eq!(repos[0].name, "good");
}

#[tokio::test]
async fn all_malformed_page_does_not_end_collection() {
    let server = MockServer::start().await;

    // Page 1 is non-empty on the wire but every record is unusable;
    // skipping them must not be mistaken for the end-of-data signal.
    let broken = json!({
        "name": "broken",
        "html_url": "https://github.com/acme/broken",
        "pushed_at": null,
        "created_at": "2020-01-01T00:00:00Z",
        "watchers": 7
    });

    Mock::given(method("GET"))
        .and(path("/orgs/acme/repos"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([broken])))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/orgs/acme/repos"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([repo_json("good", 5)])))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/orgs/acme/repos"))
        .and(query_param("page", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let forge = forge_for(&server);
    let repos = Collector::default().collect(&forge, &org()).await.unwrap();

    let names: Vec<_> = repos.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["good"]);
}

#[tokio::test]
async fn strict_forge_fails_on_malformed_record() {
    let server = MockServer::start().await;

    let broken = json!({
        "name": "broken",
        "html_url": "https://github.com/acme/broken",
        "pushed_at": "2024-04-28T12:00:00Z",
        "created_at": "2020-01-01T00:00:00Z"
        // watchers missing entirely
    });

    Mock::given(method("GET"))
        .and(path("/orgs/acme/repos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([broken])))
        .mount(&server)
        .await;

    let forge = GithubForge::new(GithubClient::new(mock_api_url(&server))).strict(true);
    let err = Collector::default().collect(&forge, &org()).await.unwrap_err();

    assert!(matches!(
        err,
        Error::InvalidRecord(InvalidRecordError::MissingField {
            field: "watchers",
            ..
        })
    ));
}

// ============================================================================
// Error Handling Tests
// ============================================================================

#[tokio::test]
async fn api_error_surfaces_status_and_message() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/orgs/acme/repos"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "message": "Not Found",
            "documentation_url": "https://docs.github.com/rest"
        })))
        .mount(&server)
        .await;

    let forge = forge_for(&server);
    let err = Collector::default().collect(&forge, &org()).await.unwrap_err();

    match err {
        Error::Api(api) => {
            assert!(api.is_not_found());
            assert_eq!(api.message.as_deref(), Some("Not Found"));
        }
        other => panic!("expected api error, got {other:?}"),
    }
}

#[tokio::test]
async fn non_json_error_response() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/orgs/acme/repos"))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_string("Internal Server Error")
                .insert_header("content-type", "text/plain"),
        )
        .mount(&server)
        .await;

    let forge = forge_for(&server);
    let err = Collector::default().collect(&forge, &org()).await.unwrap_err();

    // Should handle non-JSON error gracefully
    assert!(err.to_string().contains("500"));
}

#[tokio::test]
async fn slow_response_times_out() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/orgs/acme/repos"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([]))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&server)
        .await;

    let client = GithubClient::with_timeout(mock_api_url(&server), Duration::from_millis(50));
    let forge = GithubForge::new(client);

    let err = Collector::default().collect(&forge, &org()).await.unwrap_err();

    assert!(matches!(
        err,
        Error::Transport(TransportError::Timeout { .. })
    ));
}

// ============================================================================
// Count Endpoint Tests
// ============================================================================

#[tokio::test]
async fn members_returns_logins() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/orgs/acme/members"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"login": "alice"},
            {"login": "bob"}
        ])))
        .mount(&server)
        .await;

    let forge = forge_for(&server);
    let members = forge.members(&org()).await.unwrap();

    assert_eq!(members.len(), 2);
    assert_eq!(members[0].login, "alice");
}

#[tokio::test]
async fn contributors_returns_logins() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/acme/flagship/contributors"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"login": "carol"},
            {"login": "dave"},
            {"login": "erin"}
        ])))
        .mount(&server)
        .await;

    let forge = forge_for(&server);
    let contributors = forge.contributors(&org(), "flagship").await.unwrap();

    assert_eq!(contributors.len(), 3);
}

// ============================================================================
// Flagship Detail Tests
// ============================================================================

#[tokio::test]
async fn latest_milestone_picks_most_recently_updated() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/acme/flagship/milestones"))
        .and(query_param("state", "closed"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"title": "v1.0", "updated_at": "2024-01-15T00:00:00Z", "state": "closed"},
            {"title": "v1.1", "updated_at": "2024-03-02T00:00:00Z", "state": "closed"}
        ])))
        .mount(&server)
        .await;

    let forge = forge_for(&server);
    let milestone = forge.latest_milestone(&org(), "flagship").await.unwrap();

    let milestone = milestone.unwrap();
    assert_eq!(milestone.title, "v1.1");
}

#[tokio::test]
async fn latest_milestone_is_none_without_closed_milestones() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/acme/flagship/milestones"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let forge = forge_for(&server);
    let milestone = forge.latest_milestone(&org(), "flagship").await.unwrap();

    assert!(milestone.is_none());
}

#[tokio::test]
async fn latest_commit_reads_committer_date() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/acme/flagship/commits"))
        .and(query_param("per_page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "sha": "abc123",
                "commit": {
                    "message": "Fix pagination",
                    "committer": {"name": "alice", "date": "2024-04-30T09:30:00Z"}
                }
            }
        ])))
        .mount(&server)
        .await;

    let forge = forge_for(&server);
    let date = forge.latest_commit(&org(), "flagship").await.unwrap();

    assert_eq!(
        date.map(|d| d.to_rfc3339()),
        Some("2024-04-30T09:30:00+00:00".to_string())
    );
}

#[tokio::test]
async fn latest_tag_takes_first_entry() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/acme/flagship/tags"))
        .and(query_param("per_page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"name": "v2.3.1", "commit": {"sha": "def456"}}
        ])))
        .mount(&server)
        .await;

    let forge = forge_for(&server);
    let tag = forge.latest_tag(&org(), "flagship").await.unwrap();

    assert_eq!(tag.map(|t| t.name), Some("v2.3.1".to_string()));
}
