//! Integration tests for report generation
//!
//! These tests use wiremock to stand in for the GitHub API and run the
//! full fetch, paginate, decode and render cycle end-to-end.

use follow_grid::config::{Config, DecodePolicy, GithubConfig};
use follow_grid::github::{collect, collect_follow_graph, GithubClient};
use follow_grid::output::{format_report, write_report};
use follow_grid::ReportError;
use wiremock::matchers::{header, header_exists, header_regex, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a GitHub configuration pointing at the mock server
fn create_test_config(api_base: &str) -> GithubConfig {
    GithubConfig {
        api_base: api_base.to_string(),
        timeout_secs: 5,
        connect_timeout_secs: 2,
        ..GithubConfig::default()
    }
}

fn user_json(login: &str) -> String {
    format!(
        r#"{{"login":"{0}","id":1,"avatar_url":"https://avatars.example/{0}.png","html_url":"https://github.com/{0}","type":"User"}}"#,
        login
    )
}

fn users_json(logins: &[&str]) -> String {
    let items: Vec<String> = logins.iter().map(|l| user_json(l)).collect();
    format!("[{}]", items.join(","))
}

async fn mount_profile(server: &MockServer, body: &str) {
    Mock::given(method("GET"))
        .and(path("/user"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .expect(1)
        .mount(server)
        .await;
}

async fn mount_page(server: &MockServer, list: &str, page: u32, body: &str, expected: u64) {
    Mock::given(method("GET"))
        .and(path(format!("/user/{}", list)))
        .and(query_param("per_page", "100"))
        .and(query_param("page", page.to_string()))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .expect(expected)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_end_to_end_report() {
    let mock_server = MockServer::start().await;

    mount_profile(&mock_server, r#"{"login":"alice","avatar_url":"a.png"}"#).await;
    mount_page(&mock_server, "followers", 1, "[]", 1).await;
    mount_page(&mock_server, "followers", 2, "[]", 0).await;
    mount_page(&mock_server, "following", 1, &users_json(&["bob", "carol"]), 1).await;
    mount_page(&mock_server, "following", 2, "[]", 1).await;
    mount_page(&mock_server, "following", 3, "[]", 0).await;

    let config = create_test_config(&mock_server.uri());
    let client = GithubClient::new(&config, "test-token").expect("Failed to create client");
    let graph = collect_follow_graph(client).await.expect("Collection failed");

    assert_eq!(graph.profile.login, "alice");
    assert_eq!(graph.profile.avatar_url, "a.png");
    assert!(graph.followers.is_empty());
    assert_eq!(graph.following.len(), 2);

    let dir = tempfile::TempDir::new().unwrap();
    let report_path = dir.path().join("README.md");
    write_report(&graph, &report_path).expect("Failed to write report");
    let report = std::fs::read_to_string(&report_path).unwrap();

    assert!(report.starts_with("## alice\n<img src='a.png'"));
    assert!(report.contains("## Followers <kbd>0</kbd>\n<table>\n</table>\n"));
    assert!(report.contains("## Following <kbd>2</kbd>\n<table>"));

    let following_section = &report[report.find("## Following").unwrap()..];
    assert_eq!(following_section.matches("<tr>").count(), 1);
    assert_eq!(following_section.matches("<td").count(), 2);
    assert!(following_section.contains("<a href=\"https://github.com/bob\">"));
    assert!(following_section.contains("<img src=\"https://avatars.example/carol.png\""));
    assert_eq!(report, format_report(&graph));
}

#[tokio::test]
async fn test_requests_carry_github_headers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(header("authorization", "Bearer ghp_secret"))
        .and(header("accept", "application/vnd.github+json"))
        .and(header("content-type", "application/json"))
        .and(header_exists("user-agent"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .expect(3)
        .mount(&mock_server)
        .await;

    let config = create_test_config(&mock_server.uri());
    let client = GithubClient::new(&config, "ghp_secret").unwrap();
    let graph = collect_follow_graph(client).await.unwrap();

    // "[]" as a profile body is not an object; the lenient default leaves it empty
    assert_eq!(graph.profile.login, "");
    assert!(graph.followers.is_empty());
    assert!(graph.following.is_empty());
}

#[tokio::test]
async fn test_missing_token_still_sends_requests() {
    let mock_server = MockServer::start().await;

    // Only a bearer scheme with nothing after it is accepted
    let empty_bearer = || header_regex("authorization", r"^Bearer\s*$");

    Mock::given(method("GET"))
        .and(path("/user"))
        .and(empty_bearer())
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"login":"anon"}"#))
        .expect(1)
        .mount(&mock_server)
        .await;
    for list in ["followers", "following"] {
        Mock::given(method("GET"))
            .and(path(format!("/user/{}", list)))
            .and(query_param("page", "1"))
            .and(empty_bearer())
            .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
            .expect(1)
            .mount(&mock_server)
            .await;
    }

    let config = GithubConfig {
        token_env: "FOLLOW_GRID_INTEGRATION_UNSET_TOKEN".to_string(),
        ..create_test_config(&mock_server.uri())
    };
    std::env::remove_var(&config.token_env);

    let graph = collect(&config).await.expect("Collection failed");

    assert_eq!(graph.profile.login, "anon");
    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 3);
}

#[tokio::test]
async fn test_multi_page_followers_in_order() {
    let mock_server = MockServer::start().await;

    mount_profile(&mock_server, r#"{"login":"alice"}"#).await;
    mount_page(&mock_server, "followers", 1, &users_json(&["f1", "f2", "f3"]), 1).await;
    mount_page(&mock_server, "followers", 2, &users_json(&["f4", "f5"]), 1).await;
    mount_page(&mock_server, "followers", 3, "[]", 1).await;
    mount_page(&mock_server, "following", 1, "[]", 1).await;

    let config = create_test_config(&mock_server.uri());
    let client = GithubClient::new(&config, "t").unwrap();
    let graph = collect_follow_graph(client).await.unwrap();

    let logins: Vec<_> = graph.followers.iter().map(|u| u.login.as_str()).collect();
    assert_eq!(logins, vec!["f1", "f2", "f3", "f4", "f5"]);

    let report = format_report(&graph);
    let followers_section = &report[report.find("## Followers").unwrap()..report.find("## Following").unwrap()];
    assert_eq!(followers_section.matches("<tr>").count(), 2);
}

#[tokio::test]
async fn test_small_per_page_stops_after_empty_page() {
    let mock_server = MockServer::start().await;

    mount_profile(&mock_server, r#"{"login":"alice"}"#).await;
    for list in ["followers", "following"] {
        Mock::given(method("GET"))
            .and(path(format!("/user/{}", list)))
            .and(query_param("per_page", "1"))
            .and(query_param("page", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
            .expect(1)
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path(format!("/user/{}", list)))
            .and(query_param("page", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
            .expect(0)
            .mount(&mock_server)
            .await;
    }

    let config = GithubConfig {
        per_page: 1,
        ..create_test_config(&mock_server.uri())
    };
    let client = GithubClient::new(&config, "t").unwrap();
    let graph = collect_follow_graph(client).await.unwrap();

    assert!(graph.followers.is_empty());
    assert!(graph.following.is_empty());
}

#[tokio::test]
async fn test_error_status_body_is_still_decoded() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_string(r#"{"message":"Bad credentials","status":"401"}"#),
        )
        .mount(&mock_server)
        .await;

    let config = create_test_config(&mock_server.uri());
    let client = GithubClient::new(&config, "expired").unwrap();
    let graph = collect_follow_graph(client).await.unwrap();

    assert_eq!(graph.profile.login, "");
    assert!(graph.followers.is_empty());
    assert!(graph.following.is_empty());
}

#[tokio::test]
async fn test_strict_decode_aborts_collection() {
    let mock_server = MockServer::start().await;

    // No call-count expectations: the failure aborts whatever is still in flight
    Mock::given(method("GET"))
        .and(path("/user"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"login":"alice"}"#))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/user/followers"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/user/following"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .mount(&mock_server)
        .await;

    let config = GithubConfig {
        decode_policy: DecodePolicy::Strict,
        ..create_test_config(&mock_server.uri())
    };
    let client = GithubClient::new(&config, "t").unwrap();
    let result = collect_follow_graph(client).await;

    match result {
        Err(ReportError::Decode { endpoint, .. }) => assert_eq!(endpoint, "followers"),
        other => panic!("expected decode error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_transport_error_is_fatal() {
    // Nothing listens on port 1
    let config = create_test_config("http://127.0.0.1:1");
    let client = GithubClient::new(&config, "t").unwrap();

    let result = collect_follow_graph(client).await;

    assert!(matches!(result, Err(ReportError::Http { .. })));
}

#[tokio::test]
async fn test_default_config_targets_github() {
    let config = Config::default();
    let client = GithubClient::new(&config.github, "").unwrap();
    assert_eq!(client.api_base().host_str(), Some("api.github.com"));
    assert_eq!(config.output.path, "./README.md");
}
