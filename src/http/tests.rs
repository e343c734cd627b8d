//! Tests for the HTTP module

use super::*;
use crate::config::FeedConfig;
use crate::error::Error;
use crate::pagination::PageRequest;
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> HttpClient {
    let config = HttpClientConfig::builder()
        .base_url(server.uri())
        .build();
    HttpClient::with_config(config).unwrap()
}

// ============================================================================
// Config Tests
// ============================================================================

#[test]
fn test_http_client_config_default() {
    let config = HttpClientConfig::default();
    assert_eq!(config.timeout, Duration::from_secs(30));
    assert!(config.base_url.is_none());
    assert!(config.default_headers.is_empty());
    assert!(config.user_agent.starts_with("combination-feed/"));
}

#[test]
fn test_http_client_config_builder() {
    let config = HttpClientConfig::builder()
        .base_url("https://api.example.com")
        .timeout(Duration::from_secs(5))
        .header("Accept", "application/json")
        .user_agent("test-agent/1.0")
        .build();

    assert_eq!(config.base_url, Some("https://api.example.com".to_string()));
    assert_eq!(config.timeout, Duration::from_secs(5));
    assert_eq!(
        config.default_headers.get("Accept"),
        Some(&"application/json".to_string())
    );
    assert_eq!(config.user_agent, "test-agent/1.0");
}

#[test]
fn test_query_keeps_insertion_order() {
    let query = Query::new().param("pageIndex", 2).param("pageSize", 10);

    assert_eq!(
        query.pairs(),
        &[
            ("pageIndex".to_string(), "2".to_string()),
            ("pageSize".to_string(), "10".to_string()),
        ]
    );
}

#[test]
fn test_build_url() {
    let config = HttpClientConfig::builder()
        .base_url("https://api.example.com/")
        .build();
    let client = HttpClient::with_config(config).unwrap();

    assert_eq!(
        client.build_url("/api/combinations"),
        "https://api.example.com/api/combinations"
    );
    assert_eq!(
        client.build_url("api/combinations"),
        "https://api.example.com/api/combinations"
    );
    assert_eq!(
        client.build_url("http://other.example.com/x"),
        "http://other.example.com/x"
    );
}

#[test]
fn test_build_url_without_base() {
    let client = HttpClient::with_config(HttpClientConfig::default()).unwrap();
    assert_eq!(client.build_url("/relative"), "/relative");
    assert!(format!("{client:?}").contains("HttpClient"));
}

// ============================================================================
// HttpClient Tests
// ============================================================================

#[tokio::test]
async fn test_http_client_get_json_with_query_and_headers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/data"))
        .and(query_param("pageIndex", "3"))
        .and(header("X-Client", "feed"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "value": 42 })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder()
        .base_url(mock_server.uri())
        .header("X-Client", "feed")
        .build();
    let client = HttpClient::with_config(config).unwrap();

    let data: serde_json::Value = client
        .get_json("/api/data", &Query::new().param("pageIndex", 3))
        .await
        .unwrap();

    assert_eq!(data["value"], 42);
}

#[tokio::test]
async fn test_http_client_404_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not found"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client
        .get_json::<serde_json::Value>("/api/missing", &Query::new())
        .await
        .unwrap_err();

    match err {
        Error::HttpStatus { status, body } => {
            assert_eq!(status, 404);
            assert_eq!(body, "Not found");
        }
        other => panic!("Expected HttpStatus, got {other:?}"),
    }
}

#[tokio::test]
async fn test_http_client_500_is_not_retried() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/flaky"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client
        .get_json::<serde_json::Value>("/api/flaky", &Query::new())
        .await
        .unwrap_err();

    assert!(matches!(err, Error::HttpStatus { status: 500, .. }));
}

#[tokio::test]
async fn test_http_client_malformed_json_is_decode_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/broken"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client
        .get_json::<serde_json::Value>("/api/broken", &Query::new())
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Decode { .. }));
}

#[tokio::test]
async fn test_http_client_timeout() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/slow"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(500)))
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder()
        .base_url(mock_server.uri())
        .timeout(Duration::from_millis(50))
        .build();
    let client = HttpClient::with_config(config).unwrap();
    let err = client
        .get_json::<serde_json::Value>("/api/slow", &Query::new())
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Timeout { timeout_ms: 50 }));
}

// ============================================================================
// CombinationsApi Tests
// ============================================================================

#[tokio::test]
async fn test_combinations_api_sends_paging_params() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/combinations"))
        .and(query_param("pageIndex", "2"))
        .and(query_param("pageSize", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{ "combinationId": "c11", "name": "Tutti-Frutti" }],
            "totalCount": 11
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = FeedConfig::new().with_base_url(mock_server.uri());
    let api = CombinationsApi::new(&config).unwrap();

    let page = api.get_page(PageRequest::new(2, 10)).await.unwrap();

    assert_eq!(page.total_count, 11);
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].id(), "c11");
    assert_eq!(page.items[0].label(), "Tutti-Frutti");
}

#[tokio::test]
async fn test_combinations_api_custom_endpoint() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/combos"))
        .and(header("Accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [],
            "totalCount": 0
        })))
        .mount(&mock_server)
        .await;

    let config = FeedConfig::new()
        .with_base_url(mock_server.uri())
        .with_endpoint("/v2/combos");
    let api = CombinationsApi::new(&config).unwrap();

    assert_eq!(api.url(), format!("{}/v2/combos", mock_server.uri()));

    let page = api.get_page(PageRequest::new(1, 10)).await.unwrap();
    assert!(page.items.is_empty());
    assert_eq!(page.total_count, 0);
}

#[tokio::test]
async fn test_combinations_api_missing_total_count() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/combinations"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "items": [] })))
        .mount(&mock_server)
        .await;

    let config = FeedConfig::new().with_base_url(mock_server.uri());
    let api = CombinationsApi::new(&config).unwrap();

    let err = api.get_page(PageRequest::new(1, 10)).await.unwrap_err();
    assert!(err.is_fetch_error());
}

#[tokio::test]
async fn test_combinations_api_missing_items() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/combinations"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "totalCount": 40 })))
        .mount(&mock_server)
        .await;

    let config = FeedConfig::new().with_base_url(mock_server.uri());
    let api = CombinationsApi::new(&config).unwrap();

    let err = api.get_page(PageRequest::new(1, 10)).await.unwrap_err();
    assert!(matches!(err, Error::Decode { .. }));
}
