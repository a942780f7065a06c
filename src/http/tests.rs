//! Tests for the HTTP client module

use super::*;
use crate::error::Error;
use std::time::Duration;
use wiremock::matchers::{body_string_contains, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> HttpClient {
    let config = HttpClientConfig::builder().base_url(server.uri()).build();
    HttpClient::with_config(config).unwrap()
}

#[test]
fn test_http_client_config_default() {
    let config = HttpClientConfig::default();
    assert_eq!(config.timeout, Duration::from_secs(30));
    assert!(config.base_url.is_none());
    assert!(config.default_headers.is_empty());
    assert!(config.user_agent.starts_with("dronelogbook-rs/"));
}

#[test]
fn test_http_client_config_builder() {
    let config = HttpClientConfig::builder()
        .base_url("https://api.example.com")
        .timeout(Duration::from_secs(60))
        .header("ApiKey", "secret")
        .header("DlbUrl", "https://ou.example")
        .user_agent("test-agent/1.0")
        .build();

    assert_eq!(config.base_url, Some("https://api.example.com".to_string()));
    assert_eq!(config.timeout, Duration::from_secs(60));
    assert_eq!(config.header_value("apikey"), Some("secret"));
    assert_eq!(config.header_value("DlbUrl"), Some("https://ou.example"));
    assert_eq!(config.header_value("Missing"), None);
    assert_eq!(config.user_agent, "test-agent/1.0");
}

#[test]
fn test_request_config_builder() {
    let config = RequestConfig::new()
        .query("num_page", "2")
        .header("X-Request-Id", "abc123")
        .form_field("flightId", "f-1")
        .timeout(Duration::from_secs(10));

    assert_eq!(config.query, vec![("num_page".to_string(), "2".to_string())]);
    assert_eq!(config.headers.len(), 1);
    assert_eq!(config.form, vec![("flightId".to_string(), "f-1".to_string())]);
    assert_eq!(config.timeout, Some(Duration::from_secs(10)));
}

#[test]
fn test_build_url() {
    let config = HttpClientConfig::builder()
        .base_url("https://api.example.com/")
        .build();
    let client = HttpClient::with_config(config).unwrap();

    assert_eq!(client.build_url("/drone/abc"), "https://api.example.com/drone/abc");
    assert_eq!(client.build_url("drone/abc"), "https://api.example.com/drone/abc");
    assert_eq!(
        client.build_url("https://other.example/x"),
        "https://other.example/x"
    );
}

#[tokio::test]
async fn test_http_client_get_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/drone/d1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": [{"guid": "d1"}]
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let data: serde_json::Value = client.get_json("/drone/d1").await.unwrap();

    assert_eq!(data["data"][0]["guid"], "d1");
}

#[tokio::test]
async fn test_http_client_default_headers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/flight/f1"))
        .and(header("accept", "application/json"))
        .and(header("ApiKey", "secret123"))
        .and(header("DlbUrl", "https://ou.example"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder()
        .base_url(mock_server.uri())
        .header("accept", "application/json")
        .header("ApiKey", "secret123")
        .header("DlbUrl", "https://ou.example")
        .build();

    let client = HttpClient::with_config(config).unwrap();
    let response = client.get("/flight/f1").await.unwrap();

    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn test_http_client_query_params() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/flight"))
        .and(query_param("num_page", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": [], "has_more": false
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let response = client
        .get_with_config("/flight", RequestConfig::new().query("num_page", "3"))
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn test_http_client_post_form_bytes() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/webservices/getOriginalLogData.php"))
        .and(body_string_contains("flightId=f-42"))
        .and(body_string_contains("apiKey=k"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![0u8, 1, 2, 255]))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let body = client
        .post_bytes(
            "/webservices/getOriginalLogData.php",
            RequestConfig::new()
                .form_field("apiKey", "k")
                .form_field("flightId", "f-42"),
        )
        .await
        .unwrap();

    assert_eq!(body.as_ref(), &[0u8, 1, 2, 255]);
}

#[tokio::test]
async fn test_http_client_404_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/place/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not found"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.get("/place/missing").await.unwrap_err();

    match err {
        Error::RequestFailed { status, endpoint } => {
            assert_eq!(status, 404);
            assert_eq!(endpoint, "/place/missing");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_http_client_500_is_not_retried() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/flight/f1"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.get("/flight/f1").await.unwrap_err();

    assert_eq!(err.status(), Some(500));
}

#[tokio::test]
async fn test_http_client_malformed_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/drone/d1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client
        .get_json::<serde_json::Value>("/drone/d1")
        .await
        .unwrap_err();

    assert!(matches!(err, Error::MalformedResponse { .. }));
}

#[tokio::test]
async fn test_http_client_timeout() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/flight"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(500)))
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder()
        .base_url(mock_server.uri())
        .timeout(Duration::from_millis(50))
        .build();
    let client = HttpClient::with_config(config).unwrap();

    let err = client.get("/flight").await.unwrap_err();
    assert!(matches!(err, Error::Timeout { timeout_ms: 50 }));
}

#[tokio::test]
async fn test_http_client_full_url() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/epqs/pqs.php"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let client = HttpClient::new().unwrap();

    let response = client
        .get(&format!("{}/epqs/pqs.php", mock_server.uri()))
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
}

#[test]
fn test_http_client_debug_hides_header_values() {
    let config = HttpClientConfig::builder()
        .header("ApiKey", "very-secret")
        .build();
    let client = HttpClient::with_config(config).unwrap();
    let debug_str = format!("{client:?}");
    assert!(debug_str.contains("HttpClient"));
    assert!(debug_str.contains("ApiKey"));
    assert!(!debug_str.contains("very-secret"));
}
