// heron-client/tests/client_integration.rs
// Integration tests that don't require a live API

use heron_client::{ClientConfig, ClientError, HttpClient};
use shared::error::{AppError, ErrorCode};
use shared::request::ListQuery;

#[tokio::test]
async fn test_client_config_defaults() {
    let config = ClientConfig::default();
    assert_eq!(config.base_url, "http://localhost:8080");
    assert_eq!(config.timeout, 30);
    assert!(config.token.is_none());
}

#[tokio::test]
async fn test_client_config_builder() {
    let config = ClientConfig::new("https://api.heron.example")
        .with_token("jwt-token")
        .with_timeout(5);

    assert_eq!(config.base_url, "https://api.heron.example");
    assert_eq!(config.token.as_deref(), Some("jwt-token"));
    assert_eq!(config.timeout, 5);

    let client = config.build_http_client();
    assert_eq!(client.token(), Some("jwt-token"));
}

#[tokio::test]
async fn test_token_lifecycle() {
    let mut client = HttpClient::new(&ClientConfig::new("http://localhost:8080"));
    assert!(client.token().is_none());

    client.set_token(Some("abc".into()));
    assert_eq!(client.token(), Some("abc"));

    client.set_token(None);
    assert!(client.token().is_none());
}

#[tokio::test]
async fn test_unreachable_host_surfaces_http_error() {
    // Reserved TEST-NET-1 address; connection must fail fast
    let config = ClientConfig::new("http://192.0.2.1:9").with_timeout(1);
    let client = config.build_http_client();

    let result = client.jobs().list(&ListQuery::default()).await;
    assert!(matches!(result, Err(ClientError::Http(_))));
}

#[test]
fn test_client_error_to_app_error_mapping() {
    let err: AppError = ClientError::Unauthorized.into();
    assert_eq!(err.code, ErrorCode::NotAuthenticated);

    let err: AppError = ClientError::Validation("page_size too large".into()).into();
    assert_eq!(err.code, ErrorCode::ValidationFailed);

    let err: AppError = ClientError::Internal("boom".into()).into();
    assert_eq!(err.code, ErrorCode::InternalError);
}
