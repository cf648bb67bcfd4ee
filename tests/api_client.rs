mod common;

use common::mock_backend::{MockBackend, MockResponse};
use conduit::api::{ApiClient, ApiError, ArticleFilter};
use conduit::config::{ApiConfig, SecureString};

fn api(backend: &MockBackend) -> ApiClient {
    ApiClient::new(&ApiConfig {
        base_url: backend.base_url(),
        ..ApiConfig::default()
    })
    .unwrap()
}

#[tokio::test]
async fn guest_requests_carry_no_credential() {
    let backend = MockBackend::start().await;
    let api = api(&backend);
    backend
        .enqueue_response(MockResponse::json(r#"{"tags": []}"#))
        .await;

    api.tags().await.unwrap();
    let request = &backend.captured_requests().await[0];
    assert_eq!(request.method, "GET");
    assert_eq!(request.path, "/api/tags");
    assert_eq!(request.header("authorization"), None);
}

#[tokio::test]
async fn custom_auth_scheme_is_used() {
    let backend = MockBackend::start().await;
    let api = ApiClient::new(&ApiConfig {
        base_url: backend.base_url(),
        auth_scheme: "Bearer".to_string(),
        ..ApiConfig::default()
    })
    .unwrap();
    api.set_token(Some(SecureString::new("abc")));
    backend
        .enqueue_response(MockResponse::json(r#"{"tags": []}"#))
        .await;

    api.tags().await.unwrap();
    assert_eq!(
        backend.captured_requests().await[0].header("authorization"),
        Some("Bearer abc")
    );
}

#[tokio::test]
async fn error_body_becomes_message() {
    let backend = MockBackend::start().await;
    let api = api(&backend);
    backend
        .enqueue_response(MockResponse::error(422, "body", "can't be empty"))
        .await;

    let err = api.add_comment("hello", "").await.unwrap_err();
    assert_eq!(err.status(), Some(422));
    assert!(!err.is_unauthorized());
    assert_eq!(
        err.to_string(),
        "Request failed with status code 422: body can't be empty"
    );
}

#[tokio::test]
async fn non_json_error_falls_back_to_reason() {
    let backend = MockBackend::start().await;
    let api = api(&backend);
    backend.enqueue_response(MockResponse::empty(401)).await;

    let err = api.current_user().await.unwrap_err();
    assert!(err.is_unauthorized());
    assert!(err.to_string().ends_with("Unauthorized"));
}

#[tokio::test]
async fn malformed_success_body_is_decode_error() {
    let backend = MockBackend::start().await;
    let api = api(&backend);
    backend
        .enqueue_response(MockResponse::json(r#"{"articles": "nope"}"#))
        .await;

    let err = api.list_articles(&ArticleFilter::default()).await.unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[tokio::test]
async fn delete_accepts_empty_success() {
    let backend = MockBackend::start().await;
    let api = api(&backend);
    backend.enqueue_response(MockResponse::empty(204)).await;
    backend.enqueue_response(MockResponse::json("{}")).await;

    api.delete_comment("hello", 3).await.unwrap();
    api.delete_article("hello").await.unwrap();

    let paths: Vec<String> = backend
        .captured_requests()
        .await
        .into_iter()
        .map(|r| format!("{} {}", r.method, r.path))
        .collect();
    assert_eq!(
        paths,
        vec![
            "DELETE /api/articles/hello/comments/3",
            "DELETE /api/articles/hello"
        ]
    );
}

#[tokio::test]
async fn unreachable_backend_is_transport_error() {
    let api = ApiClient::new(&ApiConfig {
        base_url: "http://127.0.0.1:9/api".to_string(),
        connect_timeout_seconds: 1,
        timeout_seconds: 2,
        ..ApiConfig::default()
    })
    .unwrap();

    let err = api.tags().await.unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
    assert_eq!(err.status(), None);
}
