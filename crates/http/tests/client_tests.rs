//! Integration tests for the portfolio HTTP client

use portfolio_core::{LoginRequest, MemoryTokenStore, SignupRequest, TokenStore};
use portfolio_http::{ApiClient, ClientError, SessionInterceptor};
use serde_json::json;
use std::cell::Cell;
use std::rc::Rc;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Client wired with a session interceptor over an in-memory store
fn session_client(
    uri: String,
    token: &str,
) -> (ApiClient, Rc<MemoryTokenStore>, Rc<Cell<u32>>) {
    let store = Rc::new(MemoryTokenStore::with_token(token));
    let redirects = Rc::new(Cell::new(0));

    let interceptor = {
        let redirects = Rc::clone(&redirects);
        SessionInterceptor::new(store.clone(), move || redirects.set(redirects.get() + 1))
    };

    let client = ApiClient::builder()
        .base_url(uri)
        .bearer_token(token)
        .interceptor(interceptor)
        .build()
        .unwrap();

    (client, store, redirects)
}

#[tokio::test]
async fn test_client_builder() {
    let client = ApiClient::builder()
        .base_url("http://localhost:5000/")
        .build()
        .unwrap();

    assert_eq!(client.base_url(), "http://localhost:5000");
    assert_eq!(client.bearer_token(), None);
}

#[tokio::test]
async fn test_client_builder_requires_base_url() {
    let result = ApiClient::builder().build();
    assert!(matches!(result, Err(ClientError::Configuration(_))));
}

#[tokio::test]
async fn test_requests_carry_client_user_agent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/dashboard"))
        .and(header(
            "user-agent",
            format!("portfolio-client/{}", env!("CARGO_PKG_VERSION")).as_str(),
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"first_name": "Ada"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(mock_server.uri()).unwrap();
    client.dashboard().await.unwrap();
}

#[tokio::test]
async fn test_requests_carry_bearer_header() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/dashboard"))
        .and(header("authorization", "Bearer jwt-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"first_name": "Ada"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(mock_server.uri()).unwrap();
    client.set_bearer_token("jwt-123");

    let dashboard = client.dashboard().await.unwrap();
    assert_eq!(dashboard.first_name, "Ada");
}

#[tokio::test]
async fn test_unauthorized_clears_session_and_redirects() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/portfolio"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"msg": "Token has expired"})),
        )
        .mount(&mock_server)
        .await;

    let (client, store, redirects) = session_client(mock_server.uri(), "stale-token");

    let err = client.portfolio().await.unwrap_err();
    match &err {
        ClientError::Unauthorized(message) => assert_eq!(message, "Token has expired"),
        other => panic!("expected Unauthorized, got {other:?}"),
    }
    assert_eq!(store.token(), None);
    assert_eq!(client.bearer_token(), None);
    assert_eq!(redirects.get(), 1);
}

#[tokio::test]
async fn test_success_leaves_session_alone() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/dashboard"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"first_name": "Ada"})))
        .mount(&mock_server)
        .await;

    let (client, store, redirects) = session_client(mock_server.uri(), "good-token");

    client.dashboard().await.unwrap();
    assert_eq!(store.token().as_deref(), Some("good-token"));
    assert_eq!(client.bearer_token().as_deref(), Some("good-token"));
    assert_eq!(redirects.get(), 0);
}

#[tokio::test]
async fn test_other_errors_pass_through() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/dashboard"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"message": "User not found"})))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/portfolio"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"error": "db down"})))
        .mount(&mock_server)
        .await;

    let (client, store, redirects) = session_client(mock_server.uri(), "good-token");

    match client.dashboard().await {
        Err(ClientError::NotFound(message)) => assert_eq!(message, "User not found"),
        other => panic!("expected NotFound, got {other:?}"),
    }
    match client.portfolio().await {
        Err(ClientError::ServerError { status, message }) => {
            assert_eq!(status, 500);
            assert_eq!(message, "db down");
        }
        other => panic!("expected ServerError, got {other:?}"),
    }

    assert!(store.has_token());
    assert_eq!(redirects.get(), 0);
}

#[tokio::test]
async fn test_login_posts_credentials() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/login"))
        .and(body_json(json!({"email": "ada@example.com", "password": "Str0ng!pass"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": "jwt-abc"})))
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(mock_server.uri()).unwrap();
    let response = client
        .login(&LoginRequest {
            email: "ada@example.com".into(),
            password: "Str0ng!pass".into(),
        })
        .await
        .unwrap();

    assert_eq!(response.token, "jwt-abc");
}

#[tokio::test]
async fn test_signup_surfaces_backend_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/signup"))
        .and(body_json(json!({
            "firstName": "Ada",
            "lastName": "Lovelace",
            "email": "ada@example.com",
            "password": "Str0ng!pass"
        })))
        .respond_with(ResponseTemplate::new(400).set_body_json(
            json!({"error": "An account already exists with that email"}),
        ))
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(mock_server.uri()).unwrap();
    let err = client
        .signup(&SignupRequest {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ada@example.com".into(),
            password: "Str0ng!pass".into(),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::BadRequest(_)));
    assert_eq!(err.user_message(), "An account already exists with that email");
}

#[tokio::test]
async fn test_portfolio_rows_are_typed() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/portfolio"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "portfolio": [["MSFT", "Technology", 3, "310.00", "Wed, 03 Jan 2024 00:00:00 GMT"]],
            "status": "success"
        })))
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(mock_server.uri()).unwrap();
    let portfolio = client.portfolio().await.unwrap();

    assert_eq!(portfolio.portfolio.len(), 1);
    assert_eq!(portfolio.portfolio[0].stock, "MSFT");
    assert!((portfolio.total_value() - 930.0).abs() < 1e-9);
}

#[tokio::test]
async fn test_bad_price_is_a_serialization_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/portfolio"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "portfolio": [["AAPL", "Tech", 10, "n/a", "Wed, 03 Jan 2024 00:00:00 GMT"]],
            "status": "success"
        })))
        .mount(&mock_server)
        .await;

    let (client, store, redirects) = session_client(mock_server.uri(), "good-token");

    let err = client.portfolio().await.unwrap_err();
    assert!(matches!(err, ClientError::Serialization(_)), "{err:?}");
    assert!(store.has_token());
    assert_eq!(redirects.get(), 0);
}
