//! HTTP binding behavior against a mock backend: credential attachment,
//! envelope unwrapping, and the global 401 handling.

use papertrade_client::prelude::*;

use std::sync::Arc;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(server: &MockServer) -> (PapertradeClient, Arc<MemorySessionStore>) {
    let store = Arc::new(MemorySessionStore::new());
    let client = PapertradeClient::builder()
        .base_url(&server.uri())
        .session_store(store.clone())
        .build();
    (client, store)
}

fn envelope(data: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(serde_json::json!({
        "success": true,
        "data": data,
    }))
}

#[tokio::test]
async fn stored_credential_is_sent_as_bearer_header() {
    let server = MockServer::start().await;
    let store = Arc::new(MemorySessionStore::new());
    store.save("tok-1");
    let client = PapertradeClient::builder()
        .base_url(&server.uri())
        .session_store(store)
        .build();

    Mock::given(method("GET"))
        .and(path("/transaction/getStockPrices"))
        .and(header("authorization", "Bearer tok-1"))
        .respond_with(envelope(serde_json::json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let stocks = client.stocks().prices(&QueryOptions::default()).await.unwrap();
    assert!(stocks.is_empty());
}

#[tokio::test]
async fn requests_without_credential_carry_no_auth_header() {
    let server = MockServer::start().await;
    let (client, _) = test_client(&server);

    Mock::given(method("GET"))
        .and(path("/transaction/getStockPrices"))
        .respond_with(envelope(serde_json::json!([])))
        .mount(&server)
        .await;

    client.stocks().prices(&QueryOptions::default()).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn auth_failure_clears_session_and_redirects_once() {
    let server = MockServer::start().await;
    let store = Arc::new(MemorySessionStore::new());
    store.save("expired-token");
    let client = PapertradeClient::builder()
        .base_url(&server.uri())
        .session_store(store.clone())
        .build();
    assert_eq!(client.navigator().current(), Route::Home);

    Mock::given(method("GET"))
        .and(path("/transaction/getStockPortfolio"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let result = client.portfolio().holdings(&QueryOptions::default()).await;
    assert!(matches!(
        result,
        Err(ClientError::Http(HttpError::Unauthorized))
    ));

    // credential gone, exactly one redirect to login
    assert_eq!(store.read(), None);
    assert_eq!(client.navigator().current(), Route::Login);
    let visits_to_login = client
        .navigator()
        .visited()
        .iter()
        .filter(|r| **r == Route::Login)
        .count();
    assert_eq!(visits_to_login, 1);
}

#[tokio::test]
async fn server_detail_message_is_surfaced() {
    let server = MockServer::start().await;
    let (client, _) = test_client(&server);

    Mock::given(method("POST"))
        .and(path("/authentication/login"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(serde_json::json!({
                "detail": "User not found"
            })),
        )
        .mount(&server)
        .await;

    let err = client.auth().login("ghost", "pw").await.unwrap_err();
    assert_eq!(err.user_message(), "User not found");
}

#[tokio::test]
async fn message_field_works_as_detail_fallback() {
    let server = MockServer::start().await;
    let (client, _) = test_client(&server);

    Mock::given(method("POST"))
        .and(path("/authentication/register"))
        .respond_with(
            ResponseTemplate::new(409).set_body_json(serde_json::json!({
                "message": "Username already exists"
            })),
        )
        .mount(&server)
        .await;

    let err = client
        .auth()
        .register("alice", "Alice", "pw")
        .await
        .unwrap_err();
    assert_eq!(err.user_message(), "Username already exists");
}

#[tokio::test]
async fn unexpected_errors_fall_back_to_generic_message() {
    let server = MockServer::start().await;
    let (client, _) = test_client(&server);

    Mock::given(method("GET"))
        .and(path("/transaction/getWalletBalance"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let err = client
        .wallet()
        .balance(&QueryOptions::default())
        .await
        .unwrap_err();
    assert_eq!(err.user_message(), "An unknown error occurred");
}

#[tokio::test]
async fn envelope_payload_is_unwrapped() {
    let server = MockServer::start().await;
    let (client, _) = test_client(&server);

    Mock::given(method("GET"))
        .and(path("/transaction/getWalletBalance"))
        .respond_with(envelope(serde_json::json!({"balance": 100.5})))
        .mount(&server)
        .await;

    let wallet = client
        .wallet()
        .balance(&QueryOptions::default())
        .await
        .unwrap();
    assert_eq!(wallet.balance, rust_decimal::Decimal::new(1005, 1));
}

#[tokio::test]
async fn opt_in_retry_recovers_from_transient_failure() {
    let server = MockServer::start().await;
    let (client, _) = test_client(&server);

    Mock::given(method("GET"))
        .and(path("/transaction/getStockPrices"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/transaction/getStockPrices"))
        .respond_with(envelope(serde_json::json!([
            {"stock_id": 1, "stock_name": "AAPL", "price": 150.0}
        ])))
        .mount(&server)
        .await;

    let stocks = client.stocks().prices(&QueryOptions::retrying()).await.unwrap();
    assert_eq!(stocks.len(), 1);
    assert_eq!(stocks[0].stock_name, "AAPL");
}

#[tokio::test]
async fn default_options_never_retry() {
    let server = MockServer::start().await;
    let (client, _) = test_client(&server);

    Mock::given(method("GET"))
        .and(path("/transaction/getStockPrices"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let result = client.stocks().prices(&QueryOptions::default()).await;
    assert!(result.is_err());
}
