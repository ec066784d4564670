/*
[INPUT]:  Mock Foxbit REST v3 server
[OUTPUT]: Test results for the order lifecycle demo
[POS]:    Integration tests - demo sequence end to end
[UPDATE]: When the demo sequence changes
*/

use std::time::Duration;

use foxbit_rest_adapter::{ClientConfig, Credentials, FoxbitClient, FoxbitError, OrderId};
use foxbit_rest_demo::{DemoConfig, run_demo};
use serde_json::json;
use tokio_test::assert_ok;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> FoxbitClient {
    let credentials = Credentials::new("demo-access-key", "demo-secret").expect("credentials");
    FoxbitClient::with_config_and_base_url(credentials, ClientConfig::default(), &server.uri())
        .expect("client init")
}

fn fast_config() -> DemoConfig {
    DemoConfig {
        settle_delay: Duration::ZERO,
        ..DemoConfig::default()
    }
}

async fn mount_me_and_ticker(server: &MockServer, ticker: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/rest/v3/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"sn": "AB12"})))
        .expect(1)
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/rest/v3/markets/btcbrl/ticker/24hr"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ticker))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_demo_places_lists_and_cancels() {
    let server = MockServer::start().await;
    mount_me_and_ticker(
        &server,
        json!({"data": [{"market_symbol": "btcbrl", "best": {"bid": {"price": "500000", "volume": "1"}}}]}),
    )
    .await;
    Mock::given(method("POST"))
        .and(path("/rest/v3/orders"))
        .and(body_json(json!({
            "market_symbol": "btcbrl",
            "side": "BUY",
            "type": "LIMIT",
            "price": "450000.00000000",
            "quantity": "0.0001",
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 987654321})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/rest/v3/orders"))
        .and(query_param("market_symbol", "btcbrl"))
        .and(query_param("state", "ACTIVE"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"id": "987654321", "state": "ACTIVE"}]
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/rest/v3/orders/cancel"))
        .and(body_json(json!({"type": "ID", "id": "987654321"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": [{"id": 987654321}]})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let report = assert_ok!(run_demo(&client, &fast_config()).await);
    assert_eq!(report.target_price.to_string(), "450000.00000000");
    assert_eq!(report.order_id, OrderId::from("987654321"));
    assert_eq!(report.active_orders, 1);
    assert_eq!(report.cancelled_orders, 1);

    let received = server.received_requests().await.expect("recording enabled");
    let calls: Vec<(String, String)> = received
        .iter()
        .map(|request| (request.method.to_string(), request.url.path().to_string()))
        .collect();
    assert_eq!(
        calls,
        vec![
            ("GET".to_string(), "/rest/v3/me".to_string()),
            ("GET".to_string(), "/rest/v3/markets/btcbrl/ticker/24hr".to_string()),
            ("POST".to_string(), "/rest/v3/orders".to_string()),
            ("GET".to_string(), "/rest/v3/orders".to_string()),
            ("PUT".to_string(), "/rest/v3/orders/cancel".to_string()),
        ]
    );

    let listing = &received[3];
    let start_time = listing
        .url
        .query_pairs()
        .find(|(key, _)| key == "start_time")
        .map(|(_, value)| value.into_owned())
        .expect("start_time filter");
    assert_eq!(start_time.len(), "2024-01-01T00:00:00Z".len());
    assert!(start_time.ends_with('Z'));
    assert!(
        listing
            .url
            .query()
            .is_some_and(|query| query.contains("start_time=") && query.contains("%3A"))
    );
}

#[tokio::test]
async fn test_demo_stops_without_best_bid() {
    let server = MockServer::start().await;
    mount_me_and_ticker(
        &server,
        json!({"data": [{"market_symbol": "btcbrl", "best": {"ask": {"price": "1"}}}]}),
    )
    .await;
    Mock::given(method("POST"))
        .and(path("/rest/v3/orders"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 1})))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = run_demo(&client, &fast_config())
        .await
        .expect_err("no bid to price from");
    assert!(matches!(err, FoxbitError::InvalidResponse(_)));
}

#[tokio::test]
async fn test_demo_stops_on_rejected_order() {
    let server = MockServer::start().await;
    mount_me_and_ticker(
        &server,
        json!({"data": [{"market_symbol": "btcbrl", "best": {"bid": {"price": "500000"}}}]}),
    )
    .await;
    Mock::given(method("POST"))
        .and(path("/rest/v3/orders"))
        .respond_with(ResponseTemplate::new(400).set_body_string(r#"{"error":"insufficient funds"}"#))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/rest/v3/orders/cancel"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = run_demo(&client, &fast_config())
        .await
        .expect_err("order rejected");
    assert_eq!(err.status(), Some(400));
    assert_eq!(err.body(), Some(r#"{"error":"insufficient funds"}"#));
}
