/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and signature checks
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for foxbit-rest-adapter tests
#![allow(dead_code)]

use foxbit_rest_adapter::http::signature::{hmac_sha256_hex, prehash, raw_query_string};
use foxbit_rest_adapter::{ClientConfig, Credentials, FoxbitClient, QueryParams};
use wiremock::{MockServer, Request};

pub const TEST_ACCESS_KEY: &str = "test-access-key";
pub const TEST_SECRET: &str = "test-secret";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

pub fn test_credentials() -> Credentials {
    Credentials::new(TEST_ACCESS_KEY, TEST_SECRET).expect("test credentials")
}

/// Client pointed at the mock server
pub fn test_client(server: &MockServer) -> FoxbitClient {
    FoxbitClient::with_config_and_base_url(test_credentials(), ClientConfig::default(), &server.uri())
        .expect("client init")
}

pub fn header<'a>(request: &'a Request, name: &str) -> Option<&'a str> {
    request
        .headers
        .get(name)
        .and_then(|value| value.to_str().ok())
}

/// Rebuild the pre-hash from what reached the server and check the signature header
pub fn signature_matches(request: &Request) -> bool {
    let Some(timestamp) = header(request, "x-fb-access-timestamp") else {
        return false;
    };
    let Some(signature) = header(request, "x-fb-access-signature") else {
        return false;
    };

    let params: QueryParams = request
        .url
        .query_pairs()
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();
    let raw_body = String::from_utf8_lossy(&request.body);
    let message = prehash(
        timestamp,
        request.method.as_str(),
        request.url.path(),
        &raw_query_string(&params),
        &raw_body,
    );

    hmac_sha256_hex(TEST_SECRET.as_bytes(), message.as_bytes())
        .map(|expected| expected == signature)
        .unwrap_or(false)
}

/// The single request the server received
pub async fn only_request(server: &MockServer) -> Request {
    let mut requests = server
        .received_requests()
        .await
        .expect("request recording enabled");
    assert_eq!(requests.len(), 1, "expected exactly one request");
    requests.remove(0)
}
