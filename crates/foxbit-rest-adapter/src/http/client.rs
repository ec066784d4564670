/*
[INPUT]:  HTTP configuration (base URL, timeouts), injected credentials, request descriptors
[OUTPUT]: Signed HTTP calls returning raw response bodies
[POS]:    HTTP layer - core client implementation and request dispatcher
[UPDATE]: When adding connection options or changing dispatch behavior
*/

use std::fmt;
use std::time::Duration;

use reqwest::header::{CONTENT_TYPE, HeaderValue};
use reqwest::{Client, Method, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use crate::http::request::ApiRequest;
use crate::http::signature::{QueryParams, RequestSigner};
use crate::http::{FoxbitError, Result};

/// Base URL for Foxbit API
pub const DEFAULT_BASE_URL: &str = "https://api.foxbit.com.br";

/// Environment variables read by [`Credentials::from_env`]
pub const API_KEY_ENV: &str = "FOXBIT_API_KEY";
pub const API_SECRET_ENV: &str = "FOXBIT_API_SECRET";

pub const ACCESS_KEY_HEADER: &str = "X-FB-ACCESS-KEY";
pub const ACCESS_TIMESTAMP_HEADER: &str = "X-FB-ACCESS-TIMESTAMP";
pub const ACCESS_SIGNATURE_HEADER: &str = "X-FB-ACCESS-SIGNATURE";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// Access key and HMAC secret for authenticated requests
#[derive(Clone)]
pub struct Credentials {
    access_key: String,
    secret: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("access_key", &self.masked_access_key())
            .field("secret", &"<redacted>")
            .finish()
    }
}

impl Credentials {
    /// Both values must be non-empty; the access key must fit in a header
    pub fn new(access_key: impl Into<String>, secret: impl Into<String>) -> Result<Self> {
        let access_key = access_key.into();
        let secret = secret.into();

        if access_key.is_empty() {
            return Err(FoxbitError::Config("API access key is missing".to_string()));
        }
        if secret.is_empty() {
            return Err(FoxbitError::Config("API secret is missing".to_string()));
        }
        HeaderValue::from_str(&access_key).map_err(|_| {
            FoxbitError::Config("API access key is not a valid header value".to_string())
        })?;

        Ok(Self { access_key, secret })
    }

    /// Read `FOXBIT_API_KEY` and `FOXBIT_API_SECRET` from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolve both variables through `lookup`
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let access_key = lookup(API_KEY_ENV)
            .filter(|value| !value.is_empty())
            .ok_or_else(|| FoxbitError::Config(format!("{API_KEY_ENV} is not set")))?;
        let secret = lookup(API_SECRET_ENV)
            .filter(|value| !value.is_empty())
            .ok_or_else(|| FoxbitError::Config(format!("{API_SECRET_ENV} is not set")))?;
        Self::new(access_key, secret)
    }

    pub fn access_key(&self) -> &str {
        &self.access_key
    }

    /// First four characters of the access key, for logs
    pub fn masked_access_key(&self) -> String {
        let visible: String = self.access_key.chars().take(4).collect();
        format!("{visible}****")
    }

    pub(crate) fn secret(&self) -> &str {
        &self.secret
    }
}

/// Main HTTP client for Foxbit REST v3
#[derive(Debug)]
pub struct FoxbitClient {
    http_client: Client,
    base_url: Url,
    credentials: Credentials,
    signer: RequestSigner,
}

impl FoxbitClient {
    /// Create a new client with default configuration
    pub fn new(credentials: Credentials) -> Result<Self> {
        Self::with_config(credentials, ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(credentials: Credentials, config: ClientConfig) -> Result<Self> {
        Self::with_config_and_base_url(credentials, config, DEFAULT_BASE_URL)
    }

    /// Create a new client against a custom host (mock servers, sandboxes)
    pub fn with_config_and_base_url(
        credentials: Credentials,
        config: ClientConfig,
        base_url: &str,
    ) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()
            .map_err(|err| FoxbitError::Config(format!("failed to build HTTP client: {err}")))?;
        let signer = RequestSigner::new(credentials.secret())?;

        Ok(Self {
            http_client,
            base_url: Url::parse(base_url)?,
            credentials,
            signer,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn signer(&self) -> &RequestSigner {
        &self.signer
    }

    /// `base_url + path`, plus the percent-encoded query when there is one
    pub fn url_for(&self, request: &ApiRequest) -> Result<Url> {
        let base = self.base_url.as_str().trim_end_matches('/');
        let mut url = Url::parse(&format!("{base}{}", request.path()))?;

        let query = request.encoded_query();
        if !query.is_empty() {
            url.set_query(Some(&query));
        }
        Ok(url)
    }

    /// Sign and send one request, returning the body on 200/201
    pub async fn execute(&self, request: &ApiRequest) -> Result<String> {
        let envelope = self.signer.sign_now(
            request.method(),
            request.path(),
            request.params(),
            request.raw_body(),
        )?;
        let url = self.url_for(request)?;

        info!(method = %request.method(), path = request.path(), "requesting");

        let mut builder = self
            .http_client
            .request(request.method().clone(), url)
            .header(ACCESS_KEY_HEADER, self.credentials.access_key())
            .header(ACCESS_TIMESTAMP_HEADER, envelope.timestamp.as_str())
            .header(ACCESS_SIGNATURE_HEADER, envelope.signature.as_str())
            .header(CONTENT_TYPE, "application/json");
        if let Some(body) = request.body() {
            builder = builder.body(body.to_owned());
        }

        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !is_success(status) {
            warn!(
                status = status.as_u16(),
                response_body = %body,
                method = %request.method(),
                path = request.path(),
                "request failed"
            );
            return Err(FoxbitError::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        debug!(status = status.as_u16(), bytes = body.len(), "response received");
        Ok(body)
    }

    /// Dispatch by parts: method, path, optional query, optional JSON body
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        params: Option<&QueryParams>,
        body: Option<&serde_json::Value>,
    ) -> Result<String> {
        let mut request = ApiRequest::new(method, path);
        if let Some(params) = params {
            request = request.with_params(params.clone());
        }
        if let Some(body) = body {
            request = request.with_json(body)?;
        }
        self.execute(&request).await
    }

    /// Execute and deserialize the body
    pub(crate) async fn send_json<T>(&self, request: &ApiRequest) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let body = self.execute(request).await?;
        Ok(serde_json::from_str(&body)?)
    }
}

fn is_success(status: StatusCode) -> bool {
    matches!(status, StatusCode::OK | StatusCode::CREATED)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_credentials() -> Credentials {
        Credentials::new("test-access-key", "test-secret").unwrap()
    }

    #[test]
    fn test_credentials_reject_missing_values() {
        assert!(Credentials::new("", "secret").unwrap_err().is_config_error());
        assert!(Credentials::new("key", "").unwrap_err().is_config_error());
        assert!(
            Credentials::new("bad\nkey", "secret")
                .unwrap_err()
                .is_config_error()
        );
    }

    #[test]
    fn test_credentials_from_lookup() {
        let credentials = Credentials::from_lookup(|name| match name {
            API_KEY_ENV => Some("lookup-key".to_string()),
            API_SECRET_ENV => Some("lookup-secret".to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(credentials.access_key(), "lookup-key");
        assert_eq!(credentials.secret(), "lookup-secret");
    }

    #[test]
    fn test_credentials_from_lookup_names_missing_variable() {
        let err = Credentials::from_lookup(|name| match name {
            API_KEY_ENV => Some("lookup-key".to_string()),
            _ => None,
        })
        .unwrap_err();
        assert!(err.is_config_error());
        assert!(err.to_string().contains(API_SECRET_ENV));

        let err = Credentials::from_lookup(|_| Some(String::new())).unwrap_err();
        assert!(err.to_string().contains(API_KEY_ENV));
    }

    #[test]
    fn test_credentials_debug_hides_secret() {
        let rendered = format!("{:?}", test_credentials());
        assert!(!rendered.contains("test-secret"));
        assert!(!rendered.contains("test-access-key"));
        assert!(rendered.contains("test****"));
    }

    #[test]
    fn test_url_for_appends_encoded_query() {
        let client = FoxbitClient::with_config_and_base_url(
            test_credentials(),
            ClientConfig::default(),
            "http://127.0.0.1:9000",
        )
        .unwrap();

        let request = ApiRequest::get("/rest/v3/orders")
            .with_param("market_symbol", "btcbrl")
            .with_param("start_time", "2024-01-01T00:00:00Z");
        let url = client.url_for(&request).unwrap();
        assert_eq!(
            url.as_str(),
            "http://127.0.0.1:9000/rest/v3/orders?market_symbol=btcbrl&start_time=2024-01-01T00%3A00%3A00Z"
        );

        let url = client.url_for(&ApiRequest::get("/rest/v3/me")).unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:9000/rest/v3/me");
        assert_eq!(url.query(), None);
    }

    #[test]
    fn test_default_base_url() {
        let client = FoxbitClient::new(test_credentials()).unwrap();
        assert_eq!(client.base_url().as_str(), "https://api.foxbit.com.br/");
    }

    #[test]
    fn test_invalid_base_url() {
        let err = FoxbitClient::with_config_and_base_url(
            test_credentials(),
            ClientConfig::default(),
            "not a url",
        )
        .unwrap_err();
        assert!(matches!(err, FoxbitError::UrlParse(_)));
    }

    #[test]
    fn test_success_set_is_200_and_201() {
        assert!(is_success(StatusCode::OK));
        assert!(is_success(StatusCode::CREATED));
        assert!(!is_success(StatusCode::NO_CONTENT));
        assert!(!is_success(StatusCode::IM_A_TEAPOT));
    }
}
