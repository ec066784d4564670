/*
[INPUT]:  Request metadata (timestamp, method, path, query, body) and HMAC secret
[OUTPUT]: X-FB-ACCESS-SIGNATURE value and the timestamp it was computed for
[POS]:    HTTP layer - request signing for authenticated endpoints
[UPDATE]: When changing signing algorithm or pre-hash layout
*/

use std::collections::BTreeMap;
use std::fmt;

use chrono::Utc;
use hmac::{Hmac, Mac};
use reqwest::Method;
use sha2::Sha256;
use tracing::{debug, trace};

use crate::http::{FoxbitError, Result};

type HmacSha256 = Hmac<Sha256>;

/// Query parameters, iterated in key order for both signing and transmission
pub type QueryParams = BTreeMap<String, String>;

/// Timestamp and signature produced for one request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureEnvelope {
    pub timestamp: String,
    pub signature: String,
}

/// Signs requests with the account's HMAC secret
#[derive(Clone)]
pub struct RequestSigner {
    secret: String,
}

impl fmt::Debug for RequestSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestSigner")
            .field("secret", &"<redacted>")
            .finish()
    }
}

impl RequestSigner {
    /// Create a signer; an empty secret is a configuration error
    pub fn new(secret: impl Into<String>) -> Result<Self> {
        let secret = secret.into();
        if secret.is_empty() {
            return Err(FoxbitError::Config(
                "API secret is missing; cannot sign requests".to_string(),
            ));
        }
        Ok(Self { secret })
    }

    /// Sign a request for an explicit timestamp
    ///
    /// Format: "{timestamp}{METHOD}{path}{raw_query}{raw_body}"
    /// Returns lowercase hex HMAC-SHA256
    pub fn sign(
        &self,
        method: &Method,
        path: &str,
        params: &QueryParams,
        raw_body: &str,
        timestamp: &str,
    ) -> Result<String> {
        let raw_query = raw_query_string(params);
        let message = prehash(timestamp, method.as_str(), path, &raw_query, raw_body);
        debug!(prehash = %message, "computed request pre-hash");

        let signature = hmac_sha256_hex(self.secret.as_bytes(), message.as_bytes())?;
        trace!(%signature, "computed request signature");
        Ok(signature)
    }

    /// Sign a request with the current wall-clock timestamp
    pub fn sign_now(
        &self,
        method: &Method,
        path: &str,
        params: &QueryParams,
        raw_body: &str,
    ) -> Result<SignatureEnvelope> {
        let timestamp = current_timestamp_millis();
        let signature = self.sign(method, path, params, raw_body, &timestamp)?;
        Ok(SignatureEnvelope {
            timestamp,
            signature,
        })
    }
}

/// `key=value` pairs joined by `&`, without any percent-encoding.
///
/// This is the representation the exchange expects inside the pre-hash; it is
/// never sent on the wire.
pub fn raw_query_string(params: &QueryParams) -> String {
    params
        .iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join("&")
}

/// Query string as transmitted: each key and value percent-encoded on its own
pub fn encoded_query_string(params: &QueryParams) -> String {
    params
        .iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                urlencoding::encode(key),
                urlencoding::encode(value)
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

pub fn prehash(
    timestamp: &str,
    method: &str,
    path: &str,
    raw_query: &str,
    raw_body: &str,
) -> String {
    format!("{timestamp}{method}{path}{raw_query}{raw_body}")
}

#[inline]
pub fn hmac_sha256_hex(key: &[u8], message: &[u8]) -> Result<String> {
    let mut mac = HmacSha256::new_from_slice(key)
        .map_err(|err| FoxbitError::Config(format!("invalid HMAC key: {err}")))?;
    mac.update(message);
    Ok(hex::encode(mac.finalize().into_bytes()))
}

/// Milliseconds since the Unix epoch, as sent in X-FB-ACCESS-TIMESTAMP
pub fn current_timestamp_millis() -> String {
    Utc::now().timestamp_millis().to_string()
}
