/*
[INPUT]:  HTTP method, path, query parameters, optional JSON body
[OUTPUT]: Immutable request descriptor consumed by the dispatcher
[POS]:    HTTP layer - request shaping before signing
[UPDATE]: When request descriptors need new parts (headers, raw bodies)
*/

use reqwest::Method;
use serde::Serialize;

use crate::http::signature::{QueryParams, encoded_query_string, raw_query_string};
use crate::http::{FoxbitError, Result};

/// One REST call: method, path, ordered query parameters and canonical JSON body
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    method: Method,
    path: String,
    params: QueryParams,
    body: Option<String>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            params: QueryParams::new(),
            body: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Replace the query parameters
    pub fn with_params(self, params: QueryParams) -> Self {
        Self { params, ..self }
    }

    /// Add or overwrite a single query parameter
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Serialize `body` once; the resulting string is both signed and sent
    pub fn with_json<B>(self, body: &B) -> Result<Self>
    where
        B: Serialize + ?Sized,
    {
        let raw = serde_json::to_string(body).map_err(FoxbitError::Serialization)?;
        Ok(Self {
            body: Some(raw),
            ..self
        })
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn params(&self) -> &QueryParams {
        &self.params
    }

    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    /// Body as it enters the pre-hash (empty when there is none)
    pub fn raw_body(&self) -> &str {
        self.body.as_deref().unwrap_or_default()
    }

    pub fn raw_query(&self) -> String {
        raw_query_string(&self.params)
    }

    pub fn encoded_query(&self) -> String {
        encoded_query_string(&self.params)
    }
}
