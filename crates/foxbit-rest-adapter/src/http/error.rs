/*
[INPUT]:  Error sources (configuration, transport, HTTP status, JSON, response shape)
[OUTPUT]: Structured error types carrying status code and response body
[POS]:    Error handling layer - unified error type for the whole crate
[UPDATE]: When adding new error sources or improving error messages
*/

use thiserror::Error;

/// Main error type for the Foxbit adapter
#[derive(Error, Debug)]
pub enum FoxbitError {
    /// Credentials or client settings are missing or unusable
    #[error("Configuration error: {0}")]
    Config(String),

    /// Connection, DNS, TLS or timeout failure
    #[error("HTTP transport failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Server answered with a status outside the success set
    #[error("HTTP status {status}: {body}")]
    HttpStatus { status: u16, body: String },

    /// Response body is not the JSON we expected
    #[error("Failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),

    /// Request body could not be encoded
    #[error("Failed to serialize request body: {0}")]
    Serialization(serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Response parsed but lacks a field the caller relies on
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl FoxbitError {
    /// HTTP status code, when the server produced one
    pub fn status(&self) -> Option<u16> {
        match self {
            FoxbitError::HttpStatus { status, .. } => Some(*status),
            FoxbitError::Transport(err) => err.status().map(|status| status.as_u16()),
            _ => None,
        }
    }

    /// Response body captured with a status error
    pub fn body(&self) -> Option<&str> {
        match self {
            FoxbitError::HttpStatus { body, .. } => Some(body.as_str()),
            _ => None,
        }
    }

    pub fn is_config_error(&self) -> bool {
        matches!(self, FoxbitError::Config(_))
    }

    /// Whether the transport gave up waiting
    pub fn is_timeout(&self) -> bool {
        matches!(self, FoxbitError::Transport(err) if err.is_timeout())
    }

    pub(crate) fn missing_field(field: &str) -> Self {
        FoxbitError::InvalidResponse(format!("missing field `{field}` in response"))
    }
}

/// Result type alias for Foxbit operations
pub type Result<T> = std::result::Result<T, FoxbitError>;
