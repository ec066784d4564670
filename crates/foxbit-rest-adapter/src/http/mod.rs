/*
[INPUT]:  HTTP client configuration, credentials and API endpoints
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod client;
pub mod error;
pub mod public;
pub mod request;
pub mod signature;
pub mod trade;
pub mod user;

pub use error::{FoxbitError, Result};
pub use request::ApiRequest;
pub use signature::{QueryParams, RequestSigner, SignatureEnvelope};

pub use client::{ClientConfig, Credentials, FoxbitClient};
